// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Matching, dispatch planning and question parsing are domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseDirectory, BaseTextGenerator)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::directory::Organization;

// =============================================================================
// Directory Store Trait (Infrastructure - read-only for this service)
// =============================================================================

#[async_trait]
pub trait BaseDirectory: Send + Sync {
    /// Read the complete organization collection
    async fn fetch_all(&self) -> Result<Vec<Organization>>;

    /// Cheap reachability check used by the health route
    async fn ping(&self) -> Result<()> {
        // Default implementation does a full read
        self.fetch_all().await.map(|_| ())
    }
}

// =============================================================================
// Notification Transport Trait (Infrastructure - email)
// =============================================================================

/// A single outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
    /// Opaque key the transport may forward so a receiver can drop repeats
    pub idempotency_key: Option<String>,
}

#[async_trait]
pub trait BaseNotificationTransport: Send + Sync {
    /// Send one message. No retries; an error means this message was not delivered.
    async fn send(&self, message: &OutboundMessage) -> Result<()>;
}

// =============================================================================
// Text Generation Trait (Infrastructure - black-box LLM)
// =============================================================================

#[async_trait]
pub trait BaseTextGenerator: Send + Sync {
    /// Generate text for a prompt. `Ok(None)` means the backend replied without content.
    async fn generate(&self, prompt: &str) -> Result<Option<String>>;
}
