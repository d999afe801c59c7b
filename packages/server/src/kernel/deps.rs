//! Server dependencies for effects (using traits for testability)
//!
//! This module provides the central dependency container used by all domain effects.
//! All external services use trait abstractions so tests can swap in in-memory doubles.

use anyhow::{Context, Result};
use async_trait::async_trait;
use gemini_client::GeminiClient;
use mailer::MailerService;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::domains::directory::Organization;
use crate::kernel::{BaseDirectory, BaseNotificationTransport, BaseTextGenerator, OutboundMessage};

// =============================================================================
// PostgresDirectory (implements BaseDirectory trait)
// =============================================================================

/// Directory store backed by the `organizations` table
pub struct PostgresDirectory {
    pool: PgPool,
}

impl PostgresDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseDirectory for PostgresDirectory {
    async fn fetch_all(&self) -> Result<Vec<Organization>> {
        Organization::find_all(&self.pool).await
    }

    async fn ping(&self) -> Result<()> {
        tokio::time::timeout(
            Duration::from_secs(5),
            sqlx::query("SELECT 1").execute(&self.pool),
        )
        .await
        .context("Query timeout (>5s)")?
        .context("Query failed")?;
        Ok(())
    }
}

// =============================================================================
// MailerAdapter (implements BaseNotificationTransport trait)
// =============================================================================

/// Wrapper around MailerService that implements BaseNotificationTransport trait
pub struct MailerAdapter(pub Arc<MailerService>);

impl MailerAdapter {
    pub fn new(service: Arc<MailerService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseNotificationTransport for MailerAdapter {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        self.0
            .send_mail(
                &message.to,
                &message.subject,
                &message.body,
                message.idempotency_key.as_deref(),
            )
            .await
            .map(|_| ())
            .map_err(anyhow::Error::from)
    }
}

// =============================================================================
// GeminiAdapter (implements BaseTextGenerator trait)
// =============================================================================

/// Wrapper around GeminiClient that implements BaseTextGenerator trait
pub struct GeminiAdapter(pub Arc<GeminiClient>);

impl GeminiAdapter {
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseTextGenerator for GeminiAdapter {
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        self.0
            .generate_text(prompt)
            .await
            .map_err(anyhow::Error::from)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to effects (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub directory: Arc<dyn BaseDirectory>,
    pub transport: Arc<dyn BaseNotificationTransport>,
    pub text_generator: Arc<dyn BaseTextGenerator>,
    /// Sender address; also the recipient of test messages
    pub mail_from: String,
    /// Attach idempotency keys to outbound notifications
    pub notify_idempotency_keys: bool,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        directory: Arc<dyn BaseDirectory>,
        transport: Arc<dyn BaseNotificationTransport>,
        text_generator: Arc<dyn BaseTextGenerator>,
        mail_from: String,
        notify_idempotency_keys: bool,
    ) -> Self {
        Self {
            directory,
            transport,
            text_generator,
            mail_from,
            notify_idempotency_keys,
        }
    }
}
