// TestDependencies - mock implementations for testing
//
// Provides in-memory services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::{
    BaseDirectory, BaseNotificationTransport, BaseTextGenerator, OutboundMessage, ServerDeps,
};
use crate::domains::directory::Organization;

/// Sender address used by test dependencies
pub const TEST_MAIL_FROM: &str = "matches@zero-sum.test";

/// Build an organization from an email and tag slices.
///
/// The business name is derived from the mailbox part ("legal@x.org" -> "legal").
pub fn organization(email: &str, have: &[&str], needed: &[&str]) -> Organization {
    Organization {
        id: None,
        email: email.to_string(),
        business_name: email.split('@').next().map(str::to_string),
        phone_number: None,
        resources_have: have.iter().map(|t| t.to_string()).collect(),
        resources_needed: needed.iter().map(|t| t.to_string()).collect(),
    }
}

// =============================================================================
// Mock Directory
// =============================================================================

pub struct MockDirectory {
    organizations: Arc<Mutex<Vec<Organization>>>,
    unavailable: bool,
    reads: Arc<Mutex<usize>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self {
            organizations: Arc::new(Mutex::new(Vec::new())),
            unavailable: false,
            reads: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_organization(self, organization: Organization) -> Self {
        self.organizations.lock().unwrap().push(organization);
        self
    }

    pub fn with_organizations(self, organizations: Vec<Organization>) -> Self {
        self.organizations.lock().unwrap().extend(organizations);
        self
    }

    /// Every read fails as if the store were unreachable
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Add an organization after construction (simulates a concurrent registration)
    pub fn insert(&self, organization: Organization) {
        self.organizations.lock().unwrap().push(organization);
    }

    /// Number of full-collection reads performed
    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseDirectory for MockDirectory {
    async fn fetch_all(&self) -> Result<Vec<Organization>> {
        *self.reads.lock().unwrap() += 1;

        if self.unavailable {
            anyhow::bail!("connection refused");
        }
        Ok(self.organizations.lock().unwrap().clone())
    }
}

// =============================================================================
// Mock Notification Transport
// =============================================================================

pub struct MockNotificationTransport {
    attempts: Arc<Mutex<Vec<OutboundMessage>>>,
    failing_recipients: Arc<Mutex<HashSet<String>>>,
}

impl MockNotificationTransport {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(Mutex::new(Vec::new())),
            failing_recipients: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Sends to this recipient fail
    pub fn with_failing_recipient(self, email: &str) -> Self {
        self.failing_recipients
            .lock()
            .unwrap()
            .insert(email.to_string());
        self
    }

    /// Every send attempt, successful or not, in order
    pub fn attempts(&self) -> Vec<OutboundMessage> {
        self.attempts.lock().unwrap().clone()
    }

    /// Messages that were accepted
    pub fn sent(&self) -> Vec<OutboundMessage> {
        let failing = self.failing_recipients.lock().unwrap();
        self.attempts
            .lock()
            .unwrap()
            .iter()
            .filter(|m| !failing.contains(&m.to))
            .cloned()
            .collect()
    }

    /// Accepted messages for one recipient
    pub fn sent_to(&self, email: &str) -> Vec<OutboundMessage> {
        self.sent().into_iter().filter(|m| m.to == email).collect()
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }
}

impl Default for MockNotificationTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseNotificationTransport for MockNotificationTransport {
    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        // Record the call
        self.attempts.lock().unwrap().push(message.clone());

        if self.failing_recipients.lock().unwrap().contains(&message.to) {
            anyhow::bail!("mailbox unavailable: {}", message.to);
        }
        Ok(())
    }
}

// =============================================================================
// Mock Text Generator
// =============================================================================

pub struct MockTextGenerator {
    responses: Arc<Mutex<Vec<Option<String>>>>,
    failing: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failing: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Some(response.into()));
        self
    }

    /// Queue a reply that carries no content
    pub fn with_empty_response(self) -> Self {
        self.responses.lock().unwrap().push(None);
        self
    }

    /// Every call errors
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Get all prompts that were sent
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last prompt sent
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseTextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        // Record the call
        self.calls.lock().unwrap().push(prompt.to_string());

        if self.failing {
            anyhow::bail!("text generation backend returned 503");
        }

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            Ok(responses.remove(0))
        } else {
            // Return default mock response
            Ok(Some("Mock generated answer".to_string()))
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mocks plus the ServerDeps built from them
///
/// Keep this value around in a test to inspect what the mocks saw.
pub struct TestDependencies {
    pub directory: Arc<MockDirectory>,
    pub transport: Arc<MockNotificationTransport>,
    pub text_generator: Arc<MockTextGenerator>,
    pub notify_idempotency_keys: bool,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            directory: Arc::new(MockDirectory::new()),
            transport: Arc::new(MockNotificationTransport::new()),
            text_generator: Arc::new(MockTextGenerator::new()),
            notify_idempotency_keys: true,
        }
    }

    pub fn with_directory(mut self, directory: MockDirectory) -> Self {
        self.directory = Arc::new(directory);
        self
    }

    pub fn with_transport(mut self, transport: MockNotificationTransport) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    pub fn with_text_generator(mut self, text_generator: MockTextGenerator) -> Self {
        self.text_generator = Arc::new(text_generator);
        self
    }

    pub fn without_idempotency_keys(mut self) -> Self {
        self.notify_idempotency_keys = false;
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.directory.clone(),
            self.transport.clone(),
            self.text_generator.clone(),
            TEST_MAIL_FROM.to_string(),
            self.notify_idempotency_keys,
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
