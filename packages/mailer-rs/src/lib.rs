// Thin client for an HTTP mail relay: one JSON POST per message, bearer auth.

pub mod models;

use reqwest::{header, Client};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{MailRequest, MailResponse};

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Error sending mail: {0}")]
    Network(String),

    #[error("Mail relay returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Error parsing mail relay response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct MailerOptions {
    /// Full URL of the relay's send endpoint.
    pub api_url: String,
    pub api_key: String,
    /// Sender address used for every message.
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct MailerService {
    options: MailerOptions,
    client: Client,
}

impl MailerService {
    pub fn new(options: MailerOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.options.from
    }

    /// Send a plain-text message.
    ///
    /// `idempotency_key` is forwarded as the `Idempotency-Key` header when present.
    pub async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        text: &str,
        idempotency_key: Option<&str>,
    ) -> Result<MailResponse, MailerError> {
        let body = MailRequest {
            from: &self.options.from,
            to,
            subject,
            text,
        };

        let mut request = self
            .client
            .post(&self.options.api_url)
            .bearer_auth(&self.options.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body);

        if let Some(key) = idempotency_key {
            request = request.header("Idempotency-Key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| MailerError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, to = %to, "Mail relay rejected message");
            return Err(MailerError::Rejected {
                status: status.as_u16(),
                body: error_body,
            });
        }

        // Some relays answer 202 with an empty body.
        let raw = response
            .text()
            .await
            .map_err(|e| MailerError::Parse(e.to_string()))?;
        let parsed = if raw.trim().is_empty() {
            MailResponse::default()
        } else {
            serde_json::from_str(&raw).map_err(|e| MailerError::Parse(e.to_string()))?
        };

        debug!(to = %to, message_id = ?parsed.id, "Mail accepted by relay");
        Ok(parsed)
    }
}
