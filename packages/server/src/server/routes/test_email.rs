use axum::{extract::Extension, Json};
use serde::Serialize;
use tracing::info;

use crate::kernel::OutboundMessage;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

pub const TEST_EMAIL_SUBJECT: &str = "Zero-Sum test message";
pub const TEST_EMAIL_BODY: &str = "If you see this, your mail setup is working!";

#[derive(Debug, Serialize)]
pub struct TestEmailResponse {
    pub message: String,
}

/// Send a fixed message to the configured sender address
pub async fn test_email_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<TestEmailResponse>, ApiError> {
    let message = OutboundMessage {
        to: state.deps.mail_from.clone(),
        subject: TEST_EMAIL_SUBJECT.to_string(),
        body: TEST_EMAIL_BODY.to_string(),
        idempotency_key: None,
    };

    state
        .deps
        .transport
        .send(&message)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!(recipient = %message.to, "Test email sent");
    Ok(Json(TestEmailResponse {
        message: "Test email sent successfully!".to_string(),
    }))
}
