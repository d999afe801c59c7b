use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domains::query::answer_question;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ChatbotRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatbotResponse {
    pub response: String,
}

/// Answer a free-text question about the directory
pub async fn chatbot_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<ChatbotRequest>, JsonRejection>,
) -> Result<Json<ChatbotResponse>, ApiError> {
    // A missing body and a missing message get the same answer
    let message = payload
        .ok()
        .and_then(|Json(request)| request.message)
        .unwrap_or_default();

    let answer = answer_question(&message, &state.deps).await?;

    Ok(Json(ChatbotResponse {
        response: answer.response,
    }))
}
