use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::domains::directory::Organization;
use crate::domains::matching::{run_match_pipeline, DispatchReport, MatchingEvent};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

pub const MATCHES_SENT_MESSAGE: &str = "Match emails sent successfully.";
pub const NO_MATCHES_MESSAGE: &str = "No matching resources found";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResourcesRequest {
    #[serde(default)]
    pub new_user: Option<Organization>,
}

#[derive(Debug, Serialize)]
pub struct MatchResourcesResponse {
    pub message: String,
    pub report: DispatchReport,
}

/// Run the match pipeline for a newly registered organization
///
/// Waits for every notification to be attempted before responding. Send failures are
/// listed in the report; the request still succeeds.
pub async fn match_resources_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<MatchResourcesRequest>, JsonRejection>,
) -> Result<Json<MatchResourcesResponse>, ApiError> {
    let Json(request) = payload?;
    let trigger = request
        .new_user
        .ok_or_else(|| ApiError::InvalidInput("newUser data not provided".to_string()))?;

    let event = run_match_pipeline(&trigger, &state.deps).await?;

    let message = match &event {
        MatchingEvent::NoMatchesFound { .. } => NO_MATCHES_MESSAGE,
        MatchingEvent::MatchesDispatched { .. } => MATCHES_SENT_MESSAGE,
    };

    Ok(Json(MatchResourcesResponse {
        message: message.to_string(),
        report: event.report(),
    }))
}
