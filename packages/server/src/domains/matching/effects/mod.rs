pub mod dispatch;

pub use dispatch::dispatch_notifications;

use tracing::{debug, info, instrument};

use crate::domains::directory::{fetch_snapshot, Organization};
use crate::domains::matching::{
    errors::MatchingError, events::MatchingEvent, utils::compute_matches,
};
use crate::kernel::ServerDeps;

/// Match pipeline - runs end to end for one trigger
///
/// Pipeline:
/// 1. Validate trigger
/// 2. Snapshot the directory without the trigger (fatal on failure)
/// 3. Compute matches (pure)
/// 4. Dispatch notifications (all I/O; per-send failures only recorded)
///
/// Nothing is cached or deduplicated: submitting the same trigger twice runs the
/// whole pipeline twice and sends a second full batch.
#[instrument(skip_all, fields(trigger = %trigger.email))]
pub async fn run_match_pipeline(
    trigger: &Organization,
    deps: &ServerDeps,
) -> Result<MatchingEvent, MatchingError> {
    validate_trigger(trigger)?;

    let snapshot = fetch_snapshot(deps.directory.as_ref(), &trigger.email).await?;
    let matches = compute_matches(trigger, &snapshot);

    if matches.is_empty() {
        info!(candidates = snapshot.len(), "No matching resources found");
        return Ok(MatchingEvent::NoMatchesFound {
            trigger_email: trigger.email.clone(),
            candidate_count: snapshot.len(),
        });
    }

    for found in &matches {
        debug!(
            counterpart = %found.counterpart.email,
            needed = ?found.match_needed,
            offered = ?found.match_offered,
            "Resource match"
        );
    }
    info!(
        candidates = snapshot.len(),
        matches = matches.len(),
        "Matches found"
    );

    let report = dispatch_notifications(
        trigger,
        &matches,
        deps.transport.as_ref(),
        deps.notify_idempotency_keys,
    )
    .await;

    Ok(MatchingEvent::MatchesDispatched { matches, report })
}

fn validate_trigger(trigger: &Organization) -> Result<(), MatchingError> {
    if trigger.email.trim().is_empty() {
        return Err(MatchingError::InvalidTrigger(
            "newUser.email is required".to_string(),
        ));
    }
    Ok(())
}
