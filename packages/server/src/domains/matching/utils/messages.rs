//! Notification composition and planning.
//!
//! Turns matches into the exact messages that will be sent. Pure: the dispatcher only
//! executes the plan built here.

use crate::domains::directory::Organization;
use crate::domains::matching::models::{NotificationKind, ResourceMatch};
use crate::domains::matching::utils::{aggregate_idempotency_key, pair_idempotency_key};
use crate::kernel::OutboundMessage;

pub const COUNTERPART_SUBJECT: &str = "New Resource Match Found!";
pub const AGGREGATE_SUBJECT: &str = "Companies Matching Your Resources";

/// A message ready to hand to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedNotification {
    pub kind: NotificationKind,
    pub message: OutboundMessage,
}

/// Body of the message sent to the counterpart of one match
pub fn counterpart_body(trigger: &Organization, found: &ResourceMatch) -> String {
    let mut body = format!(
        "Hello {},\n\nA company (\"{}\") on Zero-Sum matches your resource needs/offers!\n\n",
        found.counterpart.display_name(),
        trigger.display_name()
    );

    if !found.match_needed.is_empty() {
        body.push_str(&format!(
            "They NEED the following resource(s) which you HAVE: {}\n",
            found.match_needed.join(", ")
        ));
    }
    if !found.match_offered.is_empty() {
        body.push_str(&format!(
            "They OFFER the following resource(s) which you NEED: {}\n",
            found.match_offered.join(", ")
        ));
    }

    body.push_str(&format!(
        "\nFeel free to contact them at: {}\n",
        trigger.contact()
    ));
    body
}

/// Body of the summary message sent to the trigger
pub fn aggregate_body(trigger: &Organization, matches: &[ResourceMatch]) -> String {
    let mut lines = String::new();
    for found in matches {
        let name = found.counterpart.display_name();
        if !found.match_needed.is_empty() {
            lines.push_str(&format!(
                "- {} can provide you: {}\n",
                name,
                found.match_needed.join(", ")
            ));
        }
        if !found.match_offered.is_empty() {
            lines.push_str(&format!(
                "- {} needs what you offer: {}\n",
                name,
                found.match_offered.join(", ")
            ));
        }
    }

    format!(
        "Hello {},\n\nWe've found some companies that match your resources:\n\n{}\nFeel free to reach out to them directly on Zero-Sum.\n",
        trigger.display_name(),
        lines
    )
}

/// Build every message for one trigger: one per match, then one aggregate.
///
/// No matches means no messages.
pub fn plan_notifications(
    trigger: &Organization,
    matches: &[ResourceMatch],
    with_idempotency_keys: bool,
) -> Vec<PlannedNotification> {
    if matches.is_empty() {
        return Vec::new();
    }

    let mut plan: Vec<PlannedNotification> = matches
        .iter()
        .map(|found| PlannedNotification {
            kind: NotificationKind::Counterpart,
            message: OutboundMessage {
                to: found.counterpart.email.clone(),
                subject: COUNTERPART_SUBJECT.to_string(),
                body: counterpart_body(trigger, found),
                idempotency_key: with_idempotency_keys
                    .then(|| pair_idempotency_key(&trigger.email, found)),
            },
        })
        .collect();

    plan.push(PlannedNotification {
        kind: NotificationKind::Aggregate,
        message: OutboundMessage {
            to: trigger.email.clone(),
            subject: AGGREGATE_SUBJECT.to_string(),
            body: aggregate_body(trigger, matches),
            idempotency_key: with_idempotency_keys
                .then(|| aggregate_idempotency_key(&trigger.email, matches)),
        },
    });

    plan
}
