use tracing::{error, info, instrument};

use crate::domains::directory::Organization;
use crate::domains::matching::models::{
    DeliveryOutcome, DeliveryRecord, DispatchReport, ResourceMatch,
};
use crate::domains::matching::utils::{plan_notifications, PlannedNotification};
use crate::kernel::BaseNotificationTransport;

/// Send one message per match to the counterpart, then one aggregate to the trigger.
///
/// Every send is attempted exactly once. A failed send is logged and recorded in the
/// report; it never stops later sends and never fails the invocation.
#[instrument(skip_all, fields(trigger = %trigger.email, matches = matches.len()))]
pub async fn dispatch_notifications(
    trigger: &Organization,
    matches: &[ResourceMatch],
    transport: &dyn BaseNotificationTransport,
    with_idempotency_keys: bool,
) -> DispatchReport {
    let mut report = DispatchReport::new(trigger.email.clone(), matches.len());

    for planned in plan_notifications(trigger, matches, with_idempotency_keys) {
        let record = send_planned(&trigger.email, planned, transport).await;
        report.record(record);
    }

    info!(
        sent = report.sent_count(),
        failed = report.failed_count(),
        "Notification dispatch complete"
    );
    report
}

async fn send_planned(
    trigger_email: &str,
    planned: PlannedNotification,
    transport: &dyn BaseNotificationTransport,
) -> DeliveryRecord {
    let PlannedNotification { kind, message } = planned;

    let outcome = match transport.send(&message).await {
        Ok(()) => {
            info!(recipient = %message.to, kind = ?kind, "Notification sent");
            DeliveryOutcome::Sent
        }
        Err(e) => {
            error!(
                trigger = %trigger_email,
                recipient = %message.to,
                kind = ?kind,
                error = %e,
                "Failed to send notification"
            );
            DeliveryOutcome::Failed {
                error: e.to_string(),
            }
        }
    };

    DeliveryRecord {
        recipient: message.to,
        kind,
        idempotency_key: message.idempotency_key,
        outcome,
    }
}
