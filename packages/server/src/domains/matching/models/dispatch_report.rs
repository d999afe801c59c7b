use serde::Serialize;

/// Which side of a match a message was addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Per-match message to the counterpart
    Counterpart,
    /// Summary message to the trigger
    Aggregate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    Sent,
    Failed { error: String },
}

/// Outcome of one send attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecord {
    pub recipient: String,
    pub kind: NotificationKind,
    pub idempotency_key: Option<String>,
    pub outcome: DeliveryOutcome,
}

/// Per-invocation record of which notifications succeeded or failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReport {
    pub trigger_email: String,
    pub match_count: usize,
    pub deliveries: Vec<DeliveryRecord>,
}

impl DispatchReport {
    pub fn new(trigger_email: impl Into<String>, match_count: usize) -> Self {
        Self {
            trigger_email: trigger_email.into(),
            match_count,
            deliveries: Vec::new(),
        }
    }

    pub fn record(&mut self, record: DeliveryRecord) {
        self.deliveries.push(record);
    }

    pub fn sent_count(&self) -> usize {
        self.deliveries
            .iter()
            .filter(|d| d.outcome == DeliveryOutcome::Sent)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.deliveries.len() - self.sent_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DeliveryRecord> {
        self.deliveries
            .iter()
            .filter(|d| matches!(d.outcome, DeliveryOutcome::Failed { .. }))
    }

    pub fn has_matches(&self) -> bool {
        self.match_count > 0
    }
}
