pub mod idempotency;
pub mod messages;
pub mod overlap;

pub use idempotency::{aggregate_idempotency_key, pair_idempotency_key};
pub use messages::{plan_notifications, PlannedNotification, AGGREGATE_SUBJECT, COUNTERPART_SUBJECT};
pub use overlap::{compute_matches, intersect, match_candidate};
