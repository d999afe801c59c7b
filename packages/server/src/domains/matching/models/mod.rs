pub mod dispatch_report;
pub mod resource_match;

pub use dispatch_report::{DeliveryOutcome, DeliveryRecord, DispatchReport, NotificationKind};
pub use resource_match::ResourceMatch;
