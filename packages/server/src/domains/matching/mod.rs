pub mod effects;
pub mod errors;
pub mod events;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use effects::{dispatch_notifications, run_match_pipeline};
pub use errors::MatchingError;
pub use events::MatchingEvent;
pub use models::{DispatchReport, ResourceMatch};
pub use utils::compute_matches;
