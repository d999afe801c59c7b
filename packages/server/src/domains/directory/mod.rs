pub mod models;
pub mod snapshot;

// Re-export commonly used types
pub use models::Organization;
pub use snapshot::{fetch_all, fetch_snapshot, DirectoryError};
