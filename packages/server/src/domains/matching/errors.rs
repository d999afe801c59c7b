use thiserror::Error;

use crate::domains::directory::DirectoryError;

#[derive(Debug, Error)]
pub enum MatchingError {
    /// Trigger payload unusable (e.g. no email to identify it by)
    #[error("Invalid trigger: {0}")]
    InvalidTrigger(String),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
