use thiserror::Error;

use crate::domains::directory::DirectoryError;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Message is required")]
    EmptyQuestion,

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
