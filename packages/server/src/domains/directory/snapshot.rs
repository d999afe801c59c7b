//! Directory snapshot reader.
//!
//! One read of the whole store per invocation. Nothing is reconciled afterwards: an
//! organization registered while a pipeline is running is not part of its snapshot.

use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::domains::directory::Organization;
use crate::kernel::BaseDirectory;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory store could not be read. Fatal for the invocation.
    #[error("Directory store unavailable: {0:#}")]
    UpstreamUnavailable(anyhow::Error),
}

/// Read every organization in the directory.
#[instrument(skip(directory))]
pub async fn fetch_all(directory: &dyn BaseDirectory) -> Result<Vec<Organization>, DirectoryError> {
    directory.fetch_all().await.map_err(|e| {
        error!(error = %e, "Failed to read directory");
        DirectoryError::UpstreamUnavailable(e)
    })
}

/// Read the directory without the organization identified by `exclude_email`.
///
/// Snapshot order is the store's order.
#[instrument(skip(directory), fields(exclude = %exclude_email))]
pub async fn fetch_snapshot(
    directory: &dyn BaseDirectory,
    exclude_email: &str,
) -> Result<Vec<Organization>, DirectoryError> {
    let snapshot: Vec<Organization> = fetch_all(directory)
        .await?
        .into_iter()
        .filter(|org| !org.is_same_entity(exclude_email))
        .collect();

    debug!(size = snapshot.len(), "Directory snapshot read");
    Ok(snapshot)
}
