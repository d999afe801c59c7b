//! Test fixtures for creating directory rows.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use server_core::domains::directory::Organization;
use server_core::kernel::test_dependencies::organization;
use sqlx::PgPool;

/// Insert an organization with the given tags
pub async fn create_test_organization(
    pool: &PgPool,
    email: &str,
    have: &[&str],
    needed: &[&str],
) -> Result<Organization> {
    organization(email, have, needed).upsert(pool).await
}
