use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{deserialize_tags, ContactInfo};

/// Organization model - a directory participant
///
/// Identity is the email address: the trigger is excluded from its own snapshot by
/// email, and that is also the unique key in the `organizations` table.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub email: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default, alias = "phone")]
    pub phone_number: Option<String>,

    // Resource tags (exact, case-sensitive)
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub resources_have: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub resources_needed: Vec<String>,
}

impl Organization {
    /// Name used in messages and answers; falls back to the email address.
    pub fn display_name(&self) -> &str {
        self.business_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }

    pub fn contact(&self) -> ContactInfo {
        ContactInfo {
            email: self.email.clone(),
            phone: self.phone_number.clone(),
        }
    }

    /// Identity comparison used for snapshot exclusion.
    pub fn is_same_entity(&self, email: &str) -> bool {
        self.email == email
    }

    /// Read the whole directory in insertion order
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT id, email, business_name, phone_number, resources_have, resources_needed
             FROM organizations
             ORDER BY created_at ASC, email ASC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert or replace an organization keyed by email
    pub async fn upsert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO organizations (
                email,
                business_name,
                phone_number,
                resources_have,
                resources_needed
             )
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (email) DO UPDATE SET
                business_name = EXCLUDED.business_name,
                phone_number = EXCLUDED.phone_number,
                resources_have = EXCLUDED.resources_have,
                resources_needed = EXCLUDED.resources_needed
             RETURNING id, email, business_name, phone_number, resources_have, resources_needed",
        )
        .bind(&self.email)
        .bind(&self.business_name)
        .bind(&self.phone_number)
        .bind(&self.resources_have)
        .bind(&self.resources_needed)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
