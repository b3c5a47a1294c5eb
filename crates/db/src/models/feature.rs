//! Feature (backlog item) model and DTOs.

use pmo_core::tenancy::{Owner, TenantOwned};
use pmo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `features` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub story_points: i32,
    pub completed_points: i32,
    pub status: String,
    pub sprint_ids: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a feature.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeature {
    pub project_id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub story_points: i32,
    #[serde(default)]
    pub completed_points: i32,
    /// Defaults to `backlog` if omitted.
    pub status: Option<String>,
    #[serde(default)]
    pub sprint_ids: Vec<DbId>,
}

/// DTO for updating a feature. The parent project is fixed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeature {
    pub title: Option<String>,
    pub description: Option<String>,
    pub story_points: Option<i32>,
    pub completed_points: Option<i32>,
    pub status: Option<String>,
    pub sprint_ids: Option<Vec<DbId>>,
}

impl TenantOwned for Feature {
    const ENTITY: &'static str = "Feature";

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Owner {
        Owner::Project(self.project_id)
    }
}
