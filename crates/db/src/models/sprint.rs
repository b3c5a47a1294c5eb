//! Sprint model and DTOs.

use pmo_core::tenancy::{Owner, TenantOwned};
use pmo_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `sprints` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a sprint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSprint {
    pub project_id: DbId,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
}

/// DTO for updating a sprint. The parent project is fixed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSprint {
    pub name: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl TenantOwned for Sprint {
    const ENTITY: &'static str = "Sprint";

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Owner {
        Owner::Project(self.project_id)
    }
}
