//! Project entity model and DTOs.

use pmo_core::tenancy::{Owner, TenantOwned};
use pmo_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub company_id: DbId,
    /// The user who created the project, if still present.
    pub owner_id: Option<DbId>,
    pub name: String,
    pub code: String,
    pub start_date: Date,
    pub end_date: Date,
    pub currency: String,
    pub sprint_length_days: i32,
    pub budget: f64,
    #[serde(rename = "private")]
    pub is_private: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. The owning company comes from the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub code: String,
    pub start_date: Date,
    pub end_date: Date,
    pub currency: String,
    pub sprint_length_days: i32,
    pub budget: f64,
    #[serde(default, rename = "private")]
    pub is_private: bool,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub code: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub currency: Option<String>,
    pub sprint_length_days: Option<i32>,
    pub budget: Option<f64>,
    #[serde(rename = "private")]
    pub is_private: Option<bool>,
}

impl TenantOwned for Project {
    const ENTITY: &'static str = "Project";

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Owner {
        Owner::Company(self.company_id)
    }
}
