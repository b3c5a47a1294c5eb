//! Resource (person) model and DTOs.

use pmo_core::tenancy::{Owner, TenantOwned};
use pmo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: DbId,
    pub company_id: DbId,
    pub name: String,
    pub role: String,
    pub day_rate: f64,
    pub skill_tags: Vec<String>,
    pub contact: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a resource.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResource {
    pub name: String,
    pub role: String,
    pub day_rate: f64,
    #[serde(default)]
    pub skill_tags: Vec<String>,
    pub contact: String,
}

/// DTO for updating a resource. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResource {
    pub name: Option<String>,
    pub role: Option<String>,
    pub day_rate: Option<f64>,
    pub skill_tags: Option<Vec<String>>,
    pub contact: Option<String>,
}

impl TenantOwned for Resource {
    const ENTITY: &'static str = "Resource";

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Owner {
        Owner::Company(self.company_id)
    }
}
