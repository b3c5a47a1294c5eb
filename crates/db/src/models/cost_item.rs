//! Non-personnel cost item model and DTOs.

use pmo_core::tenancy::{Owner, TenantOwned};
use pmo_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cost_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    pub id: DbId,
    pub project_id: DbId,
    #[serde(rename = "type")]
    pub cost_type: String,
    pub description: String,
    pub amount: f64,
    pub date_incurred: Date,
    pub vendor: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a cost item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCostItem {
    pub project_id: DbId,
    #[serde(rename = "type")]
    pub cost_type: String,
    pub description: String,
    pub amount: f64,
    pub date_incurred: Date,
    pub vendor: Option<String>,
}

/// DTO for updating a cost item. The parent project is fixed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCostItem {
    #[serde(rename = "type")]
    pub cost_type: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date_incurred: Option<Date>,
    pub vendor: Option<String>,
}

impl TenantOwned for CostItem {
    const ENTITY: &'static str = "CostItem";

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Owner {
        Owner::Project(self.project_id)
    }
}
