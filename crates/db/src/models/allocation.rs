//! Allocation model: a resource booked onto a project for a date range.

use pmo_core::tenancy::{Owner, TenantOwned};
use pmo_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `allocations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: DbId,
    pub project_id: DbId,
    pub resource_id: DbId,
    pub from_date: Date,
    pub to_date: Date,
    pub allocation_pct: f64,
    pub planned_days: f64,
    pub actual_days: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an allocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAllocation {
    pub project_id: DbId,
    pub resource_id: DbId,
    pub from_date: Date,
    pub to_date: Date,
    pub allocation_pct: f64,
    pub planned_days: f64,
    #[serde(default)]
    pub actual_days: f64,
}

/// DTO for updating an allocation. Project and resource are fixed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAllocation {
    pub from_date: Option<Date>,
    pub to_date: Option<Date>,
    pub allocation_pct: Option<f64>,
    pub planned_days: Option<f64>,
    pub actual_days: Option<f64>,
}

impl TenantOwned for Allocation {
    const ENTITY: &'static str = "Allocation";

    fn id(&self) -> DbId {
        self.id
    }

    /// Authorized through the resource leg; create checks both legs.
    fn owner(&self) -> Owner {
        Owner::Resource(self.resource_id)
    }
}
