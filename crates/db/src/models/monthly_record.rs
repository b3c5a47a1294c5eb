//! Monthly forecast/actual record, unique per (project, resource, period).

use pmo_core::financials::LabourRecord;
use pmo_core::tenancy::{Owner, TenantOwned};
use pmo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `monthly_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    pub id: DbId,
    pub project_id: DbId,
    pub resource_id: DbId,
    /// Zero-padded `YYYY-MM`.
    pub period: String,
    pub forecast_days: f64,
    pub actual_cost: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Result of an upsert: the stored row plus whether it was newly inserted.
#[derive(Debug, Clone, FromRow)]
pub struct UpsertedMonthlyRecord {
    #[sqlx(flatten)]
    pub record: MonthlyRecord,
    pub inserted: bool,
}

/// DTO for creating (or overwriting) a monthly record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMonthlyRecord {
    pub project_id: DbId,
    pub resource_id: DbId,
    pub period: String,
    pub forecast_days: f64,
    #[serde(default)]
    pub actual_cost: f64,
}

/// DTO for updating a monthly record. Only the figures are editable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMonthlyRecord {
    pub forecast_days: Option<f64>,
    pub actual_cost: Option<f64>,
}

impl TenantOwned for MonthlyRecord {
    const ENTITY: &'static str = "MonthlyRecord";

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Owner {
        Owner::Project(self.project_id)
    }
}

impl MonthlyRecord {
    /// The figures of this record that feed the financial rollups.
    pub fn labour(&self) -> LabourRecord {
        LabourRecord {
            resource_id: self.resource_id,
            period: self.period.clone(),
            forecast_days: self.forecast_days,
            actual_cost: self.actual_cost,
        }
    }
}
