//! Absence model: a resource's holiday, sickness or other leave.

use pmo_core::tenancy::{Owner, TenantOwned};
use pmo_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `absences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Absence {
    pub id: DbId,
    pub resource_id: DbId,
    pub from_date: Date,
    pub to_date: Date,
    #[serde(rename = "type")]
    pub absence_type: String,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an absence.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAbsence {
    pub resource_id: DbId,
    pub from_date: Date,
    pub to_date: Date,
    #[serde(rename = "type")]
    pub absence_type: String,
    pub note: Option<String>,
}

/// DTO for updating an absence. The resource is fixed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAbsence {
    pub from_date: Option<Date>,
    pub to_date: Option<Date>,
    #[serde(rename = "type")]
    pub absence_type: Option<String>,
    pub note: Option<String>,
}

impl TenantOwned for Absence {
    const ENTITY: &'static str = "Absence";

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Owner {
        Owner::Resource(self.resource_id)
    }
}
