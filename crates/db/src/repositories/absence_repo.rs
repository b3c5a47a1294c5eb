//! Repository for the `absences` table.

use pmo_core::types::DbId;
use sqlx::PgPool;

use crate::models::absence::{Absence, CreateAbsence, UpdateAbsence};

const COLUMNS: &str =
    "id, resource_id, from_date, to_date, absence_type, note, created_at, updated_at";

/// Provides CRUD operations for absences.
pub struct AbsenceRepo;

impl AbsenceRepo {
    pub async fn create(pool: &PgPool, input: &CreateAbsence) -> Result<Absence, sqlx::Error> {
        let query = format!(
            "INSERT INTO absences (resource_id, from_date, to_date, absence_type, note)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Absence>(&query)
            .bind(input.resource_id)
            .bind(input.from_date)
            .bind(input.to_date)
            .bind(&input.absence_type)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Absence>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM absences WHERE id = $1");
        sqlx::query_as::<_, Absence>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a company's absences ordered by start date, optionally for one resource.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
        resource_id: Option<DbId>,
    ) -> Result<Vec<Absence>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM absences
             WHERE resource_id IN (SELECT id FROM resources WHERE company_id = $1)
               AND ($2::UUID IS NULL OR resource_id = $2)
             ORDER BY from_date ASC, id ASC"
        );
        sqlx::query_as::<_, Absence>(&query)
            .bind(company_id)
            .bind(resource_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAbsence,
    ) -> Result<Option<Absence>, sqlx::Error> {
        let query = format!(
            "UPDATE absences SET
                from_date = COALESCE($2, from_date),
                to_date = COALESCE($3, to_date),
                absence_type = COALESCE($4, absence_type),
                note = COALESCE($5, note)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Absence>(&query)
            .bind(id)
            .bind(input.from_date)
            .bind(input.to_date)
            .bind(&input.absence_type)
            .bind(&input.note)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM absences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
