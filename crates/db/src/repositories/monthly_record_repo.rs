//! Repository for the `monthly_records` table.

use pmo_core::types::DbId;
use sqlx::PgPool;

use crate::models::monthly_record::{
    CreateMonthlyRecord, MonthlyRecord, UpdateMonthlyRecord, UpsertedMonthlyRecord,
};

const COLUMNS: &str =
    "id, project_id, resource_id, period, forecast_days, actual_cost, created_at, updated_at";

/// Provides CRUD and upsert operations for monthly records.
pub struct MonthlyRecordRepo;

impl MonthlyRecordRepo {
    /// Insert a record, or overwrite the figures of the existing record for
    /// the same (project, resource, period).
    ///
    /// Runs as a single statement against `uq_monthly_records_triple`, so
    /// concurrent writers cannot create duplicates. `inserted` is derived
    /// from `xmax`, which is zero only for a freshly inserted tuple.
    pub async fn upsert(
        pool: &PgPool,
        input: &CreateMonthlyRecord,
    ) -> Result<UpsertedMonthlyRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO monthly_records (project_id, resource_id, period, forecast_days, actual_cost)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT ON CONSTRAINT uq_monthly_records_triple
             DO UPDATE SET forecast_days = EXCLUDED.forecast_days,
                           actual_cost = EXCLUDED.actual_cost
             RETURNING {COLUMNS}, (xmax = 0) AS inserted"
        );
        sqlx::query_as::<_, UpsertedMonthlyRecord>(&query)
            .bind(input.project_id)
            .bind(input.resource_id)
            .bind(&input.period)
            .bind(input.forecast_days)
            .bind(input.actual_cost)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MonthlyRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monthly_records WHERE id = $1");
        sqlx::query_as::<_, MonthlyRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a company's records with optional project, resource and period
    /// filters, in insertion order.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
        project_id: Option<DbId>,
        resource_id: Option<DbId>,
        period: Option<&str>,
    ) -> Result<Vec<MonthlyRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM monthly_records
             WHERE project_id IN (SELECT id FROM projects WHERE company_id = $1)
               AND ($2::UUID IS NULL OR project_id = $2)
               AND ($3::UUID IS NULL OR resource_id = $3)
               AND ($4::TEXT IS NULL OR period = $4)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, MonthlyRecord>(&query)
            .bind(company_id)
            .bind(project_id)
            .bind(resource_id)
            .bind(period)
            .fetch_all(pool)
            .await
    }

    /// All records of one project, used by the financial rollups.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<MonthlyRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM monthly_records WHERE project_id = $1
             ORDER BY period ASC, created_at ASC"
        );
        sqlx::query_as::<_, MonthlyRecord>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update the figures of a record. Keys are not editable.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMonthlyRecord,
    ) -> Result<Option<MonthlyRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE monthly_records SET
                forecast_days = COALESCE($2, forecast_days),
                actual_cost = COALESCE($3, actual_cost)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MonthlyRecord>(&query)
            .bind(id)
            .bind(input.forecast_days)
            .bind(input.actual_cost)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM monthly_records WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
