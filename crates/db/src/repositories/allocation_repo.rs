//! Repository for the `allocations` table.

use pmo_core::types::DbId;
use sqlx::PgPool;

use crate::models::allocation::{Allocation, CreateAllocation, UpdateAllocation};

const COLUMNS: &str = "id, project_id, resource_id, from_date, to_date, allocation_pct, \
     planned_days, actual_days, created_at, updated_at";

/// Provides CRUD operations for allocations.
pub struct AllocationRepo;

impl AllocationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateAllocation,
    ) -> Result<Allocation, sqlx::Error> {
        let query = format!(
            "INSERT INTO allocations
                (project_id, resource_id, from_date, to_date, allocation_pct, planned_days, actual_days)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Allocation>(&query)
            .bind(input.project_id)
            .bind(input.resource_id)
            .bind(input.from_date)
            .bind(input.to_date)
            .bind(input.allocation_pct)
            .bind(input.planned_days)
            .bind(input.actual_days)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Allocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM allocations WHERE id = $1");
        sqlx::query_as::<_, Allocation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a company's allocations ordered by start date, optionally
    /// narrowed to one project and/or one resource.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
        project_id: Option<DbId>,
        resource_id: Option<DbId>,
    ) -> Result<Vec<Allocation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM allocations
             WHERE project_id IN (SELECT id FROM projects WHERE company_id = $1)
               AND ($2::UUID IS NULL OR project_id = $2)
               AND ($3::UUID IS NULL OR resource_id = $3)
             ORDER BY from_date ASC, id ASC"
        );
        sqlx::query_as::<_, Allocation>(&query)
            .bind(company_id)
            .bind(project_id)
            .bind(resource_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAllocation,
    ) -> Result<Option<Allocation>, sqlx::Error> {
        let query = format!(
            "UPDATE allocations SET
                from_date = COALESCE($2, from_date),
                to_date = COALESCE($3, to_date),
                allocation_pct = COALESCE($4, allocation_pct),
                planned_days = COALESCE($5, planned_days),
                actual_days = COALESCE($6, actual_days)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Allocation>(&query)
            .bind(id)
            .bind(input.from_date)
            .bind(input.to_date)
            .bind(input.allocation_pct)
            .bind(input.planned_days)
            .bind(input.actual_days)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM allocations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
