//! Repository for the `cost_items` table.

use pmo_core::types::DbId;
use sqlx::PgPool;

use crate::models::cost_item::{CostItem, CreateCostItem, UpdateCostItem};

const COLUMNS: &str = "id, project_id, cost_type, description, amount, date_incurred, vendor, \
     created_at, updated_at";

/// Provides CRUD operations for cost items.
pub struct CostItemRepo;

impl CostItemRepo {
    pub async fn create(pool: &PgPool, input: &CreateCostItem) -> Result<CostItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO cost_items (project_id, cost_type, description, amount, date_incurred, vendor)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CostItem>(&query)
            .bind(input.project_id)
            .bind(&input.cost_type)
            .bind(&input.description)
            .bind(input.amount)
            .bind(input.date_incurred)
            .bind(&input.vendor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CostItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cost_items WHERE id = $1");
        sqlx::query_as::<_, CostItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a company's cost items in creation order, optionally for one project.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
        project_id: Option<DbId>,
    ) -> Result<Vec<CostItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cost_items
             WHERE project_id IN (SELECT id FROM projects WHERE company_id = $1)
               AND ($2::UUID IS NULL OR project_id = $2)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, CostItem>(&query)
            .bind(company_id)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Amounts of every cost item on a project.
    pub async fn amounts_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<f64>, sqlx::Error> {
        sqlx::query_scalar("SELECT amount FROM cost_items WHERE project_id = $1")
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCostItem,
    ) -> Result<Option<CostItem>, sqlx::Error> {
        let query = format!(
            "UPDATE cost_items SET
                cost_type = COALESCE($2, cost_type),
                description = COALESCE($3, description),
                amount = COALESCE($4, amount),
                date_incurred = COALESCE($5, date_incurred),
                vendor = COALESCE($6, vendor)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CostItem>(&query)
            .bind(id)
            .bind(&input.cost_type)
            .bind(&input.description)
            .bind(input.amount)
            .bind(input.date_incurred)
            .bind(&input.vendor)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cost_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
