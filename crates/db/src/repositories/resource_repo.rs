//! Repository for the `resources` table.

use std::collections::HashMap;

use pmo_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::{CreateResource, Resource, UpdateResource};

const COLUMNS: &str =
    "id, company_id, name, role, day_rate, skill_tags, contact, created_at, updated_at";

/// Provides CRUD operations for resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a new resource owned by `company_id`.
    pub async fn create(
        pool: &PgPool,
        company_id: DbId,
        input: &CreateResource,
    ) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (company_id, name, role, day_rate, skill_tags, contact)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(company_id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(input.day_rate)
            .bind(&input.skill_tags)
            .bind(&input.contact)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Owning company of a resource, or `None` if the resource does not exist.
    pub async fn company_id(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT company_id FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a company's resources in creation order.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resources WHERE company_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Day rates of every resource in a company, keyed by id.
    pub async fn day_rates(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<HashMap<DbId, f64>, sqlx::Error> {
        let rows: Vec<(DbId, f64)> =
            sqlx::query_as("SELECT id, day_rate FROM resources WHERE company_id = $1")
                .bind(company_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().collect())
    }

    /// Update a resource. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                day_rate = COALESCE($4, day_rate),
                skill_tags = COALESCE($5, skill_tags),
                contact = COALESCE($6, contact)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(input.day_rate)
            .bind(&input.skill_tags)
            .bind(&input.contact)
            .fetch_optional(pool)
            .await
    }

    /// Delete a resource with its allocations, monthly records and absences.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
