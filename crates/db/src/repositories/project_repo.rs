//! Repository for the `projects` table.

use pmo_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_id, owner_id, name, code, start_date, end_date, currency, \
     sprint_length_days, budget, is_private, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `company_id` and created by `owner_id`.
    ///
    /// `code` and `currency` are expected to be normalised already.
    pub async fn create(
        pool: &PgPool,
        company_id: DbId,
        owner_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (company_id, owner_id, name, code, start_date, end_date, currency,
                 sprint_length_days, budget, is_private)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(company_id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.currency)
            .bind(input.sprint_length_days)
            .bind(input.budget)
            .bind(input.is_private)
            .fetch_one(pool)
            .await
    }

    /// Find a project by id, regardless of company.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Owning company of a project, or `None` if the project does not exist.
    pub async fn company_id(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT company_id FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a company's projects in creation order.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE company_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                currency = COALESCE($6, currency),
                sprint_length_days = COALESCE($7, sprint_length_days),
                budget = COALESCE($8, budget),
                is_private = COALESCE($9, is_private)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.currency)
            .bind(input.sprint_length_days)
            .bind(input.budget)
            .bind(input.is_private)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and, through cascades, everything it owns.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
