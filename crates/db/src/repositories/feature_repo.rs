//! Repository for the `features` table.

use pmo_core::types::DbId;
use sqlx::PgPool;

use crate::models::feature::{CreateFeature, Feature, UpdateFeature};

const COLUMNS: &str = "id, project_id, title, description, story_points, completed_points, \
     status, sprint_ids, created_at, updated_at";

/// Provides CRUD operations for features.
pub struct FeatureRepo;

impl FeatureRepo {
    /// Insert a new feature. A `None` status defaults to `backlog`.
    pub async fn create(pool: &PgPool, input: &CreateFeature) -> Result<Feature, sqlx::Error> {
        let query = format!(
            "INSERT INTO features
                (project_id, title, description, story_points, completed_points, status, sprint_ids)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'backlog'), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.story_points)
            .bind(input.completed_points)
            .bind(&input.status)
            .bind(&input.sprint_ids)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM features WHERE id = $1");
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one project's features in creation order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM features WHERE project_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List every feature across a company's projects.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<Feature>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM features
             WHERE project_id IN (SELECT id FROM projects WHERE company_id = $1)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFeature,
    ) -> Result<Option<Feature>, sqlx::Error> {
        let query = format!(
            "UPDATE features SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                story_points = COALESCE($4, story_points),
                completed_points = COALESCE($5, completed_points),
                status = COALESCE($6, status),
                sprint_ids = COALESCE($7, sprint_ids)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feature>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.story_points)
            .bind(input.completed_points)
            .bind(&input.status)
            .bind(&input.sprint_ids)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM features WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
