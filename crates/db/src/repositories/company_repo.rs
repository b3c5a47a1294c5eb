//! Repository for the `companies` table.

use pmo_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::Company;
use crate::models::user::{CreateUser, User};
use crate::repositories::user_repo;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides tenant directory operations.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Create a company and its first user atomically.
    ///
    /// If the user insert fails (e.g. duplicate email) the company is rolled
    /// back as well.
    pub async fn create_with_user(
        pool: &PgPool,
        company_name: &str,
        user: &CreateUser,
    ) -> Result<(Company, User), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("INSERT INTO companies (name) VALUES ($1) RETURNING {COLUMNS}");
        let company = sqlx::query_as::<_, Company>(&query)
            .bind(company_name)
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO users (company_id, name, email, password_hash, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            user_repo::COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(company.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.role)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(company_id = %company.id, user_id = %user.id, "Company and first user committed");
        Ok((company, user))
    }

    /// Find a company by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
