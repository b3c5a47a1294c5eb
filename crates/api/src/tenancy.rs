//! Tenant resolution: walk an owner to its company and apply
//! [`pmo_core::tenancy::check_owner`].
//!
//! Every handler goes through these functions so the order of checks is the
//! same everywhere: a missing entity is `404`, then a foreign one is `403`.

use pmo_core::error::CoreError;
use pmo_core::tenancy::{check_owner, Owner, TenantOwned};
use pmo_core::types::DbId;
use pmo_db::repositories::{ProjectRepo, ResourceRepo};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;

/// Resolve an owner to the id of the company it belongs to.
///
/// Returns `None` when a project or resource owner does not exist.
pub async fn owning_company(pool: &PgPool, owner: Owner) -> Result<Option<DbId>, sqlx::Error> {
    match owner {
        Owner::Company(id) => Ok(Some(id)),
        Owner::Project(id) => ProjectRepo::company_id(pool, id).await,
        Owner::Resource(id) => ResourceRepo::company_id(pool, id).await,
    }
}

/// Ensure `owner` exists and belongs to the caller's company.
///
/// Used on create paths for every referenced parent and for list filters.
pub async fn authorize_owner(pool: &PgPool, user: &AuthUser, owner: Owner) -> AppResult<()> {
    let company_id = owning_company(pool, owner).await?;
    check_owner(owner, company_id, user.company_id)?;
    Ok(())
}

/// Ensure a loaded entity exists and belongs to the caller's company.
///
/// `entity` is the result of a `find_by_id` lookup for `id`.
pub async fn authorize<T: TenantOwned>(
    pool: &PgPool,
    user: &AuthUser,
    entity: Option<T>,
    id: DbId,
) -> AppResult<T> {
    let entity = entity.ok_or(CoreError::NotFound {
        entity: T::ENTITY,
        id,
    })?;
    if let Err(err) = authorize_owner(pool, user, entity.owner()).await {
        tracing::warn!(
            entity = T::ENTITY,
            id = %entity.id(),
            user_id = %user.user_id,
            "Access to record denied"
        );
        return Err(err);
    }
    Ok(entity)
}
