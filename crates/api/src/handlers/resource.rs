//! Handlers for the `/resources` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pmo_core::error::CoreError;
use pmo_core::types::DbId;
use pmo_core::validation::{normalize_skill_tags, validate_non_negative, validate_required};
use pmo_db::models::resource::{CreateResource, Resource, UpdateResource};
use pmo_db::repositories::ResourceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::tenancy::authorize;

/// POST /api/v1/resources
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(mut input): JsonBody<CreateResource>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    validate_required(&input.name, "name")?;
    validate_required(&input.role, "role")?;
    validate_required(&input.contact, "contact")?;
    validate_non_negative(input.day_rate, "dayRate")?;
    input.name = input.name.trim().to_string();
    input.skill_tags = normalize_skill_tags(&input.skill_tags);

    let resource = ResourceRepo::create(&state.pool, user.company_id, &input).await?;
    tracing::info!(resource_id = %resource.id, company_id = %user.company_id, "Resource created");
    Ok((StatusCode::CREATED, Json(resource)))
}

/// GET /api/v1/resources
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Resource>>> {
    let resources = ResourceRepo::list_by_company(&state.pool, user.company_id).await?;
    Ok(Json(resources))
}

/// GET /api/v1/resources/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Resource>> {
    let resource = ResourceRepo::find_by_id(&state.pool, id).await?;
    let resource = authorize(&state.pool, &user, resource, id).await?;
    Ok(Json(resource))
}

/// PUT /api/v1/resources/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    JsonBody(mut input): JsonBody<UpdateResource>,
) -> AppResult<Json<Resource>> {
    let existing = ResourceRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if let Some(name) = &input.name {
        validate_required(name, "name")?;
        input.name = Some(name.trim().to_string());
    }
    if let Some(role) = &input.role {
        validate_required(role, "role")?;
    }
    if let Some(contact) = &input.contact {
        validate_required(contact, "contact")?;
    }
    if let Some(rate) = input.day_rate {
        validate_non_negative(rate, "dayRate")?;
    }
    if let Some(tags) = &input.skill_tags {
        input.skill_tags = Some(normalize_skill_tags(tags));
    }

    let resource = ResourceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(resource))
}

/// DELETE /api/v1/resources/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let existing = ResourceRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if ResourceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))
    }
}
