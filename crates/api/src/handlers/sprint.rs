//! Handlers for the `/sprints` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pmo_core::error::CoreError;
use pmo_core::tenancy::Owner;
use pmo_core::types::DbId;
use pmo_core::validation::validate_required;
use pmo_db::models::sprint::{CreateSprint, Sprint, UpdateSprint};
use pmo_db::repositories::SprintRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::tenancy::{authorize, authorize_owner};

/// Query parameters for `GET /sprints`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintListParams {
    pub project_id: Option<DbId>,
}

/// POST /api/v1/sprints
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(mut input): JsonBody<CreateSprint>,
) -> AppResult<(StatusCode, Json<Sprint>)> {
    validate_required(&input.name, "name")?;
    input.name = input.name.trim().to_string();
    authorize_owner(&state.pool, &user, Owner::Project(input.project_id)).await?;

    let sprint = SprintRepo::create(&state.pool, &input).await?;
    tracing::info!(sprint_id = %sprint.id, project_id = %sprint.project_id, "Sprint created");
    Ok((StatusCode::CREATED, Json(sprint)))
}

/// GET /api/v1/sprints?projectId=
///
/// `projectId` is required; sprints are returned in start-date order.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(params): ApiQuery<SprintListParams>,
) -> AppResult<Json<Vec<Sprint>>> {
    let project_id = params
        .project_id
        .ok_or_else(|| AppError::BadRequest("projectId query parameter is required".into()))?;
    authorize_owner(&state.pool, &user, Owner::Project(project_id)).await?;

    let sprints = SprintRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(sprints))
}

/// GET /api/v1/sprints/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Sprint>> {
    let sprint = SprintRepo::find_by_id(&state.pool, id).await?;
    let sprint = authorize(&state.pool, &user, sprint, id).await?;
    Ok(Json(sprint))
}

/// PUT /api/v1/sprints/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    JsonBody(mut input): JsonBody<UpdateSprint>,
) -> AppResult<Json<Sprint>> {
    let existing = SprintRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if let Some(name) = &input.name {
        validate_required(name, "name")?;
        input.name = Some(name.trim().to_string());
    }

    let sprint = SprintRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sprint",
            id,
        }))?;
    Ok(Json(sprint))
}

/// DELETE /api/v1/sprints/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let existing = SprintRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if SprintRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Sprint",
            id,
        }))
    }
}
