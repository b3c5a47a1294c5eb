//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pmo_core::error::CoreError;
use pmo_core::types::DbId;
use pmo_core::validation::{
    normalize_currency, normalize_project_code, validate_non_negative, validate_required,
    validate_sprint_length,
};
use pmo_db::models::project::{CreateProject, Project, UpdateProject};
use pmo_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::tenancy::authorize;

/// POST /api/v1/projects
///
/// The project is owned by the caller's company and records the caller as owner.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(mut input): JsonBody<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_required(&input.name, "name")?;
    validate_sprint_length(input.sprint_length_days)?;
    validate_non_negative(input.budget, "budget")?;
    input.name = input.name.trim().to_string();
    input.code = normalize_project_code(&input.code)?;
    input.currency = normalize_currency(&input.currency)?;

    let project = ProjectRepo::create(&state.pool, user.company_id, user.user_id, &input).await?;
    tracing::info!(project_id = %project.id, company_id = %user.company_id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_company(&state.pool, user.company_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = find_authorized(&state, &user, id).await?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    JsonBody(mut input): JsonBody<UpdateProject>,
) -> AppResult<Json<Project>> {
    find_authorized(&state, &user, id).await?;

    if let Some(name) = &input.name {
        validate_required(name, "name")?;
        input.name = Some(name.trim().to_string());
    }
    if let Some(code) = &input.code {
        input.code = Some(normalize_project_code(code)?);
    }
    if let Some(currency) = &input.currency {
        input.currency = Some(normalize_currency(currency)?);
    }
    if let Some(days) = input.sprint_length_days {
        validate_sprint_length(days)?;
    }
    if let Some(budget) = input.budget {
        validate_non_negative(budget, "budget")?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Removes the project together with its sprints, features, cost items,
/// allocations and monthly records.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    find_authorized(&state, &user, id).await?;
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = %id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// Load a project and check it belongs to the caller's company.
pub(crate) async fn find_authorized(
    state: &AppState,
    user: &AuthUser,
    id: DbId,
) -> AppResult<Project> {
    let project = ProjectRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, user, project, id).await
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}
