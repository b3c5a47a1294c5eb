//! Handlers for the `/absences` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pmo_core::error::CoreError;
use pmo_core::tenancy::Owner;
use pmo_core::types::DbId;
use pmo_core::validation::validate_absence_type;
use pmo_db::models::absence::{Absence, CreateAbsence, UpdateAbsence};
use pmo_db::repositories::AbsenceRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::tenancy::{authorize, authorize_owner};

/// Query parameters for `GET /absences`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceListParams {
    pub resource_id: Option<DbId>,
}

/// POST /api/v1/absences
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<CreateAbsence>,
) -> AppResult<(StatusCode, Json<Absence>)> {
    validate_absence_type(&input.absence_type)?;
    authorize_owner(&state.pool, &user, Owner::Resource(input.resource_id)).await?;

    let absence = AbsenceRepo::create(&state.pool, &input).await?;
    tracing::info!(absence_id = %absence.id, resource_id = %absence.resource_id, "Absence created");
    Ok((StatusCode::CREATED, Json(absence)))
}

/// GET /api/v1/absences[?resourceId=]
///
/// A supplied resource is authorized first, so a foreign id is `403`
/// rather than an empty list.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(params): ApiQuery<AbsenceListParams>,
) -> AppResult<Json<Vec<Absence>>> {
    if let Some(resource_id) = params.resource_id {
        authorize_owner(&state.pool, &user, Owner::Resource(resource_id)).await?;
    }
    let absences =
        AbsenceRepo::list_by_company(&state.pool, user.company_id, params.resource_id).await?;
    Ok(Json(absences))
}

/// GET /api/v1/absences/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Absence>> {
    let absence = AbsenceRepo::find_by_id(&state.pool, id).await?;
    let absence = authorize(&state.pool, &user, absence, id).await?;
    Ok(Json(absence))
}

/// PUT /api/v1/absences/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    JsonBody(input): JsonBody<UpdateAbsence>,
) -> AppResult<Json<Absence>> {
    let existing = AbsenceRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if let Some(absence_type) = &input.absence_type {
        validate_absence_type(absence_type)?;
    }

    let absence = AbsenceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(absence))
}

/// DELETE /api/v1/absences/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let existing = AbsenceRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if AbsenceRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Absence",
        id,
    })
}
