//! Handlers for the `/allocations` resource.
//!
//! An allocation references both a project and a resource. Reads and writes
//! are authorized through the resource; create checks both references.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pmo_core::error::CoreError;
use pmo_core::tenancy::Owner;
use pmo_core::types::DbId;
use pmo_core::validation::{validate_non_negative, validate_percentage};
use pmo_db::models::allocation::{Allocation, CreateAllocation, UpdateAllocation};
use pmo_db::repositories::AllocationRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::tenancy::{authorize, authorize_owner};

/// Query parameters for `GET /allocations`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationListParams {
    pub project_id: Option<DbId>,
    pub resource_id: Option<DbId>,
}

/// POST /api/v1/allocations
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<CreateAllocation>,
) -> AppResult<(StatusCode, Json<Allocation>)> {
    validate_percentage(input.allocation_pct, "allocationPct")?;
    validate_non_negative(input.planned_days, "plannedDays")?;
    validate_non_negative(input.actual_days, "actualDays")?;
    authorize_owner(&state.pool, &user, Owner::Project(input.project_id)).await?;
    authorize_owner(&state.pool, &user, Owner::Resource(input.resource_id)).await?;

    let allocation = AllocationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        allocation_id = %allocation.id,
        project_id = %allocation.project_id,
        resource_id = %allocation.resource_id,
        "Allocation created",
    );
    Ok((StatusCode::CREATED, Json(allocation)))
}

/// GET /api/v1/allocations[?projectId=&resourceId=]
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(params): ApiQuery<AllocationListParams>,
) -> AppResult<Json<Vec<Allocation>>> {
    let allocations = AllocationRepo::list_by_company(
        &state.pool,
        user.company_id,
        params.project_id,
        params.resource_id,
    )
    .await?;
    Ok(Json(allocations))
}

/// GET /api/v1/allocations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Allocation>> {
    let allocation = AllocationRepo::find_by_id(&state.pool, id).await?;
    let allocation = authorize(&state.pool, &user, allocation, id).await?;
    Ok(Json(allocation))
}

/// PUT /api/v1/allocations/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    JsonBody(input): JsonBody<UpdateAllocation>,
) -> AppResult<Json<Allocation>> {
    let existing = AllocationRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if let Some(pct) = input.allocation_pct {
        validate_percentage(pct, "allocationPct")?;
    }
    if let Some(days) = input.planned_days {
        validate_non_negative(days, "plannedDays")?;
    }
    if let Some(days) = input.actual_days {
        validate_non_negative(days, "actualDays")?;
    }

    let allocation = AllocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(allocation))
}

/// DELETE /api/v1/allocations/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let existing = AllocationRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if AllocationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Allocation",
        id,
    })
}
