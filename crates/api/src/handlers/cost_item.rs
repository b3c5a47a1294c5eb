//! Handlers for the `/cost-items` resource (non-personnel spend).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pmo_core::error::CoreError;
use pmo_core::tenancy::Owner;
use pmo_core::types::DbId;
use pmo_core::validation::{validate_cost_type, validate_non_negative, validate_required};
use pmo_db::models::cost_item::{CostItem, CreateCostItem, UpdateCostItem};
use pmo_db::repositories::CostItemRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::tenancy::{authorize, authorize_owner};

/// Query parameters for `GET /cost-items`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItemListParams {
    pub project_id: Option<DbId>,
}

/// POST /api/v1/cost-items
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(mut input): JsonBody<CreateCostItem>,
) -> AppResult<(StatusCode, Json<CostItem>)> {
    validate_cost_type(&input.cost_type)?;
    validate_required(&input.description, "description")?;
    validate_non_negative(input.amount, "amount")?;
    input.description = input.description.trim().to_string();
    authorize_owner(&state.pool, &user, Owner::Project(input.project_id)).await?;

    let item = CostItemRepo::create(&state.pool, &input).await?;
    tracing::info!(cost_item_id = %item.id, project_id = %item.project_id, "Cost item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/cost-items[?projectId=]
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(params): ApiQuery<CostItemListParams>,
) -> AppResult<Json<Vec<CostItem>>> {
    let items = CostItemRepo::list_by_company(&state.pool, user.company_id, params.project_id).await?;
    Ok(Json(items))
}

/// GET /api/v1/cost-items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<CostItem>> {
    let item = CostItemRepo::find_by_id(&state.pool, id).await?;
    let item = authorize(&state.pool, &user, item, id).await?;
    Ok(Json(item))
}

/// PUT /api/v1/cost-items/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    JsonBody(mut input): JsonBody<UpdateCostItem>,
) -> AppResult<Json<CostItem>> {
    let existing = CostItemRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if let Some(cost_type) = &input.cost_type {
        validate_cost_type(cost_type)?;
    }
    if let Some(description) = &input.description {
        validate_required(description, "description")?;
        input.description = Some(description.trim().to_string());
    }
    if let Some(amount) = input.amount {
        validate_non_negative(amount, "amount")?;
    }

    let item = CostItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(item))
}

/// DELETE /api/v1/cost-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let existing = CostItemRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if CostItemRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CostItem",
        id,
    })
}
