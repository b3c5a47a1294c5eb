//! Handlers for the `/monthly-records` resource.
//!
//! A monthly record holds one resource's forecast days and actual cost on a
//! project for one `YYYY-MM` period. There is at most one record per
//! (project, resource, period).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pmo_core::error::CoreError;
use pmo_core::period::validate_period;
use pmo_core::tenancy::Owner;
use pmo_core::types::DbId;
use pmo_core::validation::validate_non_negative;
use pmo_db::models::monthly_record::{CreateMonthlyRecord, MonthlyRecord, UpdateMonthlyRecord};
use pmo_db::repositories::MonthlyRecordRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::tenancy::{authorize, authorize_owner};

/// Query parameters for `GET /monthly-records`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecordListParams {
    pub project_id: Option<DbId>,
    pub resource_id: Option<DbId>,
    pub period: Option<String>,
}

/// POST /api/v1/monthly-records
///
/// Upsert on (projectId, resourceId, period). Returns `201` when a record
/// was inserted and `200` when an existing record was overwritten.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(input): JsonBody<CreateMonthlyRecord>,
) -> AppResult<(StatusCode, Json<MonthlyRecord>)> {
    validate_period(&input.period)?;
    validate_non_negative(input.forecast_days, "forecastDays")?;
    validate_non_negative(input.actual_cost, "actualCost")?;
    authorize_owner(&state.pool, &user, Owner::Project(input.project_id)).await?;
    authorize_owner(&state.pool, &user, Owner::Resource(input.resource_id)).await?;

    let upserted = MonthlyRecordRepo::upsert(&state.pool, &input).await?;
    let status = if upserted.inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    tracing::info!(
        record_id = %upserted.record.id,
        period = %upserted.record.period,
        inserted = upserted.inserted,
        "Monthly record saved",
    );
    Ok((status, Json(upserted.record)))
}

/// GET /api/v1/monthly-records[?projectId=&resourceId=&period=]
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(params): ApiQuery<MonthlyRecordListParams>,
) -> AppResult<Json<Vec<MonthlyRecord>>> {
    if let Some(project_id) = params.project_id {
        authorize_owner(&state.pool, &user, Owner::Project(project_id)).await?;
    }
    if let Some(period) = &params.period {
        validate_period(period)?;
    }

    let records = MonthlyRecordRepo::list_by_company(
        &state.pool,
        user.company_id,
        params.project_id,
        params.resource_id,
        params.period.as_deref(),
    )
    .await?;
    Ok(Json(records))
}

/// GET /api/v1/monthly-records/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MonthlyRecord>> {
    let record = MonthlyRecordRepo::find_by_id(&state.pool, id).await?;
    let record = authorize(&state.pool, &user, record, id).await?;
    Ok(Json(record))
}

/// PUT /api/v1/monthly-records/{id}
///
/// Only `forecastDays` and `actualCost` can change.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    JsonBody(input): JsonBody<UpdateMonthlyRecord>,
) -> AppResult<Json<MonthlyRecord>> {
    let existing = MonthlyRecordRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if let Some(days) = input.forecast_days {
        validate_non_negative(days, "forecastDays")?;
    }
    if let Some(cost) = input.actual_cost {
        validate_non_negative(cost, "actualCost")?;
    }

    let record = MonthlyRecordRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(record))
}

/// DELETE /api/v1/monthly-records/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let existing = MonthlyRecordRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if MonthlyRecordRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "MonthlyRecord",
        id,
    })
}
