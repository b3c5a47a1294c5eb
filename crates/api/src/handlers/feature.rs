//! Handlers for the `/features` resource.
//!
//! `sprintIds` are stored as given; they are not checked against the
//! feature's project.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pmo_core::error::CoreError;
use pmo_core::tenancy::Owner;
use pmo_core::types::DbId;
use pmo_core::validation::{validate_feature_status, validate_non_negative_count, validate_required};
use pmo_db::models::feature::{CreateFeature, Feature, UpdateFeature};
use pmo_db::repositories::FeatureRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, JsonBody};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::tenancy::{authorize, authorize_owner};

/// Query parameters for `GET /features`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureListParams {
    pub project_id: Option<DbId>,
}

/// POST /api/v1/features
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(mut input): JsonBody<CreateFeature>,
) -> AppResult<(StatusCode, Json<Feature>)> {
    validate_required(&input.title, "title")?;
    validate_non_negative_count(input.story_points, "storyPoints")?;
    validate_non_negative_count(input.completed_points, "completedPoints")?;
    if let Some(status) = &input.status {
        validate_feature_status(status)?;
    }
    input.title = input.title.trim().to_string();
    authorize_owner(&state.pool, &user, Owner::Project(input.project_id)).await?;

    let feature = FeatureRepo::create(&state.pool, &input).await?;
    tracing::info!(feature_id = %feature.id, project_id = %feature.project_id, "Feature created");
    Ok((StatusCode::CREATED, Json(feature)))
}

/// GET /api/v1/features[?projectId=]
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(params): ApiQuery<FeatureListParams>,
) -> AppResult<Json<Vec<Feature>>> {
    let features = match params.project_id {
        Some(project_id) => {
            authorize_owner(&state.pool, &user, Owner::Project(project_id)).await?;
            FeatureRepo::list_by_project(&state.pool, project_id).await?
        }
        None => FeatureRepo::list_by_company(&state.pool, user.company_id).await?,
    };
    Ok(Json(features))
}

/// GET /api/v1/features/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Feature>> {
    let feature = FeatureRepo::find_by_id(&state.pool, id).await?;
    let feature = authorize(&state.pool, &user, feature, id).await?;
    Ok(Json(feature))
}

/// PUT /api/v1/features/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
    JsonBody(mut input): JsonBody<UpdateFeature>,
) -> AppResult<Json<Feature>> {
    let existing = FeatureRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if let Some(title) = &input.title {
        validate_required(title, "title")?;
        input.title = Some(title.trim().to_string());
    }
    if let Some(points) = input.story_points {
        validate_non_negative_count(points, "storyPoints")?;
    }
    if let Some(points) = input.completed_points {
        validate_non_negative_count(points, "completedPoints")?;
    }
    if let Some(status) = &input.status {
        validate_feature_status(status)?;
    }

    let feature = FeatureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Feature",
            id,
        }))?;
    Ok(Json(feature))
}

/// DELETE /api/v1/features/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let existing = FeatureRepo::find_by_id(&state.pool, id).await?;
    authorize(&state.pool, &user, existing, id).await?;

    if FeatureRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Feature",
            id,
        }))
    }
}
