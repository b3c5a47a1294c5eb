//! Read-only financial and delivery views.
//!
//! Nothing here is stored: every response is recomputed from monthly
//! records, resource day rates, cost items and features on each request.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use pmo_core::delivery::DeliveryProgress;
use pmo_core::error::CoreError;
use pmo_core::financials::{
    budget_utilisation_pct, pct_variance, FinancialSummary, LabourRecord, ResourcePeriodLine,
};
use pmo_core::period::Period;
use pmo_core::types::DbId;
use pmo_db::repositories::{
    CostItemRepo, FeatureRepo, MonthlyRecordRepo, ProjectRepo, ResourceRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::handlers::project::find_authorized;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One point of a project's cost trend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period: String,
    pub diff_cost: f64,
}

/// Portfolio row for one project.
///
/// Budget figures here measure labour spend only; cost items are reported
/// separately as `nonPersonnel`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub budget: f64,
    pub currency_code: String,
    pub labour_forecast: f64,
    pub labour_actual: f64,
    pub non_personnel: f64,
    pub forecast_variance_pct: f64,
    pub budget_variance_pct: f64,
    pub budget_utilisation_pct: f64,
    pub trend: Vec<TrendPoint>,
}

/// Full rollup for one project plus its delivery progress.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFinancials {
    pub project_id: DbId,
    #[serde(flatten)]
    pub summary: FinancialSummary,
    pub delivery: DeliveryProgress,
}

/// Per-resource breakdown of one project in one period.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBreakdown {
    pub project_id: DbId,
    pub period: String,
    pub days_in_month: u32,
    pub lines: Vec<ResourcePeriodLine>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/projects
///
/// One overview per project of the caller's company, in project order.
pub async fn portfolio(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<ProjectOverview>>> {
    let company_id = user.company_id;
    let projects = ProjectRepo::list_by_company(&state.pool, company_id).await?;
    let rates = ResourceRepo::day_rates(&state.pool, company_id).await?;
    let records =
        MonthlyRecordRepo::list_by_company(&state.pool, company_id, None, None, None).await?;
    let cost_items = CostItemRepo::list_by_company(&state.pool, company_id, None).await?;

    let mut labour_by_project: HashMap<DbId, Vec<LabourRecord>> = HashMap::new();
    for record in &records {
        labour_by_project
            .entry(record.project_id)
            .or_default()
            .push(record.labour());
    }
    let mut costs_by_project: HashMap<DbId, Vec<f64>> = HashMap::new();
    for item in &cost_items {
        costs_by_project
            .entry(item.project_id)
            .or_default()
            .push(item.amount);
    }

    let overviews = projects
        .into_iter()
        .map(|project| {
            let labour = labour_by_project.remove(&project.id).unwrap_or_default();
            let costs = costs_by_project.remove(&project.id).unwrap_or_default();
            let summary =
                FinancialSummary::compute(project.budget, &project.currency, &labour, &rates, costs);

            ProjectOverview {
                id: project.id,
                name: project.name,
                code: project.code,
                budget: summary.budget,
                currency_code: summary.currency_code,
                labour_forecast: summary.labour_forecast,
                labour_actual: summary.labour_actual,
                non_personnel: summary.non_personnel,
                forecast_variance_pct: summary.forecast_variance_pct,
                budget_variance_pct: pct_variance(summary.labour_actual, summary.budget),
                budget_utilisation_pct: budget_utilisation_pct(
                    summary.labour_actual,
                    summary.budget,
                ),
                trend: summary
                    .periods
                    .into_iter()
                    .map(|p| TrendPoint {
                        period: p.period,
                        diff_cost: p.diff_cost,
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(Json(overviews))
}

/// GET /api/v1/projects/{id}/financials
pub async fn project_financials(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ProjectFinancials>> {
    let project = find_authorized(&state, &user, id).await?;

    let records = MonthlyRecordRepo::list_by_project(&state.pool, id).await?;
    let labour: Vec<LabourRecord> = records.iter().map(|r| r.labour()).collect();
    let rates = ResourceRepo::day_rates(&state.pool, user.company_id).await?;
    let costs = CostItemRepo::amounts_for_project(&state.pool, id).await?;
    let features = FeatureRepo::list_by_project(&state.pool, id).await?;

    let summary = FinancialSummary::compute(project.budget, &project.currency, &labour, &rates, costs);
    let delivery = DeliveryProgress::from_features(
        features
            .iter()
            .map(|f| (f.status.as_str(), f.story_points, f.completed_points)),
    );

    Ok(Json(ProjectFinancials {
        project_id: id,
        summary,
        delivery,
    }))
}

/// GET /api/v1/projects/{id}/financials/{period}
///
/// Lines are ordered by resource name.
pub async fn period_breakdown(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath((id, period)): ApiPath<(DbId, String)>,
) -> AppResult<Json<PeriodBreakdown>> {
    let parsed = Period::parse(&period)?;
    find_authorized(&state, &user, id).await?;

    let records = MonthlyRecordRepo::list_by_company(
        &state.pool,
        user.company_id,
        Some(id),
        None,
        Some(&period),
    )
    .await?;
    let resources: HashMap<DbId, _> = ResourceRepo::list_by_company(&state.pool, user.company_id)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        let resource = resources.get(&record.resource_id).ok_or(CoreError::NotFound {
            entity: "Resource",
            id: record.resource_id,
        })?;
        lines.push(ResourcePeriodLine::new(
            resource.id,
            resource.name.clone(),
            resource.role.clone(),
            resource.day_rate,
            record.forecast_days,
            record.actual_cost,
            parsed,
        ));
    }
    lines.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Json(PeriodBreakdown {
        project_id: id,
        period: parsed.to_string(),
        days_in_month: parsed.days_in_month(),
        lines,
    }))
}
