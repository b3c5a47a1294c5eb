pub mod absence;
pub mod allocation;
pub mod auth;
pub mod cost_item;
pub mod dashboard;
pub mod feature;
pub mod health;
pub mod monthly_record;
pub mod project;
pub mod resource;
pub mod sprint;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         caller profile
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/financials                        financial rollup + delivery
/// /projects/{id}/financials/{period}               per-resource breakdown
///
/// /resources                                       list, create
/// /resources/{id}                                  get, update, delete
///
/// /sprints?projectId=                              list, create
/// /sprints/{id}                                    get, update, delete
///
/// /features?projectId=                             list, create
/// /features/{id}                                   get, update, delete
///
/// /allocations?projectId=&resourceId=              list, create
/// /allocations/{id}                                get, update, delete
///
/// /cost-items?projectId=                           list, create
/// /cost-items/{id}                                 get, update, delete
///
/// /monthly-records?projectId=&resourceId=&period=  list, upsert
/// /monthly-records/{id}                            get, update, delete
///
/// /absences?resourceId=                            list, create
/// /absences/{id}                                   get, update, delete
///
/// /dashboard/projects                              portfolio overview
/// ```
///
/// Everything except register and login requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/resources", resource::router())
        .nest("/sprints", sprint::router())
        .nest("/features", feature::router())
        .nest("/allocations", allocation::router())
        .nest("/cost-items", cost_item::router())
        .nest("/monthly-records", monthly_record::router())
        .nest("/absences", absence::router())
        .nest("/dashboard", dashboard::router())
}
