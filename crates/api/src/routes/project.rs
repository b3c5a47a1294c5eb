//! Route definitions for the `/projects` resource.
//!
//! Also mounts the per-project financial views.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
///
/// GET    /{id}/financials           -> project_financials
/// GET    /{id}/financials/{period}  -> period_breakdown
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/financials", get(dashboard::project_financials))
        .route(
            "/{id}/financials/{period}",
            get(dashboard::period_breakdown),
        )
}
