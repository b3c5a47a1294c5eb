//! Route definitions for the `/dashboard` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /projects -> portfolio
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/projects", get(dashboard::portfolio))
}
