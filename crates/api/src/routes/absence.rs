//! Route definitions for the `/absences` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::absence;
use crate::state::AppState;

/// Routes mounted at `/absences`.
///
/// ```text
/// GET    /        -> list  (?resourceId=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(absence::list).post(absence::create))
        .route(
            "/{id}",
            get(absence::get_by_id)
                .put(absence::update)
                .delete(absence::delete),
        )
}
