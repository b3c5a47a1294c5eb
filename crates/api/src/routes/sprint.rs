//! Route definitions for the `/sprints` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sprint;
use crate::state::AppState;

/// Routes mounted at `/sprints`.
///
/// ```text
/// GET    /        -> list  (?projectId= required)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sprint::list).post(sprint::create))
        .route(
            "/{id}",
            get(sprint::get_by_id)
                .put(sprint::update)
                .delete(sprint::delete),
        )
}
