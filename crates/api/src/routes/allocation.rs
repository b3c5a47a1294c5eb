//! Route definitions for the `/allocations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::allocation;
use crate::state::AppState;

/// Routes mounted at `/allocations`.
///
/// ```text
/// GET    /        -> list  (?projectId=&resourceId=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(allocation::list).post(allocation::create))
        .route(
            "/{id}",
            get(allocation::get_by_id)
                .put(allocation::update)
                .delete(allocation::delete),
        )
}
