//! Route definitions for the `/cost-items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cost_item;
use crate::state::AppState;

/// Routes mounted at `/cost-items`.
///
/// ```text
/// GET    /        -> list  (?projectId=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cost_item::list).post(cost_item::create))
        .route(
            "/{id}",
            get(cost_item::get_by_id)
                .put(cost_item::update)
                .delete(cost_item::delete),
        )
}
