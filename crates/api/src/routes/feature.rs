//! Route definitions for the `/features` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::feature;
use crate::state::AppState;

/// Routes mounted at `/features`.
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
        .route("/", get(feature::list).post(feature::create))
        .route(
            "/{id}",
            get(feature::get_by_id)
                .put(feature::update)
                .delete(feature::delete),
        )
}
