//! Route definitions for the `/monthly-records` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::monthly_record;
use crate::state::AppState;

/// Routes mounted at `/monthly-records`.
///
/// ```text
/// GET    /        -> list  (?projectId=&resourceId=&period=)
/// POST   /        -> create  (upsert: 201 inserted, 200 overwritten)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(monthly_record::list).post(monthly_record::create))
        .route(
            "/{id}",
            get(monthly_record::get_by_id)
                .put(monthly_record::update)
                .delete(monthly_record::delete),
        )
}
