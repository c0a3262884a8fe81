use axum::routing::get;
use axum::Router;

use crate::handlers::learners;
use crate::state::AppState;

/// Learner routes mounted at `/learners`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// DELETE /{id}                -> delete
/// GET    /{id}/interactions   -> list_interactions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(learners::list).post(learners::create))
        .route("/{id}", get(learners::get_by_id).delete(learners::delete))
        .route("/{id}/interactions", get(learners::list_interactions))
}
