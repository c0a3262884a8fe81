use axum::routing::{get, post};
use axum::Router;

use crate::handlers::interactions;
use crate::state::AppState;

/// Interaction log routes mounted at `/interactions`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(interactions::create))
        .route("/{id}", get(interactions::get_by_id))
}
