pub mod health;
pub mod interactions;
pub mod items;
pub mod learners;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                          list, create
/// /items/{id}                     get, update, delete
/// /items/{id}/children            direct children
/// /items/{id}/interactions        interactions on an item
///
/// /learners                       list, create
/// /learners/{id}                  get, delete
/// /learners/{id}/interactions     a learner's interactions
///
/// /interactions                   create
/// /interactions/{id}              get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", items::router())
        .nest("/learners", learners::router())
        .nest("/interactions", interactions::router())
}
