//! Handlers for the `/items` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::entities::{ItemCreate, ItemUpdate};
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::item::Item;
use learnhub_db::repositories::{InteractionLogRepo, ItemRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/items
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ItemCreate>,
) -> AppResult<impl IntoResponse> {
    let item = ItemRepo::create(&state.pool, &input).await?;

    tracing::info!(item_id = item.id, parent_id = ?item.parent_id, "Item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/v1/items
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let items = ItemRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = find_item(&state, id).await?;
    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/items/{id}
///
/// Absent fields keep their stored value. An update with no fields leaves
/// the row, including `updated_at`, untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<ItemUpdate>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        let item = find_item(&state, id).await?;
        return Ok(Json(DataResponse { data: item }));
    }

    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    tracing::info!(item_id = id, "Item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/items/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ItemRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(item_id = id, "Item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Item", id }))
    }
}

/// GET /api/v1/items/{id}/children
pub async fn list_children(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_item(&state, id).await?;
    let children = ItemRepo::list_children(&state.pool, id).await?;
    Ok(Json(DataResponse { data: children }))
}

/// GET /api/v1/items/{id}/interactions
pub async fn list_interactions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    find_item(&state, id).await?;
    let logs =
        InteractionLogRepo::list_for_item(&state.pool, id, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: logs }))
}

async fn find_item(state: &AppState, id: DbId) -> AppResult<Item> {
    ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))
}
