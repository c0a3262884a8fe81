//! Handlers for the `/interactions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::entities::InteractionLogCreate;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::repositories::InteractionLogRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/interactions
///
/// Unknown `learner_id` / `item_id` surface as `INVALID_REFERENCE` from the
/// store's foreign keys.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<InteractionLogCreate>,
) -> AppResult<impl IntoResponse> {
    let log = InteractionLogRepo::create(&state.pool, &input).await?;

    tracing::info!(
        interaction_id = log.id,
        learner_id = log.learner_id,
        item_id = log.item_id,
        kind = %log.kind,
        "Interaction logged"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: log })))
}

/// GET /api/v1/interactions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let log = InteractionLogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InteractionLog",
            id,
        }))?;
    Ok(Json(DataResponse { data: log }))
}
