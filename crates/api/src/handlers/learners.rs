//! Handlers for the `/learners` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use learnhub_core::entities::LearnerCreate;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::repositories::{InteractionLogRepo, LearnerRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/learners
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LearnerCreate>,
) -> AppResult<impl IntoResponse> {
    let learner = LearnerRepo::create(&state.pool, &input).await?;

    tracing::info!(learner_id = learner.id, "Learner created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: learner })))
}

/// GET /api/v1/learners
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let learners = LearnerRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse { data: learners }))
}

/// GET /api/v1/learners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let learner = LearnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Learner",
            id,
        }))?;
    Ok(Json(DataResponse { data: learner }))
}

/// DELETE /api/v1/learners/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LearnerRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(learner_id = id, "Learner deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Learner",
            id,
        }))
    }
}

/// GET /api/v1/learners/{id}/interactions
///
/// An unknown learner yields an empty list rather than 404.
pub async fn list_interactions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let logs =
        InteractionLogRepo::list_for_learner(&state.pool, id, params.limit, params.offset)
            .await?;
    Ok(Json(DataResponse { data: logs }))
}
