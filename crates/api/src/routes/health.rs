use std::time::Instant;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Round-trip time of the probe query; absent when it failed.
    pub db_latency_ms: Option<u128>,
}

/// GET /health
///
/// Always 200 so load balancers can tell "process up" from "database down"
/// by reading the body.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let started = Instant::now();
    let probe = learnhub_db::health_check(&state.pool).await;

    let db_latency_ms = match &probe {
        Ok(()) => Some(started.elapsed().as_millis()),
        Err(e) => {
            tracing::warn!(error = %e, "Database health probe failed");
            None
        }
    };
    let db_healthy = db_latency_ms.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        db_latency_ms,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
