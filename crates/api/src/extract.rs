//! Request body extractor that runs the payload validation boundary.

use axum::extract::{FromRequest, Request};
use axum::Json;
use learnhub_core::schema::FromPayload;
use serde_json::Value;

use crate::error::AppError;

/// A JSON request body shaped into `T` via [`FromPayload`].
///
/// Bodies that are not JSON at all are rejected as `BAD_REQUEST`; bodies
/// that are JSON but do not fit `T` are rejected as `VALIDATION_ERROR`
/// with one detail entry per failing field.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<ItemCreate>) -> AppResult<...> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: FromPayload,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        match T::from_json(&value) {
            Ok(record) => Ok(ValidatedJson(record)),
            Err(err) => {
                tracing::debug!(
                    entity = err.entity(),
                    violations = err.violations().len(),
                    "Rejected request payload"
                );
                Err(err.into())
            }
        }
    }
}
