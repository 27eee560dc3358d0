//! Request extractors shared by the handlers.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::validation::RequestValidation;

/// JSON extractor that surfaces body problems as validation errors.
///
/// Deserialization failures (missing required fields, unknown enum literals,
/// malformed timestamps, non-integer numerics) and the payload's own
/// `RequestValidation` checks are both reported as 422 before any handler
/// logic runs, so a rejected request never touches the database.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + RequestValidation,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::validation(rejection.body_text()))?;

        payload.validate()?;
        Ok(ValidatedJson(payload))
    }
}
