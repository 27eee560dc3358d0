//! API error taxonomy and response mapping.
//!
//! Three failure classes cross the HTTP boundary: structural validation
//! errors (422, caught before persistence), uniqueness conflicts (409), and
//! unclassified persistence faults (500, opaque to the caller).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use event_store::EventStoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body violated the entity schema; nothing was persisted.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The write lost to a store-level uniqueness constraint.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unclassified persistence or internal fault. Details stay server-side.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Conflict(_) => "conflict",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

/// Wire shape for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            // Internal details are logged, not leaked.
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal server error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code(),
                message,
            },
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<EventStoreError> for ApiError {
    fn from(err: EventStoreError) -> Self {
        match err {
            EventStoreError::UniqueViolation(detail) => ApiError::Conflict(detail),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_422() {
        let err = ApiError::validation("quantity must be greater than zero");
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "validation_error");
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = ApiError::conflict("order_id 'INV-DUP-001' already exists");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_maps_to_500() {
        let err = ApiError::internal("connection reset");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unique_violation_becomes_conflict() {
        let store_err = EventStoreError::UniqueViolation("order_events_order_id_key".to_string());
        let api_err = ApiError::from(store_err);
        assert!(matches!(api_err, ApiError::Conflict(_)));
    }

    #[test]
    fn other_store_errors_become_internal() {
        let store_err = EventStoreError::ConnectionFailed("refused".to_string());
        let api_err = ApiError::from(store_err);
        assert!(matches!(api_err, ApiError::Internal(_)));
    }
}
