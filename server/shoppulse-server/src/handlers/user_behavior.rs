use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use event_store::UserBehaviorEvent;

use crate::error::ApiError;
use crate::middleware::ValidatedJson;
use crate::server::ShopPulseServer;
use crate::validation::RequestValidation;
use crate::{validate_field, validate_required};

/// Upper bound on rows returned by the user-behavior listing.
pub const USER_BEHAVIOR_LIST_LIMIT: i64 = 100;

/// Closed set of user-behavior event types accepted at the boundary.
///
/// Defined independently of the storage representation (plain text) and
/// translated explicitly via [`UserBehaviorEventType::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserBehaviorEventType {
    ProductViewed,
    ProductSearched,
}

impl UserBehaviorEventType {
    pub fn as_str(self) -> &'static str {
        match self {
            UserBehaviorEventType::ProductViewed => "product_viewed",
            UserBehaviorEventType::ProductSearched => "product_searched",
        }
    }
}

/// Request to record a user-behavior event
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserBehaviorEventRequest {
    pub event_type: UserBehaviorEventType,
    /// Null for guest sessions.
    pub user_id: Option<i64>,
    pub event_time: DateTime<Utc>,
    pub product_id: i64,
    pub session_id: String,
    pub country: Option<String>,
    pub source: Option<String>,
    pub platform: Option<String>,
}

impl RequestValidation for CreateUserBehaviorEventRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.session_id, "session_id is required");
        Ok(())
    }
}

/// Create a new user behavior event
#[utoipa::path(
    post,
    path = crate::routes::paths::events::USER_BEHAVIOR,
    request_body = CreateUserBehaviorEventRequest,
    responses(
        (status = 201, description = "User behavior event recorded", body = UserBehaviorEvent),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn create_user_behavior_event(
    State(server): State<ShopPulseServer>,
    ValidatedJson(payload): ValidatedJson<CreateUserBehaviorEventRequest>,
) -> Result<(StatusCode, Json<UserBehaviorEvent>), ApiError> {
    let event = server
        .events
        .insert_user_behavior(
            payload.event_type.as_str(),
            payload.user_id,
            payload.event_time,
            payload.product_id,
            &payload.session_id,
            payload.country.as_deref(),
            payload.source.as_deref(),
            payload.platform.as_deref(),
        )
        .await?;

    tracing::info!(
        event_id = %event.event_id,
        event_type = %event.event_type,
        "User behavior event recorded"
    );

    Ok((StatusCode::CREATED, Json(event)))
}

/// List user behavior events
///
/// Bounded read-back endpoint; order is stable across repeated calls absent
/// concurrent writes.
#[utoipa::path(
    get,
    path = crate::routes::paths::events::USER_BEHAVIOR,
    responses(
        (status = 200, description = "User behavior events", body = Vec<UserBehaviorEvent>),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn list_user_behavior_events(
    State(server): State<ShopPulseServer>,
) -> Result<Json<Vec<UserBehaviorEvent>>, ApiError> {
    let events = server
        .events
        .list_user_behavior(USER_BEHAVIOR_LIST_LIMIT)
        .await?;

    Ok(Json(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_type_accepts_both_literals() {
        let viewed: UserBehaviorEventType = serde_json::from_value(json!("product_viewed")).unwrap();
        assert_eq!(viewed, UserBehaviorEventType::ProductViewed);
        assert_eq!(viewed.as_str(), "product_viewed");

        let searched: UserBehaviorEventType =
            serde_json::from_value(json!("product_searched")).unwrap();
        assert_eq!(searched.as_str(), "product_searched");
    }

    #[test]
    fn event_type_rejects_unknown_literal() {
        let result = serde_json::from_value::<UserBehaviorEventType>(json!("product_purchased"));
        assert!(result.is_err());
    }

    #[test]
    fn event_type_is_case_sensitive() {
        let result = serde_json::from_value::<UserBehaviorEventType>(json!("Product_Viewed"));
        assert!(result.is_err());
    }

    #[test]
    fn request_accepts_omitted_nullable_fields() {
        let request: CreateUserBehaviorEventRequest = serde_json::from_value(json!({
            "event_type": "product_viewed",
            "event_time": "2024-06-01T10:00:00+00:00",
            "product_id": 1001,
            "session_id": "sess-abc-001"
        }))
        .unwrap();
        assert!(request.user_id.is_none());
        assert!(request.country.is_none());
        assert!(request.platform.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn request_rejects_naive_event_time() {
        let result = serde_json::from_value::<CreateUserBehaviorEventRequest>(json!({
            "event_type": "product_viewed",
            "event_time": "2024-06-01T10:00:00",
            "product_id": 1001,
            "session_id": "sess-abc-001"
        }));
        assert!(result.is_err());
    }
}
