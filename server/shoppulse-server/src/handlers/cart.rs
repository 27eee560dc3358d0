use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use event_store::CartEvent;

use crate::error::ApiError;
use crate::middleware::ValidatedJson;
use crate::server::ShopPulseServer;
use crate::validation::RequestValidation;
use crate::{validate_field, validate_positive, validate_required};

/// Request to record a cart event
///
/// `action` is a free-form string; "add" and "remove" are the conventional
/// values but the contract does not reject others.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCartEventRequest {
    /// Maps to the storefront session.
    pub correlation_id: String,
    /// Null for guest sessions.
    pub user_id: Option<i64>,
    pub product_id: i64,
    pub action: String,
    pub quantity: i32,
    pub event_time: DateTime<Utc>,
}

impl RequestValidation for CreateCartEventRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.correlation_id, "correlation_id is required");
        validate_required!(self.action, "action is required");
        validate_positive!(self.quantity, "quantity must be greater than zero");
        Ok(())
    }
}

/// Create a new cart event
#[utoipa::path(
    post,
    path = crate::routes::paths::events::CART,
    request_body = CreateCartEventRequest,
    responses(
        (status = 201, description = "Cart event recorded", body = CartEvent),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn create_cart_event(
    State(server): State<ShopPulseServer>,
    ValidatedJson(payload): ValidatedJson<CreateCartEventRequest>,
) -> Result<(StatusCode, Json<CartEvent>), ApiError> {
    let event = server
        .events
        .insert_cart(
            &payload.correlation_id,
            payload.user_id,
            payload.product_id,
            &payload.action,
            payload.quantity,
            payload.event_time,
        )
        .await?;

    tracing::info!(
        event_id = %event.event_id,
        action = %event.action,
        "Cart event recorded"
    );

    Ok((StatusCode::CREATED, Json(event)))
}
