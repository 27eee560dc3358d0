use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use event_store::OrderItemEvent;

use crate::error::ApiError;
use crate::middleware::ValidatedJson;
use crate::server::ShopPulseServer;
use crate::validation::RequestValidation;
use crate::{validate_field, validate_positive, validate_required};

/// Request to record an order line item
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderItemEventRequest {
    pub order_id: String,
    pub product_id: String,
    pub description: Option<String>,
    pub quantity: i32,
    /// Price in the smallest currency unit (cents, pence).
    pub price_at_purchase: i64,
    pub event_time: DateTime<Utc>,
}

impl RequestValidation for CreateOrderItemEventRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.order_id, "order_id is required");
        validate_required!(self.product_id, "product_id is required");
        validate_positive!(self.quantity, "quantity must be greater than zero");
        Ok(())
    }
}

/// Create a new order item event
///
/// No uniqueness applies here: an order accumulates one row per line item.
#[utoipa::path(
    post,
    path = crate::routes::paths::events::ORDER_ITEM,
    request_body = CreateOrderItemEventRequest,
    responses(
        (status = 201, description = "Order item event recorded", body = OrderItemEvent),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn create_order_item_event(
    State(server): State<ShopPulseServer>,
    ValidatedJson(payload): ValidatedJson<CreateOrderItemEventRequest>,
) -> Result<(StatusCode, Json<OrderItemEvent>), ApiError> {
    let event = server
        .events
        .insert_order_item(
            &payload.order_id,
            &payload.product_id,
            payload.description.as_deref(),
            payload.quantity,
            payload.price_at_purchase,
            payload.event_time,
        )
        .await?;

    tracing::info!(
        event_id = %event.event_id,
        order_id = %event.order_id,
        "Order item event recorded"
    );

    Ok((StatusCode::CREATED, Json(event)))
}
