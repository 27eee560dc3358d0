use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use event_store::OrderEvent;

use crate::error::ApiError;
use crate::middleware::ValidatedJson;
use crate::server::ShopPulseServer;
use crate::validation::RequestValidation;
use crate::{validate_field, validate_required};

/// Closed set of order lifecycle states accepted at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Request to record an order header event
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderEventRequest {
    #[schema(example = "ORD-123456")]
    pub order_id: String,
    /// Null for guest checkouts.
    pub user_id: Option<i64>,
    pub status: OrderStatus,
    pub country: Option<String>,
    pub event_time: DateTime<Utc>,
}

impl RequestValidation for CreateOrderEventRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.order_id, "order_id is required");
        Ok(())
    }
}

/// Create a new order event
///
/// `order_id` is unique across all order events; a duplicate answers 409 so
/// callers can tell a conflict from an internal fault.
#[utoipa::path(
    post,
    path = crate::routes::paths::events::ORDER,
    request_body = CreateOrderEventRequest,
    responses(
        (status = 201, description = "Order event recorded", body = OrderEvent),
        (status = 409, description = "order_id already exists"),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn create_order_event(
    State(server): State<ShopPulseServer>,
    ValidatedJson(payload): ValidatedJson<CreateOrderEventRequest>,
) -> Result<(StatusCode, Json<OrderEvent>), ApiError> {
    let event = match server
        .events
        .insert_order(
            &payload.order_id,
            payload.user_id,
            payload.status.as_str(),
            payload.country.as_deref(),
            payload.event_time,
        )
        .await
    {
        Ok(event) => event,
        Err(err) if err.is_unique_violation() => {
            tracing::warn!(order_id = %payload.order_id, "Duplicate order_id rejected");
            return Err(ApiError::conflict(format!(
                "order_id '{}' already exists",
                payload.order_id
            )));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(
        event_id = %event.event_id,
        order_id = %event.order_id,
        status = %event.status,
        "Order event recorded"
    );

    Ok((StatusCode::CREATED, Json(event)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_accepts_every_lifecycle_literal() {
        for (literal, expected) in [
            ("pending", OrderStatus::Pending),
            ("confirmed", OrderStatus::Confirmed),
            ("shipped", OrderStatus::Shipped),
            ("cancelled", OrderStatus::Cancelled),
        ] {
            let status: OrderStatus = serde_json::from_value(json!(literal)).unwrap();
            assert_eq!(status, expected);
            assert_eq!(status.as_str(), literal);
        }
    }

    #[test]
    fn status_rejects_logistics_literal() {
        // "delivered" belongs to the logistics set, not the order set.
        let result = serde_json::from_value::<OrderStatus>(json!("delivered"));
        assert!(result.is_err());
    }

    #[test]
    fn empty_order_id_fails_validation() {
        let request: CreateOrderEventRequest = serde_json::from_value(json!({
            "order_id": "",
            "status": "pending",
            "event_time": "2024-06-01T10:00:00+00:00"
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }
}
