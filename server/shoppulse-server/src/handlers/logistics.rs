use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use event_store::LogisticsEvent;

use crate::error::ApiError;
use crate::middleware::ValidatedJson;
use crate::server::ShopPulseServer;
use crate::validation::RequestValidation;
use crate::{validate_field, validate_required};

/// Closed set of shipping states accepted at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LogisticsStatus {
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Delayed,
}

impl LogisticsStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LogisticsStatus::PickedUp => "picked_up",
            LogisticsStatus::InTransit => "in_transit",
            LogisticsStatus::OutForDelivery => "out_for_delivery",
            LogisticsStatus::Delivered => "delivered",
            LogisticsStatus::Delayed => "delayed",
        }
    }
}

/// Request to record a logistics event
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLogisticsEventRequest {
    pub order_id: String,
    pub status: LogisticsStatus,
    pub event_time: DateTime<Utc>,
}

impl RequestValidation for CreateLogisticsEventRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.order_id, "order_id is required");
        Ok(())
    }
}

/// Create a new logistics event
///
/// Rows accumulate per `order_id` as the shipment's status history.
#[utoipa::path(
    post,
    path = crate::routes::paths::events::LOGISTICS,
    request_body = CreateLogisticsEventRequest,
    responses(
        (status = 201, description = "Logistics event recorded", body = LogisticsEvent),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn create_logistics_event(
    State(server): State<ShopPulseServer>,
    ValidatedJson(payload): ValidatedJson<CreateLogisticsEventRequest>,
) -> Result<(StatusCode, Json<LogisticsEvent>), ApiError> {
    let event = server
        .events
        .insert_logistics(
            &payload.order_id,
            payload.status.as_str(),
            payload.event_time,
        )
        .await?;

    tracing::info!(
        event_id = %event.event_id,
        order_id = %event.order_id,
        status = %event.status,
        "Logistics event recorded"
    );

    Ok((StatusCode::CREATED, Json(event)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_accepts_every_shipping_literal() {
        for (literal, expected) in [
            ("picked_up", LogisticsStatus::PickedUp),
            ("in_transit", LogisticsStatus::InTransit),
            ("out_for_delivery", LogisticsStatus::OutForDelivery),
            ("delivered", LogisticsStatus::Delivered),
            ("delayed", LogisticsStatus::Delayed),
        ] {
            let status: LogisticsStatus = serde_json::from_value(json!(literal)).unwrap();
            assert_eq!(status, expected);
            assert_eq!(status.as_str(), literal);
        }
    }

    #[test]
    fn status_rejects_order_literal() {
        // "shipped" belongs to the order set, not the logistics set.
        let result = serde_json::from_value::<LogisticsStatus>(json!("shipped"));
        assert!(result.is_err());
    }
}
