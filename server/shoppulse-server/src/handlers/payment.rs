use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use event_store::PaymentEvent;

use crate::error::ApiError;
use crate::middleware::ValidatedJson;
use crate::server::ShopPulseServer;
use crate::validation::RequestValidation;
use crate::{validate_field, validate_length, validate_positive, validate_required};

fn default_currency() -> String {
    "USD".to_string()
}

/// Request to record a payment event
///
/// `status` is a free-form string ("Success", "Refunded", "Failed" by
/// convention); the contract does not reject other values. Amounts are
/// integers in the smallest currency unit to avoid floating-point rounding.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePaymentEventRequest {
    #[schema(example = "ORD-992834")]
    pub order_id: String,
    /// Amount in the smallest currency unit (e.g., cents).
    pub amount: i64,
    pub status: String,
    pub event_time: DateTime<Utc>,
    /// 3-letter code; "USD" when absent.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl RequestValidation for CreatePaymentEventRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.order_id, "order_id is required");
        validate_required!(self.status, "status is required");
        validate_positive!(self.amount, "amount must be greater than zero");
        validate_length!(self.currency, 1, 3, "currency must be at most 3 characters");
        Ok(())
    }
}

/// Create a new payment event
///
/// An order may see several payment rows over its lifetime (e.g. a refund
/// after a success); each gets its own identity.
#[utoipa::path(
    post,
    path = crate::routes::paths::events::PAYMENT,
    request_body = CreatePaymentEventRequest,
    responses(
        (status = 201, description = "Payment event recorded", body = PaymentEvent),
        (status = 422, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn create_payment_event(
    State(server): State<ShopPulseServer>,
    ValidatedJson(payload): ValidatedJson<CreatePaymentEventRequest>,
) -> Result<(StatusCode, Json<PaymentEvent>), ApiError> {
    let event = server
        .events
        .insert_payment(
            &payload.order_id,
            payload.amount,
            &payload.status,
            &payload.currency,
            payload.event_time,
        )
        .await?;

    tracing::info!(
        event_id = %event.event_id,
        order_id = %event.order_id,
        amount = event.amount,
        "Payment event recorded"
    );

    Ok((StatusCode::CREATED, Json(event)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn currency_defaults_to_usd_when_absent() {
        let request: CreatePaymentEventRequest = serde_json::from_value(json!({
            "order_id": "INV-PAY-001",
            "amount": 4999,
            "status": "Success",
            "event_time": "2024-06-01T10:00:00+00:00"
        }))
        .unwrap();
        assert_eq!(request.currency, "USD");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn explicit_currency_is_kept() {
        let request: CreatePaymentEventRequest = serde_json::from_value(json!({
            "order_id": "INV-PAY-001",
            "amount": 4999,
            "status": "Success",
            "event_time": "2024-06-01T10:00:00+00:00",
            "currency": "GBP"
        }))
        .unwrap();
        assert_eq!(request.currency, "GBP");
    }

    #[test]
    fn long_currency_fails_validation() {
        let request: CreatePaymentEventRequest = serde_json::from_value(json!({
            "order_id": "INV-PAY-001",
            "amount": 4999,
            "status": "Success",
            "event_time": "2024-06-01T10:00:00+00:00",
            "currency": "DOLLARS"
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn free_form_status_is_accepted() {
        // "Failed" is not a closed enum value; it must pass validation.
        let request: CreatePaymentEventRequest = serde_json::from_value(json!({
            "order_id": "INV-P-R5",
            "amount": 2000,
            "status": "Failed",
            "event_time": "2024-06-01T10:00:00+00:00"
        }))
        .unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn fractional_amount_is_rejected_at_deserialization() {
        let result = serde_json::from_value::<CreatePaymentEventRequest>(json!({
            "order_id": "INV-PAY-001",
            "amount": 49.99,
            "status": "Success",
            "event_time": "2024-06-01T10:00:00+00:00"
        }));
        assert!(result.is_err());
    }
}
