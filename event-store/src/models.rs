//! Durable row types, one per event table.
//!
//! Status and type columns are stored as plain text; the HTTP layer owns the
//! closed enumerations and translates into these strings explicitly. Money
//! columns are integers in the smallest currency unit.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One product-view or product-search fact from the storefront.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserBehaviorEvent {
    pub event_id: Uuid,
    pub event_type: String,
    /// Null for guest sessions.
    pub user_id: Option<i64>,
    pub event_time: DateTime<Utc>,
    /// Assigned by the store at insert time, never updated.
    pub ingested_at: DateTime<Utc>,
    pub product_id: i64,
    pub session_id: String,
    pub country: Option<String>,
    pub source: Option<String>,
    pub platform: Option<String>,
}

/// An add-to-cart or remove-from-cart action.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CartEvent {
    pub event_id: Uuid,
    pub correlation_id: String,
    pub user_id: Option<i64>,
    pub product_id: i64,
    pub action: String,
    pub quantity: i32,
    pub event_time: DateTime<Utc>,
}

/// The header event for a transaction. `order_id` is unique across all rows.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OrderEvent {
    pub event_id: Uuid,
    pub order_id: String,
    pub user_id: Option<i64>,
    pub status: String,
    pub country: Option<String>,
    pub event_time: DateTime<Utc>,
    pub ingested_at: DateTime<Utc>,
}

/// An individual line item; many items may share one `order_id`.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OrderItemEvent {
    pub event_id: Uuid,
    pub order_id: String,
    pub product_id: String,
    pub description: Option<String>,
    pub quantity: i32,
    /// Price in the smallest currency unit (cents, pence).
    pub price_at_purchase: i64,
    pub event_time: DateTime<Utc>,
}

/// A payment status fact; an order may see several (e.g. refund after success).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct PaymentEvent {
    pub event_id: Uuid,
    pub order_id: String,
    /// Amount in the smallest currency unit.
    pub amount: i64,
    pub status: String,
    pub currency: String,
    pub event_time: DateTime<Utc>,
}

/// A shipping update; rows accumulate per `order_id` as status history.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct LogisticsEvent {
    pub event_id: Uuid,
    pub order_id: String,
    pub status: String,
    pub event_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn user_behavior_row_serializes_with_wire_field_names() {
        let row = UserBehaviorEvent {
            event_id: Uuid::new_v4(),
            event_type: "product_viewed".to_string(),
            user_id: Some(101),
            event_time: sample_time(),
            ingested_at: sample_time(),
            product_id: 1001,
            session_id: "sess-abc-001".to_string(),
            country: None,
            source: None,
            platform: None,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["event_type"], "product_viewed");
        assert_eq!(value["product_id"], 1001);
        assert!(value["country"].is_null());
        assert!(value.get("event_id").is_some());
        assert!(value.get("ingested_at").is_some());
    }

    #[test]
    fn nullable_fields_serialize_as_explicit_nulls() {
        let row = OrderItemEvent {
            event_id: Uuid::new_v4(),
            order_id: "INV-OI-R2".to_string(),
            product_id: "PROD-B".to_string(),
            description: None,
            quantity: 2,
            price_at_purchase: 1999,
            event_time: sample_time(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value["description"].is_null());
        assert_eq!(value["price_at_purchase"], 1999);
    }

    #[test]
    fn event_time_serializes_as_utc_instant() {
        let row = LogisticsEvent {
            event_id: Uuid::new_v4(),
            order_id: "INV-L-R1".to_string(),
            status: "picked_up".to_string(),
            event_time: sample_time(),
        };
        let value = serde_json::to_value(&row).unwrap();
        let rendered = value["event_time"].as_str().unwrap();
        assert!(rendered.starts_with("2024-06-01T10:00:00"));
    }
}
