//! Event ingestion repository.
//!
//! Each insert runs inside its own transaction: the row identity and, where
//! the table carries one, the ingestion timestamp are assigned here exactly
//! once, the `INSERT ... RETURNING` re-reads the complete row, and the
//! transaction commits before the row is handed back. Dropping the
//! transaction on any error path rolls the write back.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::{
    CartEvent, LogisticsEvent, OrderEvent, OrderItemEvent, PaymentEvent, UserBehaviorEvent,
};

/// Repository for event writes and read-back queries.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one user-behavior row and return it with its generated fields.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_user_behavior(
        &self,
        event_type: &str,
        user_id: Option<i64>,
        event_time: DateTime<Utc>,
        product_id: i64,
        session_id: &str,
        country: Option<&str>,
        source: Option<&str>,
        platform: Option<&str>,
    ) -> StoreResult<UserBehaviorEvent> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, UserBehaviorEvent>(
            r#"
            INSERT INTO user_behavior_events (
                event_id, event_type, user_id, event_time, ingested_at,
                product_id, session_id, country, source, platform
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING event_id, event_type, user_id, event_time, ingested_at,
                      product_id, session_id, country, source, platform
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(event_type)
        .bind(user_id)
        .bind(event_time)
        .bind(Utc::now())
        .bind(product_id)
        .bind(session_id)
        .bind(country)
        .bind(source)
        .bind(platform)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(event)
    }

    /// List user-behavior rows, oldest ingested first, capped at `limit`.
    ///
    /// The ordering is only required to be stable across repeated calls.
    pub async fn list_user_behavior(&self, limit: i64) -> StoreResult<Vec<UserBehaviorEvent>> {
        let events = sqlx::query_as::<_, UserBehaviorEvent>(
            r#"
            SELECT event_id, event_type, user_id, event_time, ingested_at,
                   product_id, session_id, country, source, platform
            FROM user_behavior_events
            ORDER BY ingested_at ASC, event_id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Insert one cart row and return it with its generated identity.
    pub async fn insert_cart(
        &self,
        correlation_id: &str,
        user_id: Option<i64>,
        product_id: i64,
        action: &str,
        quantity: i32,
        event_time: DateTime<Utc>,
    ) -> StoreResult<CartEvent> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, CartEvent>(
            r#"
            INSERT INTO cart_events (
                event_id, correlation_id, user_id, product_id, action, quantity, event_time
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING event_id, correlation_id, user_id, product_id, action, quantity, event_time
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(correlation_id)
        .bind(user_id)
        .bind(product_id)
        .bind(action)
        .bind(quantity)
        .bind(event_time)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(event)
    }

    /// Insert one order header row.
    ///
    /// `order_id` carries a store-level unique index; a duplicate surfaces as
    /// `EventStoreError::UniqueViolation` so callers can answer with a
    /// conflict instead of an opaque server error.
    pub async fn insert_order(
        &self,
        order_id: &str,
        user_id: Option<i64>,
        status: &str,
        country: Option<&str>,
        event_time: DateTime<Utc>,
    ) -> StoreResult<OrderEvent> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, OrderEvent>(
            r#"
            INSERT INTO order_events (
                event_id, order_id, user_id, status, country, event_time, ingested_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING event_id, order_id, user_id, status, country, event_time, ingested_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(order_id)
        .bind(user_id)
        .bind(status)
        .bind(country)
        .bind(event_time)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(event)
    }

    /// Insert one order line item. Many items may share one `order_id`.
    pub async fn insert_order_item(
        &self,
        order_id: &str,
        product_id: &str,
        description: Option<&str>,
        quantity: i32,
        price_at_purchase: i64,
        event_time: DateTime<Utc>,
    ) -> StoreResult<OrderItemEvent> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, OrderItemEvent>(
            r#"
            INSERT INTO order_item_events (
                event_id, order_id, product_id, description, quantity,
                price_at_purchase, event_time
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING event_id, order_id, product_id, description, quantity,
                      price_at_purchase, event_time
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(order_id)
        .bind(product_id)
        .bind(description)
        .bind(quantity)
        .bind(price_at_purchase)
        .bind(event_time)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(event)
    }

    /// Insert one payment row. Many payments may share one `order_id`.
    pub async fn insert_payment(
        &self,
        order_id: &str,
        amount: i64,
        status: &str,
        currency: &str,
        event_time: DateTime<Utc>,
    ) -> StoreResult<PaymentEvent> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, PaymentEvent>(
            r#"
            INSERT INTO payment_events (
                event_id, order_id, amount, status, currency, event_time
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING event_id, order_id, amount, status, currency, event_time
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(order_id)
        .bind(amount)
        .bind(status)
        .bind(currency)
        .bind(event_time)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(event)
    }

    /// Insert one logistics row. Rows accumulate per `order_id` over time.
    pub async fn insert_logistics(
        &self,
        order_id: &str,
        status: &str,
        event_time: DateTime<Utc>,
    ) -> StoreResult<LogisticsEvent> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, LogisticsEvent>(
            r#"
            INSERT INTO logistics_events (event_id, order_id, status, event_time)
            VALUES ($1, $2, $3, $4)
            RETURNING event_id, order_id, status, event_time
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(order_id)
        .bind(status)
        .bind(event_time)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(event)
    }
}
