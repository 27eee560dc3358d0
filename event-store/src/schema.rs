//! Schema bootstrap for the six event tables.
//!
//! Ran once at startup. All statements are idempotent, so restarting against
//! an existing database is a no-op.

use sqlx::PgPool;
use tracing::info;

use crate::error::StoreResult;

const DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS user_behavior_events (
        event_id UUID PRIMARY KEY,
        event_type TEXT NOT NULL,
        user_id BIGINT,
        event_time TIMESTAMPTZ NOT NULL,
        ingested_at TIMESTAMPTZ NOT NULL,
        product_id BIGINT NOT NULL,
        session_id TEXT NOT NULL,
        country TEXT,
        source TEXT,
        platform TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_user_behavior_user_time
     ON user_behavior_events (user_id, event_time)",
    "CREATE INDEX IF NOT EXISTS idx_user_behavior_product_time
     ON user_behavior_events (product_id, event_time)",
    r#"
    CREATE TABLE IF NOT EXISTS cart_events (
        event_id UUID PRIMARY KEY,
        correlation_id TEXT NOT NULL,
        user_id BIGINT,
        product_id BIGINT NOT NULL,
        action TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        event_time TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_cart_user_time
     ON cart_events (user_id, event_time)",
    r#"
    CREATE TABLE IF NOT EXISTS order_events (
        event_id UUID PRIMARY KEY,
        order_id TEXT NOT NULL UNIQUE,
        user_id BIGINT,
        status TEXT NOT NULL,
        country TEXT,
        event_time TIMESTAMPTZ NOT NULL,
        ingested_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_item_events (
        event_id UUID PRIMARY KEY,
        order_id TEXT NOT NULL,
        product_id TEXT NOT NULL,
        description TEXT,
        quantity INTEGER NOT NULL,
        price_at_purchase BIGINT NOT NULL,
        event_time TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_order_item_order
     ON order_item_events (order_id)",
    r#"
    CREATE TABLE IF NOT EXISTS payment_events (
        event_id UUID PRIMARY KEY,
        order_id TEXT NOT NULL,
        amount BIGINT NOT NULL,
        status TEXT NOT NULL,
        currency TEXT NOT NULL,
        event_time TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_payment_order
     ON payment_events (order_id)",
    r#"
    CREATE TABLE IF NOT EXISTS logistics_events (
        event_id UUID PRIMARY KEY,
        order_id TEXT NOT NULL,
        status TEXT NOT NULL,
        event_time TIMESTAMPTZ NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_logistics_order
     ON logistics_events (order_id)",
];

/// Create the event tables and indexes if they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> StoreResult<()> {
    for statement in DDL {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Event tables ensured");
    Ok(())
}
