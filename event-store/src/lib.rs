//! Postgres persistence layer for ShopPulse event ingestion.
//!
//! Every inbound event becomes exactly one row in a dedicated table. The
//! repository assigns the row identity and the server-side ingestion
//! timestamp at insert time, commits, and hands the complete row back so the
//! HTTP layer can mirror it to the caller.

pub mod connection;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::DatabasePool;
pub use error::{EventStoreError, StoreResult};
pub use models::{
    CartEvent, LogisticsEvent, OrderEvent, OrderItemEvent, PaymentEvent, UserBehaviorEvent,
};
pub use repository::EventRepository;
pub use schema::ensure_schema;
