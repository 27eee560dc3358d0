// Database connection management
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::{EventStoreError, StoreResult};

/// Database connection pool wrapper.
///
/// One pool is shared by every request; each write borrows a connection for
/// the lifetime of its transaction and returns it on commit or rollback.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new database pool from a connection string.
    pub async fn new(connection_string: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect(connection_string)
            .await
            .map_err(|e| EventStoreError::ConnectionFailed(e.to_string()))?;

        info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Create a pool that connects on first use instead of eagerly.
    ///
    /// Used by tests and tooling that exercise paths which never reach the
    /// database.
    pub fn new_lazy(connection_string: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(connection_string)
            .map_err(|e| EventStoreError::ConnectionFailed(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Get the underlying `PgPool`.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check if the pool is healthy.
    pub async fn is_healthy(&self) -> bool {
        match sqlx::query("SELECT 1").fetch_one(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
                false
            }
        }
    }

    /// Close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}
