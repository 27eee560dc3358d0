use thiserror::Error;

/// SQLSTATE code Postgres reports for unique-constraint violations.
const UNIQUE_VIOLATION_CODE: &str = "23505";

#[derive(Error, Debug)]
pub enum EventStoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for EventStoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION_CODE) {
                return EventStoreError::UniqueViolation(db_err.message().to_string());
            }
        }
        EventStoreError::Sqlx(err)
    }
}

impl EventStoreError {
    /// True when the write lost to a store-level uniqueness constraint, as
    /// opposed to an unclassified persistence fault.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, EventStoreError::UniqueViolation(_))
    }
}

pub type StoreResult<T> = Result<T, EventStoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_is_not_a_unique_violation() {
        let err = EventStoreError::from(sqlx::Error::RowNotFound);
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn unique_violation_message_is_preserved() {
        let err = EventStoreError::UniqueViolation("order_events_order_id_key".to_string());
        assert!(err.is_unique_violation());
        assert!(err.to_string().contains("order_events_order_id_key"));
    }
}
