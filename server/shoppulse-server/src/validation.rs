//! Request validation utilities for consistent validation across handlers
//!
//! This module provides a `RequestValidation` trait and helper macros to
//! centralize validation logic and ensure consistent error messages.

use crate::error::ApiError;

/// Trait for validating request payloads
///
/// Implement this trait for all create request types so every semantic
/// constraint (positivity, length caps) is checked in one place, after
/// deserialization and before any handler logic.
pub trait RequestValidation {
    /// Validates the request and returns an error if validation fails
    ///
    /// Returns `Ok(())` if validation passes, or `Err(ApiError)` with
    /// a validation error message if validation fails.
    fn validate(&self) -> Result<(), ApiError>;
}

/// Macro for validating fields with custom predicates
///
/// # Usage
///
/// ```ignore
/// validate_field!(self.quantity, self.quantity > 0, "quantity must be greater than zero");
/// ```
#[macro_export]
macro_rules! validate_field {
    ($field:expr, $predicate:expr, $message:expr) => {
        if !$predicate {
            return Err($crate::error::ApiError::validation($message));
        }
    };
}

/// Macro for validating required fields (non-empty strings)
///
/// # Usage
///
/// ```ignore
/// validate_required!(self.order_id, "order_id is required");
/// ```
#[macro_export]
macro_rules! validate_required {
    ($field:expr, $message:expr) => {
        validate_field!($field, !$field.trim().is_empty(), $message);
    };
}

/// Macro for validating string length
///
/// # Usage
///
/// ```ignore
/// validate_length!(self.currency, 1, 3, "currency must be at most 3 characters");
/// ```
#[macro_export]
macro_rules! validate_length {
    ($field:expr, $min:expr, $max:expr, $message:expr) => {
        let len = $field.len();
        validate_field!($field, len >= $min && len <= $max, $message);
    };
}

/// Macro for validating strictly-positive numeric fields
///
/// # Usage
///
/// ```ignore
/// validate_positive!(self.amount, "amount must be greater than zero");
/// ```
#[macro_export]
macro_rules! validate_positive {
    ($field:expr, $message:expr) => {
        validate_field!($field, $field > 0, $message);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    struct TestRequest {
        order_id: String,
        currency: String,
        amount: i64,
    }

    impl RequestValidation for TestRequest {
        fn validate(&self) -> Result<(), ApiError> {
            validate_required!(self.order_id, "order_id is required");
            validate_length!(self.currency, 1, 3, "currency must be at most 3 characters");
            validate_positive!(self.amount, "amount must be greater than zero");
            Ok(())
        }
    }

    fn valid_request() -> TestRequest {
        TestRequest {
            order_id: "INV-001".to_string(),
            currency: "USD".to_string(),
            amount: 4999,
        }
    }

    #[test]
    fn test_validation_success() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_order_id() {
        let request = TestRequest {
            order_id: "".to_string(),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_whitespace_only_order_id() {
        let request = TestRequest {
            order_id: "   ".to_string(),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_currency_too_long() {
        let request = TestRequest {
            currency: "DOLLARS".to_string(),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_zero_amount_rejected() {
        let request = TestRequest {
            amount: 0,
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_negative_amount_rejected() {
        let request = TestRequest {
            amount: -1,
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validation_boundary_amount_one_accepted() {
        let request = TestRequest {
            amount: 1,
            ..valid_request()
        };
        assert!(request.validate().is_ok());
    }
}
