//! # Validation Module
//!
//! Input checks that run before any fee is computed.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fee Input Validation                               │
//! │                                                                         │
//! │  1. validate_numeric      all three are finite numbers                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. validate_price        price > 0                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. validate_discount     0 <= discount <= 100                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  4. validate_seat_count   seats >= 0                                   │
//! │                                                                         │
//! │  The first failing check wins. Later checks never run.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checks 2-4 assume check 1 already passed. Called on their own with NaN
//! they may accept the value, since every comparison with NaN is false.
//!
//! ## Usage
//! ```rust
//! use enroll_core::validation::validate_inputs;
//! use enroll_core::FeeError;
//!
//! assert!(validate_inputs(100.0, 20.0, 11.0).is_ok());
//! assert_eq!(validate_inputs(-50.0, 150.0, -1.0), Err(FeeError::NonPositivePrice));
//! ```

use crate::error::{FeeError, FeeResult};
use crate::types::{FeePolicy, FeeRequest};
use crate::MAX_DISCOUNT_PERCENT;

/// Result type for validation operations.
pub type ValidationResult<T> = FeeResult<T>;

// =============================================================================
// Individual Checks
// =============================================================================

/// Rejects NaN and infinite values in any of the three inputs.
pub fn validate_numeric(
    price: f64,
    discount_percent: f64,
    seat_count: f64,
) -> ValidationResult<()> {
    if !(price.is_finite() && discount_percent.is_finite() && seat_count.is_finite()) {
        return Err(FeeError::NonNumericInput);
    }

    Ok(())
}

/// Price must be strictly greater than zero.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price <= 0.0 {
        return Err(FeeError::NonPositivePrice);
    }

    Ok(())
}

/// Discount must lie in the closed interval `[0, 100]`.
///
/// ## Example
/// ```rust
/// use enroll_core::validation::validate_discount;
///
/// assert!(validate_discount(0.0).is_ok());
/// assert!(validate_discount(100.0).is_ok());
/// assert!(validate_discount(100.5).is_err());
/// assert!(validate_discount(-1.0).is_err());
/// ```
pub fn validate_discount(discount_percent: f64) -> ValidationResult<()> {
    if !(0.0..=MAX_DISCOUNT_PERCENT).contains(&discount_percent) {
        return Err(FeeError::DiscountOutOfRange);
    }

    Ok(())
}

/// Seat count may be zero but never negative.
pub fn validate_seat_count(seat_count: f64) -> ValidationResult<()> {
    if seat_count < 0.0 {
        return Err(FeeError::NegativeSeatCount);
    }

    Ok(())
}

// =============================================================================
// Combined Checks
// =============================================================================

/// Runs every check in order and reports the first failure.
pub fn validate_inputs(
    price: f64,
    discount_percent: f64,
    seat_count: f64,
) -> ValidationResult<()> {
    validate_numeric(price, discount_percent, seat_count)?;
    validate_price(price)?;
    validate_discount(discount_percent)?;
    validate_seat_count(seat_count)?;

    Ok(())
}

/// Validates a request, filling a missing seat count from the standard policy.
///
/// ## Example
/// ```rust
/// use enroll_core::validation::validate_request;
/// use enroll_core::{FeeError, FeeRequest};
///
/// assert!(validate_request(&FeeRequest::new(100.0, 20.0)).is_ok());
/// assert_eq!(
///     validate_request(&FeeRequest::new(100.0, 150.0)),
///     Err(FeeError::DiscountOutOfRange)
/// );
/// ```
pub fn validate_request(request: &FeeRequest) -> ValidationResult<()> {
    let seat_count = FeePolicy::STANDARD.seat_count_for(request);
    validate_inputs(request.price, request.discount_percent, seat_count)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_numeric() {
        assert!(validate_numeric(1.0, 0.0, 0.0).is_ok());
        assert_eq!(validate_numeric(f64::NAN, 0.0, 0.0), Err(FeeError::NonNumericInput));
        assert_eq!(validate_numeric(1.0, f64::NAN, 0.0), Err(FeeError::NonNumericInput));
        assert_eq!(validate_numeric(1.0, 0.0, f64::NAN), Err(FeeError::NonNumericInput));
        assert_eq!(
            validate_numeric(f64::INFINITY, 0.0, 0.0),
            Err(FeeError::NonNumericInput)
        );
        assert_eq!(
            validate_numeric(1.0, 0.0, f64::NEG_INFINITY),
            Err(FeeError::NonNumericInput)
        );
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.01).is_ok());
        assert!(validate_price(500.0).is_ok());
        assert_eq!(validate_price(0.0), Err(FeeError::NonPositivePrice));
        assert_eq!(validate_price(-0.0), Err(FeeError::NonPositivePrice));
        assert_eq!(validate_price(-50.0), Err(FeeError::NonPositivePrice));
    }

    #[test]
    fn test_validate_discount_bounds_are_inclusive() {
        assert!(validate_discount(0.0).is_ok());
        assert!(validate_discount(37.5).is_ok());
        assert!(validate_discount(100.0).is_ok());
        assert_eq!(validate_discount(-0.1), Err(FeeError::DiscountOutOfRange));
        assert_eq!(validate_discount(150.0), Err(FeeError::DiscountOutOfRange));
    }

    #[test]
    fn test_validate_seat_count() {
        assert!(validate_seat_count(0.0).is_ok());
        assert!(validate_seat_count(11.0).is_ok());
        assert_eq!(validate_seat_count(-1.0), Err(FeeError::NegativeSeatCount));
    }

    #[test]
    fn test_earliest_failure_wins() {
        // Everything wrong: non-numeric beats the rest
        assert_eq!(
            validate_inputs(f64::NAN, 150.0, -1.0),
            Err(FeeError::NonNumericInput)
        );
        // NaN seat count still reported before a bad price
        assert_eq!(
            validate_inputs(-1.0, 10.0, f64::NAN),
            Err(FeeError::NonNumericInput)
        );
        assert_eq!(
            validate_inputs(-1.0, 150.0, -1.0),
            Err(FeeError::NonPositivePrice)
        );
        assert_eq!(
            validate_inputs(1.0, 150.0, -1.0),
            Err(FeeError::DiscountOutOfRange)
        );
        assert_eq!(
            validate_inputs(1.0, 50.0, -1.0),
            Err(FeeError::NegativeSeatCount)
        );
    }

    #[test]
    fn test_validate_request_uses_default_seat_count() {
        assert!(validate_request(&FeeRequest::new(200.0, 0.0)).is_ok());
        assert_eq!(
            validate_request(&FeeRequest::new(200.0, 0.0).with_seat_count(-3.0)),
            Err(FeeError::NegativeSeatCount)
        );
    }
}
