//! # Fee Module
//!
//! The fee calculator: validation, discount arithmetic, early-bird flag.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UNROUNDED RESULTS                                                      │
//! │                                                                         │
//! │  fee = price - (price * discount / 100)                                │
//! │                                                                         │
//! │  The core returns the raw f64. It never rounds to cents:              │
//! │    99.99 at 15% → 84.9915  (core)                                      │
//! │                 → $84.99   (caller, for display)                       │
//! │                                                                         │
//! │  Rounding is presentation. Keep it out of business logic.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use enroll_core::fee::compute_fee;
//!
//! let quote = compute_fee(500.0, 10.0, 5.0).unwrap();
//! assert_eq!(quote.fee, 450.0);
//! assert!(quote.early_bird_eligible);
//!
//! // Seat count omitted: defaults to 11, no early bird
//! let quote = compute_fee(100.0, 20.0, None).unwrap();
//! assert_eq!(quote.fee, 80.0);
//! assert!(!quote.early_bird_eligible);
//! ```

use crate::error::FeeResult;
use crate::types::{FeePolicy, FeeQuote, FeeRequest};
use crate::validation::validate_inputs;

// =============================================================================
// Fee Calculator
// =============================================================================

/// Computes enrollment fees under a [`FeePolicy`].
///
/// The calculator holds no state beyond its policy, so it is `Copy` and can
/// be shared freely across threads.
///
/// ## User Workflow
/// ```text
/// Enrollment form: price 500, discount 10%, seat 5
///      │
///      ▼
/// FeeCalculator::quote ← THIS TYPE
///      │
///      ├── invalid input? → Err(FeeError)   "Price must be positive"
///      │
///      └── OK → FeeQuote { fee: 450.0, early_bird_eligible: true }
///      │
///      ▼
/// Caller renders "450" + "Eligible for Early Bird Bonus!"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeeCalculator {
    policy: FeePolicy,
}

impl FeeCalculator {
    /// Creates a calculator with the standard policy.
    pub const fn new() -> Self {
        FeeCalculator {
            policy: FeePolicy::STANDARD,
        }
    }

    /// Creates a calculator with a custom policy.
    pub const fn with_policy(policy: FeePolicy) -> Self {
        FeeCalculator { policy }
    }

    /// Validates a request and computes its fee.
    pub fn quote(&self, request: &FeeRequest) -> FeeResult<FeeQuote> {
        let seat_count = self.policy.seat_count_for(request);
        validate_inputs(request.price, request.discount_percent, seat_count)?;

        Ok(FeeQuote {
            fee: discounted_price(request.price, request.discount_percent),
            early_bird_eligible: self.policy.is_early_bird(seat_count),
        })
    }

    /// Same as [`quote`](Self::quote) with the fields passed directly.
    ///
    /// `seat_count` accepts either a number or `None` for the default.
    pub fn compute(
        &self,
        price: f64,
        discount_percent: f64,
        seat_count: impl Into<Option<f64>>,
    ) -> FeeResult<FeeQuote> {
        let request = FeeRequest {
            price,
            discount_percent,
            seat_count: seat_count.into(),
        };
        self.quote(&request)
    }
}

/// Computes a fee with the standard policy.
///
/// Pass `None` as `seat_count` to use the default of 11 seats.
///
/// ## Example
/// ```rust
/// use enroll_core::{compute_fee, FeeError};
///
/// assert_eq!(compute_fee(-50.0, 10.0, None), Err(FeeError::NonPositivePrice));
/// assert_eq!(compute_fee(100.0, 150.0, None), Err(FeeError::DiscountOutOfRange));
/// ```
pub fn compute_fee(
    price: f64,
    discount_percent: f64,
    seat_count: impl Into<Option<f64>>,
) -> FeeResult<FeeQuote> {
    FeeCalculator::new().compute(price, discount_percent, seat_count)
}

#[inline]
fn discounted_price(price: f64, discount_percent: f64) -> f64 {
    price - (price * discount_percent / 100.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
