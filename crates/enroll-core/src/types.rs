//! # Domain Types
//!
//! Value types that flow through a single fee calculation.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │   FeeRequest    │   │    FeeQuote     │   │     FeePolicy       │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  price          │──►│  fee            │   │  early_bird_        │   │
//! │  │  discount_pct   │   │  early_bird_    │   │    threshold (10)   │   │
//! │  │  seat_count?    │   │    eligible     │   │  default_seat_      │   │
//! │  └─────────────────┘   └─────────────────┘   │    count (11)       │   │
//! │                                              └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these types have identity or lifecycle. Each one lives for the
//! duration of a single call.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{FeeError, FeeResult};
use crate::{DEFAULT_SEAT_COUNT, EARLY_BIRD_SEAT_THRESHOLD};

// =============================================================================
// Fee Request
// =============================================================================

/// The three inputs of a fee calculation.
///
/// `seat_count` is optional. When it is `None` the calculator substitutes
/// its policy's default seat count (11 for the standard policy), which is
/// not early-bird eligible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeeRequest {
    /// Original price before discount.
    pub price: f64,

    /// Discount as a percentage, `0..=100`.
    pub discount_percent: f64,

    /// Seat count at the time of enrollment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub seat_count: Option<f64>,
}

impl FeeRequest {
    /// Creates a request that uses the default seat count.
    pub const fn new(price: f64, discount_percent: f64) -> Self {
        FeeRequest {
            price,
            discount_percent,
            seat_count: None,
        }
    }

    /// Sets an explicit seat count.
    pub const fn with_seat_count(self, seat_count: f64) -> Self {
        FeeRequest {
            seat_count: Some(seat_count),
            ..self
        }
    }

    /// Builds a request from text fields (CLI arguments, form values).
    ///
    /// Surrounding whitespace is ignored. Any field that does not parse as a
    /// number fails with [`FeeError::NonNumericInput`]; that is the first
    /// validation rule, so failing here never hides an earlier error.
    ///
    /// ## Example
    /// ```rust
    /// use enroll_core::{FeeError, FeeRequest};
    ///
    /// let request = FeeRequest::parse("500", "10", Some("5")).unwrap();
    /// assert_eq!(request.seat_count, Some(5.0));
    ///
    /// let err = FeeRequest::parse("free", "10", None).unwrap_err();
    /// assert_eq!(err, FeeError::NonNumericInput);
    /// ```
    pub fn parse(
        price: &str,
        discount_percent: &str,
        seat_count: Option<&str>,
    ) -> FeeResult<Self> {
        let request = FeeRequest {
            price: parse_number(price)?,
            discount_percent: parse_number(discount_percent)?,
            seat_count: seat_count.map(parse_number).transpose()?,
        };

        Ok(request)
    }
}

fn parse_number(text: &str) -> FeeResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| FeeError::NonNumericInput)
}

// =============================================================================
// Fee Quote
// =============================================================================

/// A successfully computed fee.
///
/// `fee` is the raw floating-point result. Rounding for display is left to
/// the caller.
///
/// ## Serialization
/// ```json
/// { "fee": 450.0, "earlyBirdEligible": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    /// Price after discount.
    pub fee: f64,

    /// Seat count was at or below the early-bird threshold.
    pub early_bird_eligible: bool,
}

// =============================================================================
// Fee Policy
// =============================================================================

/// Tunable constants of the fee rules.
///
/// `FeePolicy::default()` is the standard policy: early bird at 10 seats or
/// fewer, and 11 seats assumed when the caller gives none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePolicy {
    /// Highest seat count that still earns the early-bird flag.
    pub early_bird_threshold: f64,

    /// Seat count used when a request has none.
    pub default_seat_count: f64,
}

impl FeePolicy {
    /// Standard policy.
    pub const STANDARD: FeePolicy = FeePolicy {
        early_bird_threshold: EARLY_BIRD_SEAT_THRESHOLD,
        default_seat_count: DEFAULT_SEAT_COUNT,
    };

    /// Checks early-bird eligibility for an already validated seat count.
    ///
    /// ## Example
    /// ```rust
    /// use enroll_core::FeePolicy;
    ///
    /// let policy = FeePolicy::default();
    /// assert!(policy.is_early_bird(10.0));
    /// assert!(!policy.is_early_bird(11.0));
    /// ```
    #[inline]
    pub fn is_early_bird(&self, seat_count: f64) -> bool {
        seat_count <= self.early_bird_threshold
    }

    /// Resolves the seat count of a request against this policy.
    #[inline]
    pub fn seat_count_for(&self, request: &FeeRequest) -> f64 {
        request.seat_count.unwrap_or(self.default_seat_count)
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        FeePolicy::STANDARD
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
