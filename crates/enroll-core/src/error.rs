//! # Error Types
//!
//! Domain-specific error types for enroll-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  enroll-core errors (this file)                                        │
//! │  └── FeeError       - Fee input validation failures                    │
//! │                                                                         │
//! │  enroll-cli errors (app)                                               │
//! │  └── ConfigError    - Bad environment configuration                    │
//! │                                                                         │
//! │  Flow: FeeError → FeeRejection { code, message } → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to exactly one fixed user-facing message
//! 4. Errors are returned, never thrown: callers branch on the variant

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Fee Error
// =============================================================================

/// Validation failures for a fee request.
///
/// The variants are listed in the order they are checked. When several
/// inputs are invalid at once, only the earliest failing check is reported.
///
/// ## Check Order
/// ```text
/// price / discount / seats
///      │
///      ▼
/// 1. all finite numbers? ── no ──► NonNumericInput
///      │
///      ▼
/// 2. price > 0?          ── no ──► NonPositivePrice
///      │
///      ▼
/// 3. 0 <= discount <= 100? ─ no ─► DiscountOutOfRange
///      │
///      ▼
/// 4. seats >= 0?         ── no ──► NegativeSeatCount
///      │
///      ▼
///   FeeQuote
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FeeError {
    /// Price, discount, or seat count is not a well-formed finite number.
    ///
    /// ## When This Occurs
    /// - A value is NaN or infinite
    /// - Text input such as `"free"` could not be parsed
    #[error("Price, discount, and seat count must be numbers")]
    NonNumericInput,

    /// Price is zero or negative.
    #[error("Price must be positive")]
    NonPositivePrice,

    /// Discount percentage is outside `[0, 100]`.
    #[error("Discount must be between 0 and 100")]
    DiscountOutOfRange,

    /// Seat count is below zero.
    #[error("Seat count cannot be negative")]
    NegativeSeatCount,
}

impl FeeError {
    /// Returns the machine-readable code for this failure.
    pub const fn code(&self) -> FeeErrorCode {
        match self {
            FeeError::NonNumericInput => FeeErrorCode::NonNumericInput,
            FeeError::NonPositivePrice => FeeErrorCode::NonPositivePrice,
            FeeError::DiscountOutOfRange => FeeErrorCode::DiscountOutOfRange,
            FeeError::NegativeSeatCount => FeeErrorCode::NegativeSeatCount,
        }
    }

    /// Returns the serializable `{ code, message }` view of this failure.
    ///
    /// ## Example
    /// ```rust
    /// use enroll_core::{FeeError, FeeErrorCode};
    ///
    /// let rejection = FeeError::NonPositivePrice.rejection();
    /// assert_eq!(rejection.code, FeeErrorCode::NonPositivePrice);
    /// assert_eq!(rejection.message, "Price must be positive");
    /// ```
    pub fn rejection(&self) -> FeeRejection {
        FeeRejection {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

// =============================================================================
// Wire Representation
// =============================================================================

/// Error codes for callers that branch on failures programmatically.
///
/// ## Usage in Frontend
/// ```typescript
/// switch (rejection.code) {
///   case 'DISCOUNT_OUT_OF_RANGE':
///     highlightField('discount');
///     break;
///   default:
///     showError(rejection.message);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeErrorCode {
    NonNumericInput,
    NonPositivePrice,
    DiscountOutOfRange,
    NegativeSeatCount,
}

/// What a JSON caller receives when a fee request is rejected.
///
/// ```json
/// {
///   "code": "NON_POSITIVE_PRICE",
///   "message": "Price must be positive"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeeRejection {
    /// Machine-readable error code
    pub code: FeeErrorCode,

    /// Human-readable message for display
    pub message: String,
}

impl From<FeeError> for FeeRejection {
    fn from(err: FeeError) -> Self {
        err.rejection()
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with FeeError.
pub type FeeResult<T> = Result<T, FeeError>;

// =============================================================================
// Unit Tests
// =============================================================================
