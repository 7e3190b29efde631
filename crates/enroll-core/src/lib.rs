//! # enroll-core: Pure Fee Logic for Enroll
//!
//! This crate computes a discounted enrollment fee from a price, a discount
//! percentage and a seat count, and reports whether the enrollment earns the
//! early-bird bonus. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Enroll Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Callers (CLI, web handler, tests)               │   │
//! │  │    parse input ──► compute ──► render text / JSON               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ enroll-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │    fee    │  │   error   │  │ validation│  │   │
//! │  │   │FeeRequest │  │FeeCalc-   │  │ FeeError  │  │  ordered  │  │   │
//! │  │   │ FeeQuote  │  │  ulator   │  │ Rejection │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Request, quote and policy types
//! - [`fee`] - The fee calculator
//! - [`error`] - Validation failure types
//! - [`validation`] - Ordered input checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Printing, logging and config loading belong to callers
//! 3. **Errors Are Values**: Failures come back as `Err(FeeError)`, never panics
//! 4. **Structured Results**: The fee and the early-bird flag are separate fields
//!
//! ## Example Usage
//!
//! ```rust
//! use enroll_core::{compute_fee, FeeError};
//!
//! let quote = compute_fee(500.0, 10.0, 5.0).unwrap();
//! assert_eq!(quote.fee, 450.0);
//! assert!(quote.early_bird_eligible);
//!
//! let err = compute_fee(100.0, 150.0, None).unwrap_err();
//! assert_eq!(err, FeeError::DiscountOutOfRange);
//! assert_eq!(err.to_string(), "Discount must be between 0 and 100");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fee;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{FeeError, FeeErrorCode, FeeRejection, FeeResult};
pub use fee::{compute_fee, FeeCalculator};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest seat count that still qualifies for the early-bird bonus.
pub const EARLY_BIRD_SEAT_THRESHOLD: f64 = 10.0;

/// Seat count assumed when the caller does not supply one.
///
/// Deliberately one above [`EARLY_BIRD_SEAT_THRESHOLD`]: an enrollment with
/// no seat information never gets the bonus.
pub const DEFAULT_SEAT_COUNT: f64 = 11.0;

/// Upper bound of the discount percentage (inclusive).
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;
