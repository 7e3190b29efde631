//! # Report Rendering
//!
//! Turns structured fee results into what the user sees.
//!
//! ## Text Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Success, not early bird      80                                       │
//! │                                                                         │
//! │  Success, early bird          450                                      │
//! │                               Eligible for Early Bird Bonus!           │
//! │                                                                         │
//! │  Failure                      Error: Price must be positive            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fees are rounded to cents here, for display only. The core hands back
//! the unrounded value.

use enroll_core::{FeeError, FeeQuote, FeeResult};

use crate::config::OutputFormat;

/// Notice appended under the fee when the enrollment is early enough.
pub const EARLY_BIRD_NOTICE: &str = "Eligible for Early Bird Bonus!";

/// Rounds half away from zero to two decimal places.
///
/// ```rust
/// use enroll_cli::report::round_to_cents;
///
/// assert_eq!(round_to_cents(84.9915), 84.99);
/// assert_eq!(round_to_cents(450.0), 450.0);
/// ```
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Text rendering of a successful quote.
pub fn render_quote(quote: &FeeQuote) -> String {
    let fee = round_to_cents(quote.fee);
    if quote.early_bird_eligible {
        format!("{fee}\n{EARLY_BIRD_NOTICE}")
    } else {
        format!("{fee}")
    }
}

/// Text rendering of a rejected request.
pub fn render_error(err: &FeeError) -> String {
    format!("Error: {err}")
}

/// Text rendering of either outcome.
pub fn render_outcome(outcome: &FeeResult<FeeQuote>) -> String {
    match outcome {
        Ok(quote) => render_quote(quote),
        Err(err) => render_error(err),
    }
}

/// Renders an outcome in the requested format.
///
/// JSON output carries the unrounded fee, since JSON consumers do their
/// own formatting.
pub fn render(outcome: &FeeResult<FeeQuote>, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_outcome(outcome)),
        OutputFormat::Json => match outcome {
            Ok(quote) => serde_json::to_string(quote),
            Err(err) => serde_json::to_string(&err.rejection()),
        },
    }
}
