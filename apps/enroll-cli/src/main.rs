//! # Enroll Fee Entry Point
//!
//! ```bash
//! # Fee with the default seat count (11)
//! enroll-fee quote 100 20
//!
//! # Early-bird seat, JSON output
//! enroll-fee quote 500 10 --seats 5 --format json
//!
//! # Reference scenarios
//! enroll-fee self-test
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    enroll_cli::run()
}
