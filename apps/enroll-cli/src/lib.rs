//! # Enroll CLI Library
//!
//! Command-line front end for `enroll-core`.
//!
//! ## Module Organization
//! ```text
//! enroll_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── Environment configuration
//! ├── report.rs       ◄─── Text / JSON rendering
//! └── self_test.rs    ◄─── Reference scenario harness
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr, `RUST_LOG` aware)
//! 3. Load configuration from the environment
//! 4. Run the command, writing results to stdout

pub mod cli;
pub mod config;
pub mod report;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use enroll_core::{FeeCalculator, FeeRequest};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, QuoteArgs};
use crate::config::CliConfig;

/// Runs the CLI and returns the process exit code.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing();

    let config = CliConfig::load().context("failed to load configuration")?;
    debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Quote(args) => run_quote(&args, &config, &mut out),
        Command::SelfTest => run_self_test(&mut out),
    }
}

/// Computes one fee with the standard rules and writes the rendered result.
///
/// Exit code is 1 when the request is rejected.
pub fn run_quote<W: Write>(
    args: &QuoteArgs,
    config: &CliConfig,
    out: &mut W,
) -> anyhow::Result<ExitCode> {
    let calculator = FeeCalculator::new();
    let outcome = FeeRequest::parse(&args.price, &args.discount, args.seats.as_deref())
        .and_then(|request| calculator.quote(&request));

    match &outcome {
        Ok(quote) => info!(
            fee = quote.fee,
            early_bird = quote.early_bird_eligible,
            "Fee computed"
        ),
        Err(err) => warn!(code = ?err.code(), "Fee request rejected: {err}"),
    }

    let format = args.format.unwrap_or(config.output_format);
    let rendered = report::render(&outcome, format).context("failed to render result")?;
    writeln!(out, "{rendered}")?;

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Runs the reference scenarios and writes one line per scenario.
pub fn run_self_test<W: Write>(out: &mut W) -> anyhow::Result<ExitCode> {
    let report = self_test::run_all(&self_test::SCENARIOS);
    for result in &report.results {
        writeln!(out, "{}", result.summary_line())?;
    }

    info!(
        passed = report.passed(),
        total = report.results.len(),
        "Self-test finished"
    );

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=enroll_cli=trace` - Show trace for this crate only
/// - Default: WARN, INFO for this crate
///
/// Logs go to stderr so stdout carries only results.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,enroll_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::lookup_from;
    use crate::config::OutputFormat;

    fn quote_args(price: &str, discount: &str, seats: Option<&str>) -> QuoteArgs {
        QuoteArgs {
            price: price.to_string(),
            discount: discount.to_string(),
            seats: seats.map(str::to_string),
            format: None,
        }
    }

    fn run_to_string(args: &QuoteArgs, config: &CliConfig) -> (String, ExitCode) {
        let mut out = Vec::new();
        let code = run_quote(args, config, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), code)
    }

    #[test]
    fn test_quote_text_output() {
        let config = CliConfig::default();

        let (out, code) = run_to_string(&quote_args("500", "10", Some("5")), &config);
        assert_eq!(out, "450\nEligible for Early Bird Bonus!\n");
        assert_eq!(code, ExitCode::SUCCESS);

        let (out, code) = run_to_string(&quote_args("100", "20", None), &config);
        assert_eq!(out, "80\n");
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_quote_rejection_exit_code() {
        let (out, code) = run_to_string(&quote_args("free", "10", None), &CliConfig::default());
        assert_eq!(out, "Error: Price, discount, and seat count must be numbers\n");
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[test]
    fn test_quote_json_from_config_and_flag() {
        let config = CliConfig {
            output_format: OutputFormat::Json,
        };
        let (out, _) = run_to_string(&quote_args("-50", "10", None), &config);
        assert_eq!(
            out,
            "{\"code\":\"NON_POSITIVE_PRICE\",\"message\":\"Price must be positive\"}\n"
        );

        let mut args = quote_args("100", "20", None);
        args.format = Some(OutputFormat::Text);
        let (out, _) = run_to_string(&args, &config);
        assert_eq!(out, "80\n");
    }

    #[test]
    fn test_environment_cannot_change_eligibility() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("ENROLL_EARLY_BIRD_THRESHOLD", "1000"),
            ("ENROLL_DEFAULT_SEAT_COUNT", "0"),
        ]))
        .unwrap();

        let (out, _) = run_to_string(&quote_args("100", "20", Some("500")), &config);
        assert_eq!(out, "80\n");

        let (out, _) = run_to_string(&quote_args("100", "20", None), &config);
        assert_eq!(out, "80\n");

        let (out, _) = run_to_string(&quote_args("100", "20", Some("10")), &config);
        assert_eq!(out, "80\nEligible for Early Bird Bonus!\n");
    }

    #[test]
    fn test_self_test_passes() {
        let mut out = Vec::new();
        let code = run_self_test(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out.matches(": PASS |").count(), 6);
        assert!(!out.contains("FAIL"));
    }
}
