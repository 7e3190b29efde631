//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

/// Enrollment fee calculator.
#[derive(Debug, Parser)]
#[command(name = "enroll-fee", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the discounted fee for one enrollment
    Quote(QuoteArgs),

    /// Run the reference scenarios and report PASS/FAIL
    SelfTest,
}

// Inputs are taken as text so that non-numeric values reach the fee
// validator and get its message instead of a clap parse error.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Original price
    #[arg(allow_hyphen_values = true)]
    pub price: String,

    /// Discount percentage (0-100)
    #[arg(allow_hyphen_values = true)]
    pub discount: String,

    /// Current seat count [default: 11]
    #[arg(long, allow_hyphen_values = true)]
    pub seats: Option<String>,

    /// Output format [default: ENROLL_OUTPUT_FORMAT or text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote_with_negative_values() {
        let cli = Cli::try_parse_from(["enroll-fee", "quote", "-50", "10", "--seats", "-1"])
            .unwrap();
        let Command::Quote(args) = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(args.price, "-50");
        assert_eq!(args.discount, "10");
        assert_eq!(args.seats.as_deref(), Some("-1"));
        assert_eq!(args.format, None);
    }

    #[test]
    fn test_parse_format_and_self_test() {
        let cli =
            Cli::try_parse_from(["enroll-fee", "quote", "100", "20", "--format", "json"]).unwrap();
        let Command::Quote(args) = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(args.format, Some(OutputFormat::Json));

        let cli = Cli::try_parse_from(["enroll-fee", "self-test"]).unwrap();
        assert!(matches!(cli.command, Command::SelfTest));
    }
}
