//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Only presentation is configurable. The fee rules (early bird at 10 seats or
//! fewer, 11 seats when none is given) are fixed.
//!
//! | variable               | default | meaning          |
//! |------------------------|---------|------------------|
//! | `ENROLL_OUTPUT_FORMAT` | text    | `text` or `json` |

use std::env;

use clap::ValueEnum;

pub const OUTPUT_FORMAT_VAR: &str = "ENROLL_OUTPUT_FORMAT";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fee on one line, early-bird notice on the next
    #[default]
    Text,

    /// `FeeQuote` or `FeeRejection` as JSON
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Output format when `--format` is not given
    pub output_format: OutputFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = match lookup(OUTPUT_FORMAT_VAR) {
            Some(raw) => OutputFormat::from_str(raw.trim(), true)
                .map_err(|_| ConfigError::InvalidValue(OUTPUT_FORMAT_VAR.to_string()))?,
            None => OutputFormat::default(),
        };

        Ok(CliConfig { output_format })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
