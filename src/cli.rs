//! CLI command implementations for Mastergen.

pub(crate) mod bench;
pub(crate) mod solve;

mod output;

use clap::ValueEnum;
use mastergen::SolverConfig;
use std::path::Path;

/// Output format for the `solve` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `bench` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BenchFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// CLI error type.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<mastergen::ConfigError> for CliError {
    fn from(e: mastergen::ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<mastergen::SolveError> for CliError {
    fn from(e: mastergen::SolveError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Initialise `env_logger`; `RUST_LOG` overrides the verbosity flag.
pub(crate) fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Load a solver configuration file, or the defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<SolverConfig, CliError> {
    match path {
        Some(path) => SolverConfig::from_json_file(path).map_err(|e| {
            CliError::new(format!("Failed to load {}: {e}", path.display()))
        }),
        None => Ok(SolverConfig::default()),
    }
}

/// Use the given seed, or derive one from the clock.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    })
}
