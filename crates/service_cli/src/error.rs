//! Error types for the report binary.

use pricer_pricing::mc::{SimulationError, SweepError};
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error, raised before any simulation starts
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Simulation setup error
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// IO error while writing the report
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SweepError<CliError>> for CliError {
    fn from(err: SweepError<CliError>) -> Self {
        match err {
            SweepError::Simulation(e) => CliError::Simulation(e),
            SweepError::Sink(e) => e,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
