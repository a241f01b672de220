//! Error types for the Monte Carlo estimation engine.
//!
//! All of these are configuration errors: they are raised while building a
//! [`SweepConfig`](super::SweepConfig) or a
//! [`SimulationRun`](super::SimulationRun), before any sampling starts.

use thiserror::Error;

/// Simulation configuration error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// A sweep must contain at least one run.
    #[error("Invalid run count {0}: a sweep needs at least one run")]
    InvalidRunCount(u32),

    /// Replicate counts must be at least one.
    #[error("Invalid replicate count {0}: must be at least 1")]
    InvalidReplicateCount(u64),

    /// The replicate multiplier must grow the sample size.
    #[error("Invalid replicate multiplier {0}: must be greater than 1")]
    InvalidMultiplier(u64),

    /// `base * multiplier^run_index` does not fit in a `u64`.
    #[error(
        "Replicate count overflow at run {run_index}: {base} * {multiplier}^{run_index} exceeds u64"
    )]
    ReplicateOverflow {
        /// Index of the first run whose replicate count overflows.
        run_index: u32,
        /// Base replicate count.
        base: u64,
        /// Per-run multiplier.
        multiplier: u64,
    },

    /// A run finished without ingesting any samples.
    #[error("Simulation run produced no samples")]
    EmptyRun,

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_error_display() {
        let err = SimulationError::InvalidRunCount(0);
        assert!(err.to_string().contains("Invalid run count 0"));

        let err = SimulationError::InvalidMultiplier(1);
        assert!(err.to_string().contains("must be greater than 1"));

        let err = SimulationError::ReplicateOverflow {
            run_index: 19,
            base: 1000,
            multiplier: 10,
        };
        assert_eq!(
            err.to_string(),
            "Replicate count overflow at run 19: 1000 * 10^19 exceeds u64"
        );

        let err = SimulationError::InvalidParameter {
            name: "run_count",
            value: "must be specified".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter 'run_count': must be specified");
    }
}
