//! Sweeps over geometrically increasing replicate counts.
//!
//! Run `i` of a sweep draws `base × multiplier^i` samples, so each report
//! row trades roughly an order of magnitude more runtime for precision. The
//! driver emits one header and then one row per run through a
//! [`ReportSink`].

use tracing::debug;

use super::error::SimulationError;
use super::model::TerminalPriceModel;
use super::run::{RunResult, SimulationRun};
use super::strategy::SamplingStrategy;
use super::timing::Clock;
use crate::rng::NormalSource;

/// Default growth factor between consecutive runs.
pub const DEFAULT_REPLICATE_MULTIPLIER: u64 = 10;

/// Destination for sweep report tables.
///
/// The driver calls `begin_table` once per sweep (the sink writes the label
/// and the seven-column header), then `write_row` once per run in increasing
/// replicate order, then `end_table`.
pub trait ReportSink {
    /// Error raised by the underlying writer.
    type Error: std::error::Error + 'static;

    /// Starts the table for `strategy`.
    fn begin_table(&mut self, strategy: SamplingStrategy) -> Result<(), Self::Error>;

    /// Writes one run.
    fn write_row(&mut self, result: &RunResult) -> Result<(), Self::Error>;

    /// Finishes the current table.
    fn end_table(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Sweep failure: either the configuration or the report sink.
#[derive(Debug, thiserror::Error)]
pub enum SweepError<E: std::error::Error + 'static> {
    /// Invalid sweep or run configuration.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// The report sink failed to write.
    #[error("Report sink error: {0}")]
    Sink(#[source] E),
}

/// Validated sweep configuration.
///
/// Use [`SweepConfig::builder`] to construct instances. Validation checks
/// that the largest replicate count of the sweep fits in a `u64`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{SamplingStrategy, SweepConfig};
///
/// let config = SweepConfig::builder(SamplingStrategy::Direct)
///     .run_count(4)
///     .base_replicates(1_000)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.replicate_counts(), vec![1_000, 10_000, 100_000, 1_000_000]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    strategy: SamplingStrategy,
    run_count: u32,
    base_replicates: u64,
    multiplier: u64,
}

impl SweepConfig {
    /// Creates a new configuration builder for `strategy`.
    #[inline]
    pub fn builder(strategy: SamplingStrategy) -> SweepConfigBuilder {
        SweepConfigBuilder {
            strategy,
            run_count: None,
            base_replicates: None,
            multiplier: DEFAULT_REPLICATE_MULTIPLIER,
        }
    }

    /// Returns the sampling strategy.
    #[inline]
    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// Returns the number of runs.
    #[inline]
    pub fn run_count(&self) -> u32 {
        self.run_count
    }

    /// Returns the replicate count of the first run.
    #[inline]
    pub fn base_replicates(&self) -> u64 {
        self.base_replicates
    }

    /// Returns the growth factor between runs.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if:
    /// - `run_count` is 0
    /// - `base_replicates` is 0
    /// - `multiplier` is less than 2
    /// - the last run's replicate count overflows `u64`
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.run_count == 0 {
            return Err(SimulationError::InvalidRunCount(self.run_count));
        }
        if self.base_replicates == 0 {
            return Err(SimulationError::InvalidReplicateCount(self.base_replicates));
        }
        if self.multiplier < 2 {
            return Err(SimulationError::InvalidMultiplier(self.multiplier));
        }
        checked_replicate_count(self.base_replicates, self.multiplier, self.run_count - 1)?;
        Ok(())
    }

    /// Replicate count of run `run_index`: `base × multiplier^run_index`.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::ReplicateOverflow` if the product does not
    /// fit in a `u64`. Indices within `0..run_count` never overflow for a
    /// validated configuration.
    pub fn replicate_count(&self, run_index: u32) -> Result<u64, SimulationError> {
        checked_replicate_count(self.base_replicates, self.multiplier, run_index)
    }

    /// Replicate counts of every run, in execution order.
    pub fn replicate_counts(&self) -> Vec<u64> {
        let mut counts = Vec::with_capacity(self.run_count as usize);
        let mut count = self.base_replicates;
        for run_index in 0..self.run_count {
            counts.push(count);
            if run_index + 1 < self.run_count {
                count = count.saturating_mul(self.multiplier);
            }
        }
        counts
    }
}

fn checked_replicate_count(base: u64, multiplier: u64, run_index: u32) -> Result<u64, SimulationError> {
    multiplier
        .checked_pow(run_index)
        .and_then(|factor| base.checked_mul(factor))
        .ok_or(SimulationError::ReplicateOverflow {
            run_index,
            base,
            multiplier,
        })
}

/// Builder for [`SweepConfig`].
#[derive(Clone, Debug)]
pub struct SweepConfigBuilder {
    strategy: SamplingStrategy,
    run_count: Option<u32>,
    base_replicates: Option<u64>,
    multiplier: u64,
}

impl SweepConfigBuilder {
    /// Sets the number of runs.
    #[inline]
    pub fn run_count(mut self, run_count: u32) -> Self {
        self.run_count = Some(run_count);
        self
    }

    /// Sets the replicate count of the first run.
    #[inline]
    pub fn base_replicates(mut self, base_replicates: u64) -> Self {
        self.base_replicates = Some(base_replicates);
        self
    }

    /// Sets the growth factor between runs (default 10).
    #[inline]
    pub fn multiplier(mut self, multiplier: u64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if a required field is missing or the
    /// configuration fails [`SweepConfig::validate`].
    pub fn build(self) -> Result<SweepConfig, SimulationError> {
        let run_count = self.run_count.ok_or(SimulationError::InvalidParameter {
            name: "run_count",
            value: "must be specified".to_string(),
        })?;

        let base_replicates = self
            .base_replicates
            .ok_or(SimulationError::InvalidParameter {
                name: "base_replicates",
                value: "must be specified".to_string(),
            })?;

        let config = SweepConfig {
            strategy: self.strategy,
            run_count,
            base_replicates,
            multiplier: self.multiplier,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Executes sweeps against one model and clock.
///
/// The generator is passed into [`SweepDriver::run`] by `&mut`, so running
/// several sweeps in sequence continues a single random stream.
pub struct SweepDriver<'a, C: Clock + ?Sized> {
    model: &'a TerminalPriceModel,
    clock: &'a C,
}

impl<'a, C: Clock + ?Sized> SweepDriver<'a, C> {
    /// Creates a driver for `model`, timing runs with `clock`.
    pub fn new(model: &'a TerminalPriceModel, clock: &'a C) -> Self {
        Self { model, clock }
    }

    /// Runs every configured simulation in increasing replicate order.
    ///
    /// Emits the table header, then one row per run as it completes, and
    /// returns all results.
    pub fn run<R, S>(
        &self,
        config: &SweepConfig,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<Vec<RunResult>, SweepError<S::Error>>
    where
        R: NormalSource + ?Sized,
        S: ReportSink + ?Sized,
    {
        config.validate()?;

        let strategy = config.strategy();
        sink.begin_table(strategy).map_err(SweepError::Sink)?;

        let mut results = Vec::with_capacity(config.run_count() as usize);
        for run_index in 0..config.run_count() {
            let replicates = config.replicate_count(run_index)?;
            let result = SimulationRun::new(strategy, replicates)?.execute(self.model, rng, self.clock)?;

            debug!(
                strategy = %strategy,
                run_index,
                replicates,
                price = result.estimated_price,
                std_error = result.standard_error,
                elapsed_seconds = result.elapsed_seconds,
                "Simulation run complete"
            );

            sink.write_row(&result).map_err(SweepError::Sink)?;
            results.push(result);
        }

        sink.end_table().map_err(SweepError::Sink)?;
        Ok(results)
    }
}
