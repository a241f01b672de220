//! A single Monte Carlo simulation run.
//!
//! # Overview
//!
//! A [`SimulationRun`] is one (strategy, replicate count) combination. It
//! coordinates:
//! 1. Sampling (via [`SamplingStrategy::sample`] and [`TerminalPriceModel`])
//! 2. Online moment accumulation (via [`MomentAccumulator`])
//! 3. Timing of the sampling loop (via [`timed`])
//! 4. Derivation of price, standard error, confidence bounds and efficiency
//!
//! # Confidence interval
//!
//! The reported interval is `mean ∓ 1.96 × σ / √N`, where σ is the *input*
//! volatility of the model rather than the sample standard error. This is
//! the documented report format and is kept as is.

use std::time::Duration;

use super::accumulator::MomentAccumulator;
use super::error::SimulationError;
use super::model::TerminalPriceModel;
use super::strategy::SamplingStrategy;
use super::timing::{timed, Clock};
use crate::rng::NormalSource;

/// z-score of a two-sided 95% interval.
pub const CONFIDENCE_MULTIPLIER_95: f64 = 1.96;

/// Column names of a report row, in field order.
pub const REPORT_COLUMNS: [&str; 7] = [
    "sample_size",
    "estimated_price",
    "estimated_standard_error",
    "95_percent_confidence_interval_lower",
    "95_percent_confidence_interval_upper",
    "runtime_in_seconds",
    "efficiency",
];

/// Statistics of one completed simulation run.
///
/// Field order matches [`REPORT_COLUMNS`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunResult {
    /// Number of payoff samples ingested.
    #[cfg_attr(feature = "serde", serde(rename = "sample_size"))]
    pub replicate_count: u64,
    /// Mean discounted payoff.
    pub estimated_price: f64,
    /// `sqrt(sample_variance / N)`.
    #[cfg_attr(feature = "serde", serde(rename = "estimated_standard_error"))]
    pub standard_error: f64,
    /// `estimated_price - 1.96 × σ / √N`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "95_percent_confidence_interval_lower")
    )]
    pub ci_lower: f64,
    /// `estimated_price + 1.96 × σ / √N`.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "95_percent_confidence_interval_upper")
    )]
    pub ci_upper: f64,
    /// Wall-clock time of the sampling loop.
    #[cfg_attr(feature = "serde", serde(rename = "runtime_in_seconds"))]
    pub elapsed_seconds: f64,
    /// `standard_error² × elapsed_seconds`; lower is better.
    pub efficiency: f64,
}

impl RunResult {
    /// Derives the run statistics from a filled accumulator.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::EmptyRun` if the accumulator holds no samples.
    pub fn from_accumulator(
        accumulator: &MomentAccumulator,
        volatility: f64,
        confidence_multiplier: f64,
        elapsed: Duration,
    ) -> Result<Self, SimulationError> {
        let standard_error = accumulator
            .standard_error()
            .ok_or(SimulationError::EmptyRun)?;
        let replicate_count = accumulator.count();
        let estimated_price = accumulator.mean();
        let half_width = confidence_multiplier * volatility / (replicate_count as f64).sqrt();
        let elapsed_seconds = elapsed.as_secs_f64();

        Ok(Self {
            replicate_count,
            estimated_price,
            standard_error,
            ci_lower: estimated_price - half_width,
            ci_upper: estimated_price + half_width,
            elapsed_seconds,
            efficiency: standard_error * standard_error * elapsed_seconds,
        })
    }

    /// Width of the reported confidence interval.
    #[inline]
    pub fn ci_width(&self) -> f64 {
        self.ci_upper - self.ci_lower
    }
}

/// One (strategy, replicate count) simulation.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use pricer_core::types::ModelParameters;
/// use pricer_pricing::mc::{ManualClock, SamplingStrategy, SimulationRun, TerminalPriceModel};
/// use pricer_pricing::rng::PricerRng;
///
/// let params = ModelParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, 0.0).unwrap();
/// let model = TerminalPriceModel::new(&params);
/// let mut rng = PricerRng::from_seed(42);
/// let clock = ManualClock::new(Duration::from_millis(1));
///
/// let run = SimulationRun::new(SamplingStrategy::Antithetic, 10_000).unwrap();
/// let result = run.execute(&model, &mut rng, &clock).unwrap();
///
/// assert_eq!(result.replicate_count, 10_000);
/// assert!((result.estimated_price - 10.45).abs() < 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationRun {
    strategy: SamplingStrategy,
    replicate_count: u64,
}

impl SimulationRun {
    /// Creates a run.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidReplicateCount` if `replicate_count` is 0.
    pub fn new(strategy: SamplingStrategy, replicate_count: u64) -> Result<Self, SimulationError> {
        if replicate_count == 0 {
            return Err(SimulationError::InvalidReplicateCount(replicate_count));
        }
        Ok(Self {
            strategy,
            replicate_count,
        })
    }

    /// Returns the sampling strategy.
    #[inline]
    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// Returns the number of samples this run draws.
    #[inline]
    pub fn replicate_count(&self) -> u64 {
        self.replicate_count
    }

    /// Draws and accumulates all samples, timing the loop.
    ///
    /// The confidence interval uses the fixed 95% multiplier.
    ///
    /// Each run owns a fresh accumulator; only the generator state carries
    /// over between runs.
    pub fn execute<R, C>(
        &self,
        model: &TerminalPriceModel,
        rng: &mut R,
        clock: &C,
    ) -> Result<RunResult, SimulationError>
    where
        R: NormalSource + ?Sized,
        C: Clock + ?Sized,
    {
        let strategy = self.strategy;
        let (accumulator, elapsed) = timed(clock, || {
            let mut accumulator = MomentAccumulator::new();
            for _ in 0..self.replicate_count {
                accumulator.update(strategy.sample(model, rng));
            }
            accumulator
        });

        RunResult::from_accumulator(
            &accumulator,
            model.volatility(),
            CONFIDENCE_MULTIPLIER_95,
            elapsed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::timing::ManualClock;
    use crate::rng::PricerRng;
    use approx::assert_relative_eq;
    use pricer_core::types::ModelParameters;

    /// Cycles through a fixed list of draws.
    struct CyclingDraws {
        draws: Vec<f64>,
        next: usize,
    }

    impl NormalSource for CyclingDraws {
        fn next_normal(&mut self) -> f64 {
            let z = self.draws[self.next % self.draws.len()];
            self.next += 1;
            z
        }
    }

    fn model() -> TerminalPriceModel {
        TerminalPriceModel::new(&ModelParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, 0.0).unwrap())
    }

    #[test]
    fn test_zero_replicates_rejected() {
        assert_eq!(
            SimulationRun::new(SamplingStrategy::Direct, 0),
            Err(SimulationError::InvalidReplicateCount(0))
        );
    }

    #[test]
    fn test_interval_uses_fixed_95_multiplier() {
        let model = model();
        let mut source = CyclingDraws {
            draws: vec![0.3, -0.7],
            next: 0,
        };
        let clock = ManualClock::new(Duration::from_millis(1));

        let run = SimulationRun::new(SamplingStrategy::Antithetic, 16).unwrap();
        let result = run.execute(&model, &mut source, &clock).unwrap();

        assert_relative_eq!(result.ci_width(), 2.0 * 1.96 * 0.2 / 4.0, max_relative = 1e-12);
    }

    #[test]
    fn test_run_on_literal_draws() {
        let model = model();
        let draws = vec![0.5, -1.0, 1.5, 0.0];
        let mut source = CyclingDraws {
            draws: draws.clone(),
            next: 0,
        };
        let clock = ManualClock::new(Duration::from_millis(500));

        let run = SimulationRun::new(SamplingStrategy::Direct, 4).unwrap();
        let result = run.execute(&model, &mut source, &clock).unwrap();

        let payoffs: Vec<f64> = draws.iter().map(|&z| model.direct_payoff(z)).collect();
        let mean = payoffs.iter().sum::<f64>() / 4.0;
        let second = payoffs.iter().map(|p| p * p).sum::<f64>() / 4.0;
        let standard_error = ((second - mean * mean) / 4.0).sqrt();

        assert_eq!(result.replicate_count, 4);
        assert_relative_eq!(result.estimated_price, mean, epsilon = 1e-12);
        assert_relative_eq!(result.standard_error, standard_error, epsilon = 1e-12);
        assert_relative_eq!(result.ci_lower, mean - 1.96 * 0.2 / 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.ci_upper, mean + 1.96 * 0.2 / 2.0, epsilon = 1e-12);
        assert_eq!(result.elapsed_seconds, 0.5);
        assert_relative_eq!(
            result.efficiency,
            standard_error * standard_error * 0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_antithetic_feeds_one_sample_per_draw() {
        let model = model();
        let mut source = CyclingDraws {
            draws: vec![0.3, 1.2, -0.7],
            next: 0,
        };
        let clock = ManualClock::new(Duration::from_millis(1));

        let run = SimulationRun::new(SamplingStrategy::Antithetic, 3).unwrap();
        let result = run.execute(&model, &mut source, &clock).unwrap();

        assert_eq!(source.next, 3);
        assert_eq!(result.replicate_count, 3);
        let mean = [0.3, 1.2, -0.7]
            .iter()
            .map(|&z| model.antithetic_payoff(z))
            .sum::<f64>()
            / 3.0;
        assert_relative_eq!(result.estimated_price, mean, epsilon = 1e-12);
    }

    #[test]
    fn test_ci_width_uses_input_volatility() {
        let model = model();
        let clock = ManualClock::new(Duration::from_millis(1));
        let mut rng = PricerRng::from_seed(11);
        for n in [1_u64, 7, 100, 2_500] {
            let result = SimulationRun::new(SamplingStrategy::Direct, n)
                .unwrap()
                .execute(&model, &mut rng, &clock)
                .unwrap();
            let expected = 2.0 * 1.96 * 0.2 / (n as f64).sqrt();
            assert_relative_eq!(result.ci_width(), expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_single_replicate_has_zero_standard_error() {
        let model = model();
        let clock = ManualClock::new(Duration::from_millis(1));
        let mut rng = PricerRng::from_seed(3);
        let result = SimulationRun::new(SamplingStrategy::Direct, 1)
            .unwrap()
            .execute(&model, &mut rng, &clock)
            .unwrap();
        assert_eq!(result.standard_error, 0.0);
        assert_eq!(result.efficiency, 0.0);
    }

    #[test]
    fn test_from_empty_accumulator_fails() {
        let acc = MomentAccumulator::new();
        assert_eq!(
            RunResult::from_accumulator(&acc, 0.2, 1.96, Duration::ZERO),
            Err(SimulationError::EmptyRun)
        );
    }

    #[test]
    fn test_report_columns() {
        assert_eq!(REPORT_COLUMNS.len(), 7);
        assert_eq!(REPORT_COLUMNS[0], "sample_size");
        assert_eq!(REPORT_COLUMNS[6], "efficiency");
    }
}
