//! Monte Carlo estimation of the BSM European call price.
//!
//! Each sample needs only the terminal asset price, which under BSM dynamics
//! is available in closed form from a single standard normal draw. No time
//! stepping or path storage is involved.
//!
//! # Architecture
//!
//! ```text
//! SweepDriver
//! ├── SweepConfig          (strategy, run count, base replicates, multiplier)
//! ├── TerminalPriceModel   (pre-computed drift, diffusion, discount)
//! ├── NormalSource         (PricerRng, passed by &mut)
//! ├── Clock                (MonotonicClock or ManualClock)
//! └── per run: SimulationRun
//!     ├── SamplingStrategy::sample()   (one draw per sample)
//!     ├── MomentAccumulator::update()  (O(1) running moments)
//!     └── RunResult                    (one report row)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::types::ModelParameters;
//! use pricer_pricing::mc::{MonotonicClock, SamplingStrategy, SimulationRun, TerminalPriceModel};
//! use pricer_pricing::rng::PricerRng;
//!
//! let params = ModelParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, 0.0).unwrap();
//! let model = TerminalPriceModel::new(&params);
//! let mut rng = PricerRng::from_seed(42);
//! let clock = MonotonicClock::new();
//!
//! let run = SimulationRun::new(SamplingStrategy::Antithetic, 50_000).unwrap();
//! let result = run.execute(&model, &mut rng, &clock).unwrap();
//!
//! assert!((result.estimated_price - 10.45).abs() < 0.5);
//! assert!(result.ci_lower < result.ci_upper);
//! ```

mod accumulator;
mod error;
mod model;
mod run;
mod strategy;
mod sweep;
mod timing;

pub use accumulator::MomentAccumulator;
pub use error::SimulationError;
pub use model::TerminalPriceModel;
pub use run::{RunResult, SimulationRun, CONFIDENCE_MULTIPLIER_95, REPORT_COLUMNS};
pub use strategy::SamplingStrategy;
pub use sweep::{
    ReportSink, SweepConfig, SweepConfigBuilder, SweepDriver, SweepError,
    DEFAULT_REPLICATE_MULTIPLIER,
};
pub use timing::{timed, Clock, ManualClock, MonotonicClock, ScopedTimer};
