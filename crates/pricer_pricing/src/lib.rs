//! # Pricer Pricing: Monte Carlo Engine
//!
//! Estimates the BSM European call price by simulation and reports how the
//! estimate converges as the replicate count grows.
//!
//! ## Modules
//!
//! - [`rng`]: seeded standard normal source ([`rng::PricerRng`])
//! - [`mc`]: terminal price model, sampling strategies, running moment
//!   accumulation, timed runs and replicate sweeps
//!
//! The closed-form reference price lives in `pricer_core::analytical`.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::ModelParameters;
//! use pricer_pricing::mc::{ManualClock, ReportSink, RunResult, SamplingStrategy, SweepConfig, SweepDriver, TerminalPriceModel};
//! use pricer_pricing::rng::PricerRng;
//! use std::time::Duration;
//!
//! struct Rows(Vec<u64>);
//!
//! impl ReportSink for Rows {
//!     type Error = std::io::Error;
//!
//!     fn begin_table(&mut self, _strategy: SamplingStrategy) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     fn write_row(&mut self, result: &RunResult) -> Result<(), Self::Error> {
//!         self.0.push(result.replicate_count);
//!         Ok(())
//!     }
//! }
//!
//! let params = ModelParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, 0.0).unwrap();
//! let model = TerminalPriceModel::new(&params);
//! let clock = ManualClock::new(Duration::from_millis(1));
//! let config = SweepConfig::builder(SamplingStrategy::Direct)
//!     .run_count(3)
//!     .base_replicates(100)
//!     .build()
//!     .unwrap();
//!
//! let mut rng = PricerRng::from_seed(7);
//! let mut rows = Rows(Vec::new());
//! SweepDriver::new(&model, &clock).run(&config, &mut rng, &mut rows).unwrap();
//!
//! assert_eq!(rows.0, vec![100, 1_000, 10_000]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![allow(unknown_lints)]

pub mod mc;
pub mod rng;

pub use mc::{
    RunResult, SamplingStrategy, SimulationError, SimulationRun, SweepConfig, SweepDriver,
    TerminalPriceModel,
};
pub use rng::PricerRng;
