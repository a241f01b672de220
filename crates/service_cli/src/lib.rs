//! BSM Monte Carlo report
//!
//! Prints the closed-form Black-Scholes-Merton call price, then one sweep
//! table per sampling strategy showing how the simulated estimate converges
//! as the replicate count grows.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration
//! ([`config`]) and report rendering ([`report`]) to the closed-form pricer
//! in `pricer_core` and the Monte Carlo engine in `pricer_pricing`.

use std::io::Write;
use std::time::Duration;

use pricer_core::analytical::BlackScholesMerton;
use pricer_pricing::mc::{
    Clock, ManualClock, MonotonicClock, ReportSink, SweepDriver, TerminalPriceModel,
};
use pricer_pricing::rng::PricerRng;
use tracing::info;

pub mod config;
pub mod error;
pub mod report;

pub use error::{CliError, Result};

use config::{AppConfig, ReportFormat};
use report::{CsvReport, JsonReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tick reported for every run when `deterministic_timing` is set.
pub const DETERMINISTIC_TICK: Duration = Duration::from_millis(1);

/// Clock the report measures runs with.
///
/// Wall-clock time by default; a [`ManualClock`] advancing by
/// [`DETERMINISTIC_TICK`] per run when `deterministic_timing` is set, so that
/// two invocations with the same seed print identical reports.
pub fn report_clock(config: &AppConfig) -> Box<dyn Clock> {
    if config.deterministic_timing {
        Box::new(ManualClock::new(DETERMINISTIC_TICK))
    } else {
        Box::new(MonotonicClock::new())
    }
}

/// Writes the full report for `config` to `out` and returns the writer.
///
/// Elapsed times come from `clock`; with a fixed seed and a
/// [`ManualClock`](pricer_pricing::mc::ManualClock) the output is
/// byte-for-byte reproducible.
pub fn run_report<C, W>(config: &AppConfig, clock: &C, out: W) -> Result<W>
where
    C: Clock + ?Sized,
    W: Write,
{
    let params = config.model_parameters()?;
    let direct = config.direct_sweep()?;
    let antithetic = config.antithetic_sweep()?;

    let price = BlackScholesMerton::new(params).price_call();
    let model = TerminalPriceModel::new(&params);
    let mut rng = PricerRng::new(config.seed);

    info!(
        seed = rng.seed(),
        reproducible = rng.is_fixed_seed(),
        format = %config.format,
        "Random source initialised"
    );

    let driver = SweepDriver::new(&model, clock);
    let mut run_sweeps = |sink: &mut dyn ReportSink<Error = CliError>| -> Result<()> {
        for sweep in [&direct, &antithetic] {
            info!(
                strategy = %sweep.strategy(),
                runs = sweep.run_count(),
                base_replicates = sweep.base_replicates(),
                "Sweep started"
            );
            let results = driver.run(sweep, &mut rng, sink)?;
            info!(strategy = %sweep.strategy(), runs = results.len(), "Sweep finished");
        }
        Ok(())
    };

    match config.format {
        ReportFormat::Csv => {
            let mut report = CsvReport::new(out);
            report.write_deterministic_price(price)?;
            run_sweeps(&mut report)?;
            report.into_inner()
        }
        ReportFormat::Json => {
            let mut report = JsonReport::new(out);
            report.write_deterministic_price(price)?;
            run_sweeps(&mut report)?;
            report.into_inner()
        }
    }
}
