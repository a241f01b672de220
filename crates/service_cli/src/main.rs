//! bsm-mc: BSM European call, closed form vs Monte Carlo
//!
//! Prints the deterministic price, then a direct and an antithetic sweep
//! table to stdout. Logs go to stderr.

use clap::Parser;
use service_cli::config::{build_config, CliArgs};
use service_cli::{report_clock, run_report};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Estimate a BSM European call by Monte Carlo and report convergence
#[derive(Parser, Debug)]
#[command(name = "bsm-mc")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Spot price of the underlying
    #[arg(long, env = "BSM_MC_STARTING_PRICE")]
    starting_price: Option<f64>,

    /// Option strike
    #[arg(long, env = "BSM_MC_STRIKE_PRICE")]
    strike_price: Option<f64>,

    /// Annualised volatility
    #[arg(long, env = "BSM_MC_VOLATILITY")]
    volatility: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long, env = "BSM_MC_RISK_FREE_RATE", allow_hyphen_values = true)]
    risk_free_rate: Option<f64>,

    /// Continuous dividend yield
    #[arg(long, env = "BSM_MC_DIVIDEND_YIELD", allow_hyphen_values = true)]
    dividend_yield: Option<f64>,

    /// Time to maturity in years
    #[arg(long, env = "BSM_MC_TIME_TO_MATURITY")]
    time_to_maturity: Option<f64>,

    /// Number of runs in the direct sweep
    #[arg(long, env = "BSM_MC_DIRECT_RUN_COUNT")]
    direct_run_count: Option<u32>,

    /// Replicates of the first direct run
    #[arg(long, env = "BSM_MC_DIRECT_BASE_REPLICATES")]
    direct_base_replicates: Option<u64>,

    /// Number of runs in the antithetic sweep
    #[arg(long, env = "BSM_MC_ANTITHETIC_RUN_COUNT")]
    antithetic_run_count: Option<u32>,

    /// Replicates of the first antithetic run
    #[arg(long, env = "BSM_MC_ANTITHETIC_BASE_REPLICATES")]
    antithetic_base_replicates: Option<u64>,

    /// Growth factor between consecutive runs
    #[arg(long, env = "BSM_MC_REPLICATE_MULTIPLIER")]
    replicate_multiplier: Option<u64>,

    /// Generator seed (OS entropy when omitted)
    #[arg(short, long, env = "BSM_MC_SEED")]
    seed: Option<u64>,

    /// Report a fixed 1 ms per run so that seeded runs print identical output
    #[arg(long)]
    deterministic_timing: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "BSM_MC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Report format (csv, json)
    #[arg(short, long, env = "BSM_MC_FORMAT")]
    format: Option<String>,
}

impl From<Args> for CliArgs {
    fn from(args: Args) -> Self {
        CliArgs {
            config_file: args.config,
            starting_price: args.starting_price,
            strike_price: args.strike_price,
            volatility: args.volatility,
            risk_free_rate: args.risk_free_rate,
            dividend_yield: args.dividend_yield,
            time_to_maturity: args.time_to_maturity,
            direct_run_count: args.direct_run_count,
            direct_base_replicates: args.direct_base_replicates,
            antithetic_run_count: args.antithetic_run_count,
            antithetic_base_replicates: args.antithetic_base_replicates,
            replicate_multiplier: args.replicate_multiplier,
            seed: args.seed,
            deterministic_timing: args.deterministic_timing.then_some(true),
            log_level: args.log_level,
            format: args.format,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: CliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("bsm-mc v{}", service_cli::VERSION);
    tracing::info!(
        starting_price = config.starting_price,
        strike_price = config.strike_price,
        volatility = config.volatility,
        risk_free_rate = config.risk_free_rate,
        dividend_yield = config.dividend_yield,
        time_to_maturity = config.time_to_maturity,
        seeded = config.seed.is_some(),
        deterministic_timing = config.deterministic_timing,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    let clock = report_clock(&config);
    run_report(&config, clock.as_ref(), out)?;

    tracing::info!("Report complete");
    Ok(())
}
