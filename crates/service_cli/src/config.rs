//! Report configuration management
//!
//! Handles loading configuration from a TOML file, `BSM_MC_*` environment
//! variables and CLI arguments.

use pricer_core::types::{ModelParameters, ParameterError};
use pricer_pricing::mc::{SamplingStrategy, SimulationError, SweepConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every environment variable the binary reads.
pub const ENV_PREFIX: &str = "BSM_MC_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid report format: {0}. Must be one of: csv, json")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {var}={value:?} could not be parsed")]
    EnvError { var: String, value: String },

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Log levels supported by the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Label line, header and comma-separated rows per table
    #[default]
    Csv,
    /// One JSON object per line
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Full configuration of one report invocation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Spot price of the underlying
    pub starting_price: f64,
    /// Option strike
    pub strike_price: f64,
    /// Annualised volatility
    pub volatility: f64,
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Continuous dividend yield
    pub dividend_yield: f64,
    /// Time to maturity in years
    pub time_to_maturity: f64,
    /// Number of runs in the direct sweep
    pub direct_run_count: u32,
    /// Replicates of the first direct run
    pub direct_base_replicates: u64,
    /// Number of runs in the antithetic sweep
    pub antithetic_run_count: u32,
    /// Replicates of the first antithetic run
    pub antithetic_base_replicates: u64,
    /// Growth factor between consecutive runs
    pub replicate_multiplier: u64,
    /// Generator seed; OS entropy when absent
    pub seed: Option<u64>,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Report format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: ReportFormat,
    /// Report a fixed 1 ms per run instead of wall-clock time
    pub deterministic_timing: bool,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<ReportFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    ReportFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            starting_price: 1868.99,
            strike_price: 1870.0,
            volatility: 0.2979,
            risk_free_rate: 0.003866,
            dividend_yield: 0.0232,
            time_to_maturity: 1.0 / 52.0,
            direct_run_count: 6,
            direct_base_replicates: 1_000,
            antithetic_run_count: 5,
            antithetic_base_replicates: 4_000,
            replicate_multiplier: 10,
            seed: None,
            log_level: LogLevel::Info,
            format: ReportFormat::Csv,
            deterministic_timing: false,
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    let var = format!("{}{}", ENV_PREFIX, key);
    match lookup(&var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvError { var, value }),
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    ///
    /// The result is not validated; environment and CLI overrides may still
    /// apply on top of it.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from `BSM_MC_*` variables resolved through `lookup`.
    ///
    /// Only variables that are present are applied.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, "STARTING_PRICE")? {
            self.starting_price = v;
        }
        if let Some(v) = parse_var(&lookup, "STRIKE_PRICE")? {
            self.strike_price = v;
        }
        if let Some(v) = parse_var(&lookup, "VOLATILITY")? {
            self.volatility = v;
        }
        if let Some(v) = parse_var(&lookup, "RISK_FREE_RATE")? {
            self.risk_free_rate = v;
        }
        if let Some(v) = parse_var(&lookup, "DIVIDEND_YIELD")? {
            self.dividend_yield = v;
        }
        if let Some(v) = parse_var(&lookup, "TIME_TO_MATURITY")? {
            self.time_to_maturity = v;
        }
        if let Some(v) = parse_var(&lookup, "DIRECT_RUN_COUNT")? {
            self.direct_run_count = v;
        }
        if let Some(v) = parse_var(&lookup, "DIRECT_BASE_REPLICATES")? {
            self.direct_base_replicates = v;
        }
        if let Some(v) = parse_var(&lookup, "ANTITHETIC_RUN_COUNT")? {
            self.antithetic_run_count = v;
        }
        if let Some(v) = parse_var(&lookup, "ANTITHETIC_BASE_REPLICATES")? {
            self.antithetic_base_replicates = v;
        }
        if let Some(v) = parse_var(&lookup, "REPLICATE_MULTIPLIER")? {
            self.replicate_multiplier = v;
        }
        if let Some(v) = parse_var(&lookup, "SEED")? {
            self.seed = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DETERMINISTIC_TIMING")? {
            self.deterministic_timing = v;
        }
        if let Some(v) = lookup(&format!("{}LOG_LEVEL", ENV_PREFIX)) {
            self.log_level = LogLevel::from_str(&v)?;
        }
        if let Some(v) = lookup(&format!("{}FORMAT", ENV_PREFIX)) {
            self.format = ReportFormat::from_str(&v)?;
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// Builds the model parameters and both sweeps so that every error
    /// surfaces before simulation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model_parameters()?;
        self.direct_sweep()?;
        self.antithetic_sweep()?;
        Ok(())
    }

    /// Validated model parameters
    pub fn model_parameters(&self) -> Result<ModelParameters, ConfigError> {
        Ok(ModelParameters::new(
            self.starting_price,
            self.strike_price,
            self.volatility,
            self.risk_free_rate,
            self.time_to_maturity,
            self.dividend_yield,
        )?)
    }

    /// Sweep configuration of the direct strategy
    pub fn direct_sweep(&self) -> Result<SweepConfig, ConfigError> {
        self.sweep(
            SamplingStrategy::Direct,
            self.direct_run_count,
            self.direct_base_replicates,
        )
    }

    /// Sweep configuration of the antithetic strategy
    pub fn antithetic_sweep(&self) -> Result<SweepConfig, ConfigError> {
        self.sweep(
            SamplingStrategy::Antithetic,
            self.antithetic_run_count,
            self.antithetic_base_replicates,
        )
    }

    fn sweep(
        &self,
        strategy: SamplingStrategy,
        run_count: u32,
        base_replicates: u64,
    ) -> Result<SweepConfig, ConfigError> {
        Ok(SweepConfig::builder(strategy)
            .run_count(run_count)
            .base_replicates(base_replicates)
            .multiplier(self.replicate_multiplier)
            .build()?)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(v) = cli.starting_price {
            self.starting_price = v;
        }
        if let Some(v) = cli.strike_price {
            self.strike_price = v;
        }
        if let Some(v) = cli.volatility {
            self.volatility = v;
        }
        if let Some(v) = cli.risk_free_rate {
            self.risk_free_rate = v;
        }
        if let Some(v) = cli.dividend_yield {
            self.dividend_yield = v;
        }
        if let Some(v) = cli.time_to_maturity {
            self.time_to_maturity = v;
        }
        if let Some(v) = cli.direct_run_count {
            self.direct_run_count = v;
        }
        if let Some(v) = cli.direct_base_replicates {
            self.direct_base_replicates = v;
        }
        if let Some(v) = cli.antithetic_run_count {
            self.antithetic_run_count = v;
        }
        if let Some(v) = cli.antithetic_base_replicates {
            self.antithetic_base_replicates = v;
        }
        if let Some(v) = cli.replicate_multiplier {
            self.replicate_multiplier = v;
        }
        if let Some(v) = cli.seed {
            self.seed = Some(v);
        }
        if let Some(v) = cli.deterministic_timing {
            self.deterministic_timing = v;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = &cli.format {
            self.format = ReportFormat::from_str(format)?;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    pub starting_price: Option<f64>,
    pub strike_price: Option<f64>,
    pub volatility: Option<f64>,
    pub risk_free_rate: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub time_to_maturity: Option<f64>,
    pub direct_run_count: Option<u32>,
    pub direct_base_replicates: Option<u64>,
    pub antithetic_run_count: Option<u32>,
    pub antithetic_base_replicates: Option<u64>,
    pub replicate_multiplier: Option<u64>,
    pub seed: Option<u64>,
    pub deterministic_timing: Option<bool>,
    /// Log level override
    pub log_level: Option<String>,
    /// Report format override
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    build_config_with(cli, |var| std::env::var(var).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => AppConfig::load_file(path)?,
        None => AppConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.starting_price, 1868.99);
        assert_eq!(config.strike_price, 1870.0);
        assert_eq!(config.volatility, 0.2979);
        assert_eq!(config.risk_free_rate, 0.003866);
        assert_eq!(config.dividend_yield, 0.0232);
        assert_eq!(config.time_to_maturity, 1.0 / 52.0);
        assert_eq!(config.direct_run_count, 6);
        assert_eq!(config.direct_base_replicates, 1_000);
        assert_eq!(config.antithetic_run_count, 5);
        assert_eq!(config.antithetic_base_replicates, 4_000);
        assert_eq!(config.replicate_multiplier, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, ReportFormat::Csv);
        assert!(!config.deterministic_timing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_sweeps() {
        let config = AppConfig::new();
        assert_eq!(
            config.direct_sweep().unwrap().replicate_counts(),
            vec![1_000, 10_000, 100_000, 1_000_000, 10_000_000, 100_000_000]
        );
        assert_eq!(
            config.antithetic_sweep().unwrap().replicate_counts(),
            vec![4_000, 40_000, 400_000, 4_000_000, 40_000_000]
        );
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_format_parsing_and_display() {
        assert_eq!(ReportFormat::from_str("CSV").unwrap(), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_str("json").unwrap(), ReportFormat::Json);
        assert!(matches!(
            ReportFormat::from_str("xml"),
            Err(ConfigError::InvalidFormat(_))
        ));
        assert_eq!(format!("{}", ReportFormat::Json), "json");
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let config = AppConfig {
            volatility: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Parameter(ParameterError::NonPositive {
                name: "volatility",
                ..
            }))
        ));

        let config = AppConfig {
            time_to_maturity: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            starting_price: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overflow() {
        let config = AppConfig {
            direct_run_count: 40,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Simulation(SimulationError::ReplicateOverflow { .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_runs() {
        let config = AppConfig {
            antithetic_run_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Simulation(SimulationError::InvalidRunCount(0)))
        ));
    }

    #[test]
    fn test_apply_env() {
        let mut config = AppConfig::default();
        config
            .apply_env_with(env(&[
                ("BSM_MC_VOLATILITY", "0.25"),
                ("BSM_MC_SEED", "42"),
                ("BSM_MC_DIRECT_RUN_COUNT", " 3 "),
                ("BSM_MC_FORMAT", "json"),
                ("UNRELATED", "x"),
            ]))
            .unwrap();

        assert_eq!(config.volatility, 0.25);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.direct_run_count, 3);
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.strike_price, 1870.0);
    }

    #[test]
    fn test_apply_env_rejects_garbage() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env_with(env(&[("BSM_MC_SEED", "forty-two")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError { ref var, .. } if var == "BSM_MC_SEED"));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = AppConfig::default();
        let cli = CliArgs {
            strike_price: Some(1900.0),
            seed: Some(7),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.strike_price, 1900.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_cli_args_merge_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        let cli = CliArgs {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        assert!(config.merge_with_cli(&cli).is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            starting_price = 100.0
            strike_price = 110.0
            volatility = 0.25
            risk_free_rate = 0.05
            dividend_yield = 0.03
            time_to_maturity = 0.5
            direct_run_count = 2
            direct_base_replicates = 500
            antithetic_run_count = 3
            antithetic_base_replicates = 200
            replicate_multiplier = 4
            seed = 99
            log_level = "WARN"
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.starting_price, 100.0);
        assert_eq!(config.strike_price, 110.0);
        assert_eq!(config.time_to_maturity, 0.5);
        assert_eq!(config.antithetic_base_replicates, 200);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(
            config.antithetic_sweep().unwrap().replicate_counts(),
            vec![200, 800, 3_200]
        );
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: AppConfig = toml::from_str("seed = 5").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.starting_price, 1868.99);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_unknown_toml_field_rejected() {
        assert!(toml::from_str::<AppConfig>("volatilty = 0.3").is_err());
    }

    #[test]
    fn test_build_config_priority() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "volatility = 0.3\nstrike_price = 1800.0\nseed = 1").unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            seed: Some(3),
            ..Default::default()
        };
        let config = build_config_with(
            &cli,
            env(&[("BSM_MC_STRIKE_PRICE", "1850"), ("BSM_MC_SEED", "2")]),
        )
        .unwrap();

        // File wins over defaults
        assert_eq!(config.volatility, 0.3);
        // Environment wins over file
        assert_eq!(config.strike_price, 1850.0);
        // CLI wins over environment
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/bsm-mc.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env(&[])),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_build_config_validates_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "time_to_maturity = 0.0").unwrap();
        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = build_config_with(&cli, env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parameter(_)));
    }

    #[test]
    fn test_build_config_override_repairs_file_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "time_to_maturity = 0.0").unwrap();
        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            time_to_maturity: Some(0.25),
            ..Default::default()
        };
        let config = build_config_with(&cli, env(&[])).unwrap();
        assert_eq!(config.time_to_maturity, 0.25);
    }

    #[test]
    fn test_build_config_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = \"seven\"").unwrap();
        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env(&[])),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_deterministic_timing_sources() {
        let config: AppConfig = toml::from_str("deterministic_timing = true").unwrap();
        assert!(config.deterministic_timing);

        let config = build_config_with(
            &CliArgs::default(),
            env(&[("BSM_MC_DETERMINISTIC_TIMING", "true")]),
        )
        .unwrap();
        assert!(config.deterministic_timing);

        let cli = CliArgs {
            deterministic_timing: Some(false),
            ..Default::default()
        };
        let config =
            build_config_with(&cli, env(&[("BSM_MC_DETERMINISTIC_TIMING", "true")])).unwrap();
        assert!(!config.deterministic_timing);

        let err = build_config_with(
            &CliArgs::default(),
            env(&[("BSM_MC_DETERMINISTIC_TIMING", "yes")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError { .. }));
    }
}
