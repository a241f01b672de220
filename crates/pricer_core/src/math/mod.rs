//! Numerical building blocks.
//!
//! - [`distributions`]: Standard normal CDF used by the closed-form pricer

pub mod distributions;

pub use distributions::norm_cdf;
