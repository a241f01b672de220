//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParameterError`: Errors from validating model parameters

use thiserror::Error;

/// Invalid model parameter.
///
/// Raised by [`ModelParameters::new`](super::ModelParameters::new) when an
/// input cannot be used by the closed-form or Monte Carlo pricers.
///
/// # Variants
/// - `NonPositive`: Value must be strictly positive (prices, volatility, maturity)
/// - `NonFinite`: Value is NaN or infinite
///
/// # Examples
/// ```
/// use pricer_core::types::ParameterError;
///
/// let err = ParameterError::NonPositive { name: "volatility", value: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid parameter 'volatility': 0 must be positive");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParameterError {
    /// Parameter must be strictly positive.
    #[error("Invalid parameter '{name}': {value} must be positive")]
    NonPositive {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Parameter must be finite.
    #[error("Invalid parameter '{name}': {value} is not finite")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl ParameterError {
    /// Returns the name of the offending parameter.
    pub fn name(&self) -> &'static str {
        match self {
            ParameterError::NonPositive { name, .. } | ParameterError::NonFinite { name, .. } => {
                name
            }
        }
    }
}
