//! Core model types.
//!
//! This module provides:
//! - `params`: Validated Black-Scholes-Merton model parameters
//! - `error`: Structured error types for parameter validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ModelParameters`] from `params`
//! - [`ParameterError`] from `error`

pub mod error;
pub mod params;

// Re-export commonly used types at module level
pub use error::ParameterError;
pub use params::ModelParameters;
