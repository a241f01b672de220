//! # pricer_core: Model Foundation for the BSM Monte Carlo Estimator
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Validated model inputs: `ModelParameters` (`types::params`)
//! - Error types: `ParameterError` (`types::error`)
//! - Standard normal CDF (`math::distributions`)
//! - Closed-form Black-Scholes-Merton call price (`analytical`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: Complementary error function for the normal CDF
//! - thiserror: Error derive
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::analytical::BlackScholesMerton;
//! use pricer_core::types::ModelParameters;
//!
//! let params = ModelParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, 0.0).unwrap();
//! let price = BlackScholesMerton::new(params).price_call();
//! # assert!((price - 10.4506).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod math;
pub mod types;
