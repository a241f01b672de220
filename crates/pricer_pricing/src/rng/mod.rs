//! # Random Number Generation Infrastructure
//!
//! This module provides the random normal source for Monte Carlo
//! simulations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: A configured seed gives a deterministic sequence;
//!   without one the generator is seeded from OS entropy
//! - **Explicit ownership**: The generator is an owned value passed by
//!   `&mut` into each simulation run; there is no process-wide state
//! - **Static dispatch**: The engine is generic over [`NormalSource`], so
//!   the hot loop has no `Box<dyn Trait>` indirection
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{NormalSource, PricerRng};
//!
//! // Reproducible stream from a configured seed
//! let mut rng = PricerRng::new(Some(12345));
//! let mut replay = PricerRng::from_seed(rng.seed());
//! assert_eq!(rng.next_normal(), replay.gen_normal());
//! ```

mod prng;

// Public re-exports
pub use prng::{NormalSource, PricerRng};
