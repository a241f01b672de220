//! Analytical pricing formulas.
//!
//! Provides the closed-form Black-Scholes-Merton call price that Monte Carlo
//! estimates are compared against.

pub mod black_scholes;

pub use black_scholes::{bsm_call_price, BlackScholesMerton};
