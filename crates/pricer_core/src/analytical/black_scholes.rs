//! Black-Scholes-Merton closed-form pricing for European calls.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use crate::math::distributions::norm_cdf;
use crate::types::{ModelParameters, ParameterError};

/// Black-Scholes-Merton model with continuous dividend yield.
///
/// Wraps validated [`ModelParameters`], so `σ√T` is always strictly
/// positive and the formulas never divide by zero.
///
/// # Examples
/// ```
/// use pricer_core::analytical::BlackScholesMerton;
/// use pricer_core::types::ModelParameters;
///
/// let params = ModelParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, 0.0).unwrap();
/// let price = BlackScholesMerton::new(params).price_call();
/// assert!((price - 10.450583572185565).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholesMerton {
    params: ModelParameters,
}

impl BlackScholesMerton {
    /// Creates the model from validated parameters.
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    /// Returns the underlying parameters.
    #[inline]
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Computes d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T).
    #[inline]
    pub fn d1(&self) -> f64 {
        let p = &self.params;
        let log_moneyness = (p.starting_price() / p.strike_price()).ln();
        let drift = (p.risk_free_rate() - p.dividend_yield()
            + 0.5 * p.volatility() * p.volatility())
            * p.time_to_maturity();

        (log_moneyness + drift) / p.total_volatility()
    }

    /// Computes d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.params.total_volatility()
    }

    /// Computes the European call price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    pub fn price_call(&self) -> f64 {
        let p = &self.params;
        let dividend_discount = (-p.dividend_yield() * p.time_to_maturity()).exp();

        p.starting_price() * dividend_discount * norm_cdf(self.d1())
            - p.strike_price() * p.discount_factor() * norm_cdf(self.d2())
    }
}

/// Closed-form European call price from six scalar inputs.
///
/// # Arguments
/// * `starting_price` - Spot price (S)
/// * `strike_price` - Strike (K)
/// * `volatility` - Volatility (σ)
/// * `risk_free_rate` - Risk-free rate (r)
/// * `time_to_maturity` - Time to expiry in years (T)
/// * `dividend_yield` - Dividend yield (q)
///
/// # Errors
/// Returns `ParameterError` if the inputs fail [`ModelParameters::new`].
///
/// # Examples
/// ```
/// use pricer_core::analytical::bsm_call_price;
///
/// let price = bsm_call_price(42.0, 40.0, 0.2, 0.1, 0.5, 0.0).unwrap();
/// assert!((price - 4.7594).abs() < 1e-4);
/// ```
pub fn bsm_call_price(
    starting_price: f64,
    strike_price: f64,
    volatility: f64,
    risk_free_rate: f64,
    time_to_maturity: f64,
    dividend_yield: f64,
) -> Result<f64, ParameterError> {
    let params = ModelParameters::new(
        starting_price,
        strike_price,
        volatility,
        risk_free_rate,
        time_to_maturity,
        dividend_yield,
    )?;
    Ok(BlackScholesMerton::new(params).price_call())
}
