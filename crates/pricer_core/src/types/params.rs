//! Model parameters shared by the closed-form and Monte Carlo pricers.
//!
//! A [`ModelParameters`] value can only be obtained through its validating
//! constructor, so downstream code may divide by `volatility * sqrt(T)`
//! without re-checking.

use super::error::ParameterError;

/// Immutable Black-Scholes-Merton model inputs for a European call.
///
/// # Invariants
/// - `starting_price`, `strike_price`, `volatility` and `time_to_maturity` are
///   finite and strictly positive
/// - `risk_free_rate` and `dividend_yield` are finite
///
/// # Examples
/// ```
/// use pricer_core::types::ModelParameters;
///
/// let params = ModelParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, 0.0).unwrap();
/// assert_eq!(params.strike_price(), 100.0);
///
/// // Zero volatility is rejected
/// assert!(ModelParameters::new(100.0, 100.0, 0.0, 0.05, 1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    starting_price: f64,
    strike_price: f64,
    volatility: f64,
    risk_free_rate: f64,
    time_to_maturity: f64,
    dividend_yield: f64,
}

impl ModelParameters {
    /// Creates validated model parameters.
    ///
    /// # Arguments
    /// * `starting_price` - Spot price of the underlying (S₀)
    /// * `strike_price` - Option strike (K)
    /// * `volatility` - Annualised volatility (σ)
    /// * `risk_free_rate` - Continuously compounded risk-free rate (r)
    /// * `time_to_maturity` - Time to expiry in years (T)
    /// * `dividend_yield` - Continuous dividend yield (q)
    ///
    /// # Errors
    /// - `ParameterError::NonFinite` if any input is NaN or infinite
    /// - `ParameterError::NonPositive` if a price, the volatility or the
    ///   maturity is zero or negative
    pub fn new(
        starting_price: f64,
        strike_price: f64,
        volatility: f64,
        risk_free_rate: f64,
        time_to_maturity: f64,
        dividend_yield: f64,
    ) -> Result<Self, ParameterError> {
        require_positive("starting_price", starting_price)?;
        require_positive("strike_price", strike_price)?;
        require_positive("volatility", volatility)?;
        require_finite("risk_free_rate", risk_free_rate)?;
        require_positive("time_to_maturity", time_to_maturity)?;
        require_finite("dividend_yield", dividend_yield)?;

        Ok(Self {
            starting_price,
            strike_price,
            volatility,
            risk_free_rate,
            time_to_maturity,
            dividend_yield,
        })
    }

    /// Returns the spot price S₀.
    #[inline]
    pub fn starting_price(&self) -> f64 {
        self.starting_price
    }

    /// Returns the strike K.
    #[inline]
    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the time to maturity T in years.
    #[inline]
    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    /// Returns the dividend yield q.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }

    /// Returns σ√T, the standard deviation of the log terminal price.
    #[inline]
    pub fn total_volatility(&self) -> f64 {
        self.volatility * self.time_to_maturity.sqrt()
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite { name, value })
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NonPositive { name, value })
    }
}
