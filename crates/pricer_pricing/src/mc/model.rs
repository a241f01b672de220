//! Terminal price model for a European call under geometric Brownian motion.
//!
//! Uses the exact log-space solution of GBM over the whole horizon, so one
//! standard normal draw yields one terminal price:
//!
//! ```text
//! S(T) = S₀ × exp((r - q - 0.5σ²)T + σ√T × Z)
//! ```
//!
//! The deterministic factor `S₀ × exp((r - q - 0.5σ²)T)`, the diffusion
//! coefficient `σ√T` and the discount factor `exp(-rT)` are precomputed once
//! per model so the sampling loop evaluates a single `exp` per price.

use pricer_core::types::ModelParameters;

/// Maps standard normal draws to discounted call payoff samples.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::ModelParameters;
/// use pricer_pricing::mc::TerminalPriceModel;
///
/// let params = ModelParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, 0.0).unwrap();
/// let model = TerminalPriceModel::new(&params);
///
/// // Deep out-of-the-money draw pays nothing
/// assert_eq!(model.direct_payoff(-5.0), 0.0);
///
/// // Antithetic sample averages the draw and its mirror image
/// let z = 0.7;
/// let expected = 0.5 * model.discount_factor() * (model.intrinsic(z) + model.intrinsic(-z));
/// assert_eq!(model.antithetic_payoff(z), expected);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalPriceModel {
    /// S₀ × exp((r - q - 0.5σ²)T)
    drift_factor: f64,
    /// σ√T
    diffusion: f64,
    /// exp(-rT)
    discount: f64,
    strike: f64,
    volatility: f64,
}

impl TerminalPriceModel {
    /// Precomputes the model constants from validated parameters.
    pub fn new(params: &ModelParameters) -> Self {
        let sigma = params.volatility();
        let drift = (params.risk_free_rate() - params.dividend_yield() - 0.5 * sigma * sigma)
            * params.time_to_maturity();

        Self {
            drift_factor: params.starting_price() * drift.exp(),
            diffusion: params.total_volatility(),
            discount: params.discount_factor(),
            strike: params.strike_price(),
            volatility: sigma,
        }
    }

    /// Returns the discount factor exp(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        self.discount
    }

    /// Returns the input volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Terminal asset price for the standard normal draw `z`.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.drift_factor * (self.diffusion * z).exp()
    }

    /// Undiscounted call payoff `max(S(T) - K, 0)` for the draw `z`.
    ///
    /// Returns exactly `0.0` whenever `S(T) - K <= 0`.
    #[inline]
    pub fn intrinsic(&self, z: f64) -> f64 {
        let moneyness = self.terminal_price(z) - self.strike;
        if moneyness > 0.0 {
            moneyness
        } else {
            0.0
        }
    }

    /// Direct payoff sample: `exp(-rT) × max(S(T) - K, 0)`.
    #[inline]
    pub fn direct_payoff(&self, z: f64) -> f64 {
        self.discount * self.intrinsic(z)
    }

    /// Antithetic payoff sample from one draw.
    ///
    /// Prices the path driven by `z` and its mirror driven by `-z` and
    /// returns `0.5 × exp(-rT) × (max(S₁ - K, 0) + max(S₂ - K, 0))`. The pair
    /// is a single sample: it must be fed to the accumulator once.
    #[inline]
    pub fn antithetic_payoff(&self, z: f64) -> f64 {
        0.5 * self.discount * (self.intrinsic(z) + self.intrinsic(-z))
    }
}
