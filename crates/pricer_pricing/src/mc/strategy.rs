//! Sampling strategy selection.

use std::fmt;

use super::model::TerminalPriceModel;
use crate::rng::NormalSource;

/// How a single payoff sample is produced from the random normal source.
///
/// Both strategies consume exactly one draw per sample.
///
/// - `Direct`: one path, `exp(-rT) × max(S(T) - K, 0)`
/// - `Antithetic`: the draw and its negation priced together and averaged
///   into one sample
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SamplingStrategy {
    /// Plain Monte Carlo sampling.
    Direct,
    /// Antithetic-variate pairing of `z` and `-z`.
    Antithetic,
}

impl SamplingStrategy {
    /// Both strategies, in the order a full report runs them.
    pub const ALL: [SamplingStrategy; 2] = [SamplingStrategy::Direct, SamplingStrategy::Antithetic];

    /// Draws one payoff sample.
    #[inline]
    pub fn sample<R: NormalSource + ?Sized>(self, model: &TerminalPriceModel, rng: &mut R) -> f64 {
        let z = rng.next_normal();
        match self {
            SamplingStrategy::Direct => model.direct_payoff(z),
            SamplingStrategy::Antithetic => model.antithetic_payoff(z),
        }
    }

    /// Lower-case identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingStrategy::Direct => "direct",
            SamplingStrategy::Antithetic => "antithetic",
        }
    }

    /// Capitalised name used in report labels.
    pub fn title(&self) -> &'static str {
        match self {
            SamplingStrategy::Direct => "Direct",
            SamplingStrategy::Antithetic => "Antithetic",
        }
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
