//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded PRNG wrapper that offers
//! reproducible standard normal draws, and the [`NormalSource`] trait the
//! simulation engine samples through.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// A source of independent standard normal draws.
///
/// The simulation engine is generic over this trait so that tests can feed
/// literal draw sequences through the payoff and accumulator code.
pub trait NormalSource {
    /// Returns the next draw from N(0, 1).
    fn next_normal(&mut self) -> f64;
}

/// Monte Carlo simulation random number generator.
///
/// Wraps `StdRng` and samples N(0, 1) with the Ziggurat method via
/// `rand_distr::StandardNormal`.
///
/// Every instance records the 64-bit seed it was initialised from, including
/// instances seeded from OS entropy, so an entropy-seeded run can be replayed
/// by configuring the logged seed.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng1 = PricerRng::from_seed(12345);
/// let mut rng2 = PricerRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// assert!(rng1.is_fixed_seed());
/// ```
pub struct PricerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
    /// Whether the seed came from configuration rather than OS entropy.
    fixed: bool,
}

impl PricerRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of draws.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
            fixed: true,
        }
    }

    /// Creates a new RNG instance seeded from the operating system's
    /// entropy source.
    pub fn from_entropy() -> Self {
        let seed = OsRng.next_u64();
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
            fixed: false,
        }
    }

    /// Creates an RNG from an optional configured seed.
    ///
    /// `None` selects OS entropy; `Some(seed)` gives a reproducible stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// assert!(PricerRng::new(Some(7)).is_fixed_seed());
    /// assert!(!PricerRng::new(None).is_fixed_seed());
    /// ```
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation.
    ///
    /// This is useful for logging and debugging reproducibility issues.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns `true` when the seed was supplied by configuration.
    #[inline]
    pub fn is_fixed_seed(&self) -> bool {
        self.fixed
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// # Algorithm Reference
    ///
    /// - Marsaglia, G. & Tsang, W. W. (2000). "The Ziggurat Method for
    ///   Generating Random Variables". Journal of Statistical Software.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }
}

impl NormalSource for PricerRng {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        self.gen_normal()
    }
}

impl std::fmt::Debug for PricerRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricerRng")
            .field("seed", &self.seed)
            .field("fixed", &self.fixed)
            .finish_non_exhaustive()
    }
}
