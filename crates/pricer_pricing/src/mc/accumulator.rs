//! Single-pass accumulation of the running mean and second moment.
//!
//! For the k-th sample (k starting at 1):
//!
//! ```text
//! mean_k   = (1 - 1/k) × mean_{k-1}   + (1/k) × x_k
//! second_k = (1 - 1/k) × second_{k-1} + (1/k) × x_k²
//! ```
//!
//! With k = 1 the recurrence reduces to `mean_1 = x_1` and
//! `second_1 = x_1²`. Memory use is O(1) regardless of the replicate count.

/// Running mean and running second moment of a payoff stream.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MomentAccumulator;
///
/// let mut acc = MomentAccumulator::new();
/// for x in [1.0, 2.0, 3.0, 4.0] {
///     acc.update(x);
/// }
///
/// assert_eq!(acc.count(), 4);
/// assert!((acc.mean() - 2.5).abs() < 1e-12);
/// assert!((acc.second_moment() - 7.5).abs() < 1e-12);
/// assert!((acc.sample_variance().unwrap() - 1.25).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MomentAccumulator {
    count: u64,
    mean: f64,
    second_moment: f64,
}

impl MomentAccumulator {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests one sample in O(1) time and space.
    #[inline]
    pub fn update(&mut self, x: f64) {
        self.count += 1;
        let weight = 1.0 / self.count as f64;
        self.mean = (1.0 - weight) * self.mean + weight * x;
        self.second_moment = (1.0 - weight) * self.second_moment + weight * x * x;
    }

    /// Number of samples ingested.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running mean (0.0 when empty).
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Running second moment (0.0 when empty).
    #[inline]
    pub fn second_moment(&self) -> f64 {
        self.second_moment
    }

    /// `second_moment - mean²`, clamped at zero.
    ///
    /// Cancellation can leave a tiny negative difference for near-constant
    /// streams; the clamp keeps a later square root from producing NaN.
    /// Returns `None` before the first sample.
    pub fn sample_variance(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some((self.second_moment - self.mean * self.mean).max(0.0))
    }

    /// `sqrt(sample_variance / N)`; `None` before the first sample.
    pub fn standard_error(&self) -> Option<f64> {
        self.sample_variance()
            .map(|variance| (variance / self.count as f64).sqrt())
    }
}
