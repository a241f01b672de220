//! Scoped wall-clock timing for simulation runs.
//!
//! [`ScopedTimer`] records its start on construction and writes the elapsed
//! duration into a caller-owned slot when dropped, so the measurement is
//! taken on every exit path of the timed block. [`timed`] wraps a closure
//! with one.
//!
//! Timing goes through the [`Clock`] trait. [`MonotonicClock`] reads
//! `std::time::Instant`; [`ManualClock`] advances by a fixed tick per reading
//! so reports can be made byte-for-byte reproducible.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that advances by `tick` on every reading.
///
/// Any block timed with it measures exactly one tick.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use pricer_pricing::mc::{timed, ManualClock};
///
/// let clock = ManualClock::new(Duration::from_millis(250));
/// let (value, elapsed) = timed(&clock, || 6 * 7);
/// assert_eq!(value, 42);
/// assert_eq!(elapsed, Duration::from_millis(250));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    tick: Duration,
    readings: Cell<u32>,
}

impl ManualClock {
    /// Creates a clock advancing by `tick` per reading.
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            readings: Cell::new(0),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let readings = self.readings.get();
        self.readings.set(readings.saturating_add(1));
        self.tick.saturating_mul(readings)
    }
}

/// Guard that measures the time between its creation and its drop.
pub struct ScopedTimer<'a, C: Clock + ?Sized> {
    clock: &'a C,
    start: Duration,
    elapsed: &'a mut Duration,
}

impl<'a, C: Clock + ?Sized> ScopedTimer<'a, C> {
    /// Starts timing; the result is written to `elapsed` on drop.
    pub fn start(clock: &'a C, elapsed: &'a mut Duration) -> Self {
        let start = clock.now();
        Self {
            clock,
            start,
            elapsed,
        }
    }
}

impl<C: Clock + ?Sized> Drop for ScopedTimer<'_, C> {
    fn drop(&mut self) {
        *self.elapsed = self.clock.now().saturating_sub(self.start);
    }
}

/// Runs `f` and returns its value together with the elapsed time.
pub fn timed<C, T, F>(clock: &C, f: F) -> (T, Duration)
where
    C: Clock + ?Sized,
    F: FnOnce() -> T,
{
    let mut elapsed = Duration::ZERO;
    let value = {
        let _timer = ScopedTimer::start(clock, &mut elapsed);
        f()
    };
    (value, elapsed)
}
