//! Running aggregates that support removal.
//!
//! Only finite observations ever reach an aggregate; the window keeps count
//! of the non-finite ones separately. Removal cancels against everything
//! inserted since the last rebuild, so each aggregate remembers the largest
//! value its sum of squares has reached and asks to be rebuilt from the
//! window once the current sum has fallen far below it, or once an
//! overflowing square has left it non-finite.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use num_traits::Float;

use crate::{count_to, non_negative};

/// Rebuild once the sum of squares falls this far below its peak.
const RESCAN_RATIO: usize = 1 << 10;

/// Whether `current` has lost too much precision relative to `peak`.
fn cancelled<T: Float>(current: T, peak: T) -> bool {
    !current.is_finite() || current * count_to(RESCAN_RATIO) < peak
}

/// An aggregate over a multiset of finite values.
pub(crate) trait Aggregate<T> {
    /// Add `x` to the multiset.
    fn insert(&mut self, x: T);

    /// Remove `x`, which must have been inserted earlier.
    fn remove(&mut self, x: T);

    /// Replace `old` (present) with `new`, keeping the count.
    fn replace(&mut self, old: T, new: T) {
        self.remove(old);
        self.insert(new);
    }

    /// Forget everything.
    fn clear(&mut self);

    /// Whether removals have eroded the aggregate enough that it should be
    /// rebuilt from the values still in the window.
    fn needs_rescan(&self) -> bool;
}

/// Welford's running mean and sum of squared deviations from it (`M2`).
///
/// Insertion follows Welford (1962); removal runs the update backwards and
/// replacement applies both in a single step, which is what a full window
/// does on every push.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct Welford<T> {
    count: usize,
    mean: T,
    m2: T,
    /// Largest `m2` since the last clear.
    peak: T,
}

impl<T: Float> Welford<T> {
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
            m2: T::zero(),
            peak: T::zero(),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn mean(&self) -> T {
        self.mean
    }

    pub(crate) fn m2(&self) -> T {
        self.m2
    }
}

impl<T: Float> Aggregate<T> for Welford<T> {
    fn insert(&mut self, x: T) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean = self.mean + delta / count_to(self.count);
        self.m2 = self.m2 + delta * (x - self.mean);
        self.peak = self.peak.max(self.m2);
    }

    fn remove(&mut self, x: T) {
        if self.count <= 1 {
            self.clear();
            return;
        }
        self.count -= 1;
        let delta = x - self.mean;
        self.mean = self.mean - delta / count_to(self.count);
        self.m2 = non_negative(self.m2 - delta * (x - self.mean));
    }

    fn replace(&mut self, old: T, new: T) {
        if self.count <= 1 {
            self.count = 1;
            self.mean = new;
            self.m2 = T::zero();
            return;
        }
        let delta = new - old;
        let prev = self.mean;
        self.mean = self.mean + delta / count_to(self.count);
        self.m2 = non_negative(self.m2 + delta * (new - self.mean + old - prev));
        self.peak = self.peak.max(self.m2);
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn needs_rescan(&self) -> bool {
        !self.mean.is_finite() || cancelled(self.m2, self.peak)
    }
}

/// Sum of squared deviations from a fixed, known mean.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct KnownMean<T> {
    mean: T,
    count: usize,
    sum_sq: T,
    peak: T,
}

impl<T: Float> KnownMean<T> {
    pub(crate) fn new(mean: T) -> Self {
        Self {
            mean,
            count: 0,
            sum_sq: T::zero(),
            peak: T::zero(),
        }
    }

    pub(crate) fn mean(&self) -> T {
        self.mean
    }

    pub(crate) fn sum_sq(&self) -> T {
        self.sum_sq
    }

    fn sq_dev(&self, x: T) -> T {
        let d = x - self.mean;
        d * d
    }
}

impl<T: Float> Aggregate<T> for KnownMean<T> {
    fn insert(&mut self, x: T) {
        self.count += 1;
        self.sum_sq = self.sum_sq + self.sq_dev(x);
        self.peak = self.peak.max(self.sum_sq);
    }

    fn remove(&mut self, x: T) {
        if self.count <= 1 {
            self.clear();
            return;
        }
        self.count -= 1;
        self.sum_sq = non_negative(self.sum_sq - self.sq_dev(x));
    }

    fn replace(&mut self, old: T, new: T) {
        if self.count <= 1 {
            self.count = 1;
            self.sum_sq = self.sq_dev(new);
            return;
        }
        self.sum_sq = non_negative(self.sum_sq + self.sq_dev(new) - self.sq_dev(old));
        self.peak = self.peak.max(self.sum_sq);
    }

    fn clear(&mut self) {
        self.count = 0;
        self.sum_sq = T::zero();
        self.peak = T::zero();
    }

    // A NaN mean poisons every result; rebuilding cannot help.
    fn needs_rescan(&self) -> bool {
        !self.mean.is_nan() && cancelled(self.sum_sq, self.peak)
    }
}
