//! Moving corrected variance.
//!
//! Two modes share one window:
//!
//! - **estimated mean**: the window mean is tracked with Welford's update
//!   and the variance is `M2 / (w - 1)`; a single observation has variance
//!   exactly `0`.
//! - **known mean**: the sum of squared deviations from a fixed mean `μ` is
//!   tracked and divided by `w - 1`; a single observation has variance
//!   `(x - μ)²`.
//!
//! Here `w` is the number of observations in the window. A NaN in the
//! window (or a NaN known mean) gives NaN. An infinity in the window gives
//! NaN with an estimated mean and `+inf` with a known mean.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use num_traits::Float;
use sn_core::{ensure, Real, Result};

use crate::count_to;
use crate::moments::{Aggregate, KnownMean, Welford};
use crate::traits::WindowedStatistic;
use crate::window::{Window, WindowState};

/// How deviations are centred.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) enum Centering<T> {
    Estimated(Welford<T>),
    Known(KnownMean<T>),
}

impl<T: Float> Aggregate<T> for Centering<T> {
    fn insert(&mut self, x: T) {
        match self {
            Self::Estimated(w) => w.insert(x),
            Self::Known(k) => k.insert(x),
        }
    }

    fn remove(&mut self, x: T) {
        match self {
            Self::Estimated(w) => w.remove(x),
            Self::Known(k) => k.remove(x),
        }
    }

    fn replace(&mut self, old: T, new: T) {
        match self {
            Self::Estimated(w) => w.replace(old, new),
            Self::Known(k) => k.replace(old, new),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Estimated(w) => w.clear(),
            Self::Known(k) => k.clear(),
        }
    }

    fn needs_rescan(&self) -> bool {
        match self {
            Self::Estimated(w) => w.needs_rescan(),
            Self::Known(k) => k.needs_rescan(),
        }
    }
}

/// Corrected sample variance of the last `capacity` observations.
///
/// # Example
/// ```
/// use sn_stats::{MovingVariance, WindowedStatistic};
///
/// let mut acc = MovingVariance::<f64>::new(3).unwrap();
/// assert_eq!(acc.push(1.0), 0.0);
/// assert_eq!(acc.push(3.0), 2.0);
///
/// let mut known = MovingVariance::<f64>::with_mean(3, 0.0).unwrap();
/// assert_eq!(known.push(2.0), 4.0);
/// assert_eq!(known.push(-2.0), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MovingVariance<T = Real> {
    window: Window<T, Centering<T>>,
}

impl<T: Float> MovingVariance<T> {
    /// Create an accumulator that estimates the mean from the window.
    ///
    /// Fails with `Error::InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            window: Window::new(capacity, Centering::Estimated(Welford::new()))?,
        })
    }

    /// Create an accumulator centred on a fixed, known `mean`.
    ///
    /// A NaN `mean` is accepted and makes every result NaN. Fails with
    /// `Error::InvalidArgument` if `capacity` is zero or `mean` is infinite.
    pub fn with_mean(capacity: usize, mean: T) -> Result<Self> {
        ensure!(!mean.is_infinite(), "known mean must be finite or NaN");
        Ok(Self {
            window: Window::new(capacity, Centering::Known(KnownMean::new(mean)))?,
        })
    }

    /// The fixed mean, if this accumulator was built with one.
    pub fn known_mean(&self) -> Option<T> {
        match self.window.aggregate() {
            Centering::Estimated(_) => None,
            Centering::Known(k) => Some(k.mean()),
        }
    }

    fn current(&self) -> T {
        let w = &self.window;
        let n = w.len();
        match w.aggregate() {
            Centering::Estimated(welford) => {
                if w.has_nan() || w.has_inf() {
                    return T::nan();
                }
                debug_assert_eq!(welford.count(), n);
                if n == 1 {
                    T::zero()
                } else {
                    welford.m2() / count_to(n - 1)
                }
            }
            Centering::Known(known) => {
                if w.has_nan() || known.mean().is_nan() {
                    return T::nan();
                }
                if w.has_inf() {
                    return T::infinity();
                }
                known.sum_sq() / count_to(n.max(2) - 1)
            }
        }
    }
}

impl<T: Float> WindowedStatistic<T> for MovingVariance<T> {
    fn push(&mut self, x: T) -> T {
        self.window.push(x);
        self.current()
    }

    fn value(&self) -> Option<T> {
        (self.window.len() > 0).then(|| self.current())
    }

    fn reset(&mut self) {
        self.window.clear();
    }

    fn capacity(&self) -> usize {
        self.window.capacity()
    }

    fn len(&self) -> usize {
        self.window.len()
    }

    fn state(&self) -> WindowState {
        self.window.state()
    }
}
