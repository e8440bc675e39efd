//! Moving corrected standard deviation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use num_traits::Float;
use sn_core::{Real, Result};

use crate::moving_variance::MovingVariance;
use crate::traits::WindowedStatistic;
use crate::window::WindowState;

/// Corrected sample standard deviation of the last `capacity` observations.
///
/// The square root of [`MovingVariance`], with the same two modes:
///
/// - [`new`](Self::new) estimates the mean from the window. A window of one
///   finite value reports exactly `0`.
/// - [`with_mean`](Self::with_mean) centres on a fixed mean `μ`. A window of
///   one value `x` reports `|x - μ|`.
///
/// A NaN in the window makes the result NaN until `capacity` further pushes
/// have evicted it.
///
/// # Example
/// ```
/// use sn_stats::{MovingStdDev, WindowedStatistic};
///
/// let mut acc = MovingStdDev::<f64>::with_mean(1, 3.0).unwrap();
/// assert_eq!(acc.push(5.0), 2.0);
/// assert_eq!(acc.push(1.0), 2.0);
/// assert_eq!(acc.value(), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MovingStdDev<T = Real> {
    variance: MovingVariance<T>,
}

impl<T: Float> MovingStdDev<T> {
    /// Create an accumulator that estimates the mean from the window.
    ///
    /// Fails with `Error::InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            variance: MovingVariance::new(capacity)?,
        })
    }

    /// Create an accumulator centred on a fixed, known `mean`.
    ///
    /// Fails with `Error::InvalidArgument` if `capacity` is zero or `mean`
    /// is infinite. A NaN `mean` is accepted and makes every result NaN.
    pub fn with_mean(capacity: usize, mean: T) -> Result<Self> {
        Ok(Self {
            variance: MovingVariance::with_mean(capacity, mean)?,
        })
    }

    /// The fixed mean, if this accumulator was built with one.
    pub fn known_mean(&self) -> Option<T> {
        self.variance.known_mean()
    }
}

impl<T: Float> WindowedStatistic<T> for MovingStdDev<T> {
    fn push(&mut self, x: T) -> T {
        self.variance.push(x).sqrt()
    }

    fn value(&self) -> Option<T> {
        self.variance.value().map(Float::sqrt)
    }

    fn reset(&mut self) {
        self.variance.reset();
    }

    fn capacity(&self) -> usize {
        self.variance.capacity()
    }

    fn len(&self) -> usize {
        self.variance.len()
    }

    fn state(&self) -> WindowState {
        self.variance.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sliding_stdev() {
        let mut acc = MovingStdDev::new(3).unwrap();
        let out = acc.process(&[2.0, 3.0, 2.0, 4.0, 3.0, 4.0]);
        let expected = [
            0.0,
            0.5f64.sqrt(),
            (1.0f64 / 3.0).sqrt(),
            1.0,
            1.0,
            (1.0f64 / 3.0).sqrt(),
        ];
        for (o, e) in out.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*o, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn capacity_one_estimated_mean_is_zero() {
        let mut acc = MovingStdDev::new(1).unwrap();
        for x in [3.0, -1e6, 0.1, 42.0] {
            assert_eq!(acc.push(x), 0.0);
        }
    }

    #[test]
    fn capacity_one_known_mean_is_deviation() {
        let mut acc = MovingStdDev::with_mean(1, 0.5).unwrap();
        assert_abs_diff_eq!(acc.push(3.0), 2.5, epsilon = 1e-15);
        assert_abs_diff_eq!(acc.push(-1.5), 2.0, epsilon = 1e-15);
        assert_eq!(acc.push(0.5), 0.0);
    }

    #[test]
    fn capacity_one_nan_clears_on_next_push() {
        let mut acc = MovingStdDev::new(1).unwrap();
        acc.push(1.0);
        assert!(acc.push(f64::NAN).is_nan());
        assert!(acc.value().unwrap().is_nan());
        assert_eq!(acc.push(2.0), 0.0);
    }

    #[test]
    fn peek_does_not_mutate() {
        let mut acc = MovingStdDev::new(3).unwrap();
        assert_eq!(acc.value(), None);
        assert_eq!(acc.value(), None);
        acc.push(1.0);
        acc.push(5.0);
        let first = acc.value();
        assert_eq!(acc.value(), first);
        assert_eq!(acc.value(), first);
        assert_eq!(acc.len(), 2);
    }

    #[test]
    fn state_machine() {
        let mut acc = MovingStdDev::<f32>::new(2).unwrap();
        assert_eq!(acc.state(), WindowState::Empty);
        acc.push(1.0);
        assert_eq!(acc.state(), WindowState::Partial(1));
        acc.push(1.0);
        assert_eq!(acc.state(), WindowState::Full);
        acc.push(1.0);
        assert_eq!(acc.state(), WindowState::Full);
        acc.reset();
        assert_eq!(acc.state(), WindowState::Empty);
        assert_eq!(acc.value(), None);
    }
}
