//! Moving arithmetic mean.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use num_traits::Float;
use sn_core::{Real, Result};

use crate::moments::Welford;
use crate::traits::WindowedStatistic;
use crate::window::{Window, WindowState};

/// Arithmetic mean of the last `capacity` observations.
///
/// Any NaN in the window, or both infinities at once, gives NaN; otherwise
/// an infinity in the window gives that infinity.
///
/// # Example
/// ```
/// use sn_stats::{MovingMean, WindowedStatistic};
///
/// let mut acc = MovingMean::<f64>::new(2).unwrap();
/// assert_eq!(acc.push(2.0), 2.0);
/// assert_eq!(acc.push(4.0), 3.0);
/// assert_eq!(acc.push(8.0), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MovingMean<T = Real> {
    window: Window<T, Welford<T>>,
}

impl<T: Float> MovingMean<T> {
    /// Create an accumulator over a window of `capacity` observations.
    ///
    /// Fails with `Error::InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            window: Window::new(capacity, Welford::new())?,
        })
    }

    fn current(&self) -> T {
        let w = &self.window;
        if w.has_nan() || (w.has_pos_inf() && w.has_neg_inf()) {
            T::nan()
        } else if w.has_pos_inf() {
            T::infinity()
        } else if w.has_neg_inf() {
            T::neg_infinity()
        } else {
            w.aggregate().mean()
        }
    }
}

impl<T: Float> WindowedStatistic<T> for MovingMean<T> {
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
