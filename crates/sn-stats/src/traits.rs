//! Common interface of the moving-window accumulators.

use num_traits::Float;

use crate::window::WindowState;

/// A statistic maintained over the last `capacity` pushed values.
pub trait WindowedStatistic<T: Float> {
    /// Push an observation and return the statistic of the updated window.
    ///
    /// Never fails: NaN inputs are retained and make the result NaN until
    /// they leave the window.
    fn push(&mut self, x: T) -> T;

    /// The statistic of the current window without modifying it, or `None`
    /// if nothing has been pushed.
    fn value(&self) -> Option<T>;

    /// Empty the window, keeping capacity and configuration.
    fn reset(&mut self);

    /// Maximum number of observations in the window.
    fn capacity(&self) -> usize;

    /// Number of observations currently in the window.
    fn len(&self) -> usize;

    /// Whether the window is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fill level of the window.
    fn state(&self) -> WindowState;

    /// Push every value of `xs` in order, collecting each result.
    fn process(&mut self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.push(x)).collect()
    }
}
