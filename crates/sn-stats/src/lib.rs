//! # sn-stats
//!
//! Statistics over streams and strided buffers.
//!
//! The moving-window accumulators keep the last `capacity` observations in
//! a ring buffer and update running aggregates in O(1) per push, so the
//! reported statistic always describes exactly the current window. A NaN
//! anywhere in the window makes the statistic NaN until it ages out.
//!
//! ```
//! use sn_stats::{MovingStdDev, WindowedStatistic};
//!
//! let mut acc = MovingStdDev::<f64>::new(3).unwrap();
//! assert_eq!(acc.value(), None);
//! acc.push(2.0);
//! acc.push(3.0);
//! acc.push(2.0);
//! let s = acc.push(1.0); // window is now [3, 2, 1]
//! assert!((s - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use num_traits::Float;

// ── Modules ───────────────────────────────────────────────────────────────────

/// Running aggregates that support removal.
mod moments;

/// Moving arithmetic mean.
pub mod moving_mean;

/// Moving corrected standard deviation.
pub mod moving_stdev;

/// Moving corrected variance.
pub mod moving_variance;

/// Fixed-capacity circular buffer.
pub mod ring_buffer;

/// Batch statistics over strided buffers.
pub mod strided;

/// The `WindowedStatistic` trait.
pub mod traits;

/// Window bookkeeping shared by the moving accumulators.
pub mod window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use moving_mean::MovingMean;
pub use moving_stdev::MovingStdDev;
pub use moving_variance::MovingVariance;
pub use ring_buffer::RingBuffer;
pub use traits::WindowedStatistic;
pub use window::WindowState;

/// Convert a count to `T`; every count fits in `f32`/`f64` up to rounding.
#[inline]
pub(crate) fn count_to<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// `max(v, 0)` that keeps NaN instead of discarding it.
#[inline]
pub(crate) fn non_negative<T: Float>(v: T) -> T {
    if v < T::zero() {
        T::zero()
    } else {
        v
    }
}
