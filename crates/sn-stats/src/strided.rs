//! Batch statistics over strided buffers.
//!
//! Each function reads the `n` elements at `offset + k * stride`. The
//! variance uses a two-pass algorithm: the mean first, then the squared
//! deviations with Neely's correction term
//!
//! ```text
//! var = (Σd² − (Σd)² / n) / (n − c)
//! ```
//!
//! where `d = x − mean` and `c` is the degrees-of-freedom correction
//! (`1` for the sample variance, `0` for the population variance).

use num_traits::Float;
use sn_core::{stride_to_offset, Stride, StridedIndices};

use crate::count_to;

/// Arithmetic mean; NaN when `n <= 0`.
pub fn mean_ndarray<T: Float>(n: isize, x: &[T], stride: Stride, offset: usize) -> T {
    if n <= 0 {
        return T::nan();
    }
    let sum = StridedIndices::new(n, stride, offset).fold(T::zero(), |acc, i| acc + x[i]);
    sum / count_to(n as usize)
}

/// Arithmetic mean; negative strides start at the last element.
pub fn mean<T: Float>(n: isize, x: &[T], stride: Stride) -> T {
    mean_ndarray(n, x, stride, stride_to_offset(n, stride))
}

/// Variance with correction `correction`.
///
/// NaN when `n <= 0` or `n - correction <= 0`.
///
/// # Example
/// ```
/// use sn_stats::strided::variance_ndarray;
///
/// let x = [1.0f64, -2.0, 2.0];
/// let v = variance_ndarray(3, 1.0, &x, 1, 0);
/// assert!((v - 13.0 / 3.0).abs() < 1e-12);
/// ```
pub fn variance_ndarray<T: Float>(
    n: isize,
    correction: T,
    x: &[T],
    stride: Stride,
    offset: usize,
) -> T {
    if n <= 0 {
        return T::nan();
    }
    let count: T = count_to(n as usize);
    let dof = count - correction;
    if dof <= T::zero() {
        return T::nan();
    }
    let mu = mean_ndarray(n, x, stride, offset);
    let (m2, m) = StridedIndices::new(n, stride, offset).fold(
        (T::zero(), T::zero()),
        |(m2, m), i| {
            let d = x[i] - mu;
            (m2 + d * d, m + d)
        },
    );
    (m2 - m * m / count) / dof
}

/// Variance; negative strides start at the last element.
pub fn variance<T: Float>(n: isize, correction: T, x: &[T], stride: Stride) -> T {
    variance_ndarray(n, correction, x, stride, stride_to_offset(n, stride))
}

/// Standard deviation with correction `correction`.
pub fn stdev_ndarray<T: Float>(
    n: isize,
    correction: T,
    x: &[T],
    stride: Stride,
    offset: usize,
) -> T {
    variance_ndarray(n, correction, x, stride, offset).sqrt()
}

/// Standard deviation; negative strides start at the last element.
pub fn stdev<T: Float>(n: isize, correction: T, x: &[T], stride: Stride) -> T {
    stdev_ndarray(n, correction, x, stride, stride_to_offset(n, stride))
}
