//! Complex `y := alpha * x + y` over interleaved buffers (`caxpy`, `zaxpy`).
//!
//! Element `k` of a vector occupies scalar slots `2k` (real part) and
//! `2k + 1` (imaginary part). Strides and offsets are in elements.

use num_complex::{Complex, Complex32, Complex64};
use num_traits::Float;
use sn_core::{stride_to_offset, Stride, StridedIndices};

/// Generic complex axpy over explicit offsets.
///
/// For each `k` in `0..n`, with `ix = offset_x + k * stride_x` and
/// `iy = offset_y + k * stride_y`:
///
/// ```text
/// y[2iy]     += ar * x[2ix] - ai * x[2ix + 1]
/// y[2iy + 1] += ar * x[2ix + 1] + ai * x[2ix]
/// ```
///
/// Returns `y` unchanged when `n <= 0` or `alpha == 0 + 0i`.
#[allow(clippy::too_many_arguments)]
pub fn complex_axpy_ndarray<'y, T: Float>(
    n: isize,
    alpha: Complex<T>,
    x: &[T],
    stride_x: Stride,
    offset_x: usize,
    y: &'y mut [T],
    stride_y: Stride,
    offset_y: usize,
) -> &'y mut [T] {
    if n <= 0 || (alpha.re == T::zero() && alpha.im == T::zero()) {
        return y;
    }
    let (ar, ai) = (alpha.re, alpha.im);
    let ix = StridedIndices::new(n, stride_x, offset_x);
    let iy = StridedIndices::new(n, stride_y, offset_y);
    for (i, j) in ix.zip(iy) {
        let (xr, xi) = (x[2 * i], x[2 * i + 1]);
        y[2 * j] = y[2 * j] + (ar * xr - ai * xi);
        y[2 * j + 1] = y[2 * j + 1] + (ar * xi + ai * xr);
    }
    y
}

/// Single-precision complex axpy; negative strides start at the last
/// element.
///
/// # Example
/// ```
/// use num_complex::Complex32;
/// use sn_blas::caxpy;
///
/// let x = [1.0f32, 2.0, 3.0, 4.0];
/// let mut y = [1.0f32, 1.0, 1.0, 1.0];
/// caxpy(2, Complex32::new(2.0, 2.0), &x, 1, &mut y, 1);
/// assert_eq!(y, [-1.0, 7.0, -1.0, 15.0]);
/// ```
pub fn caxpy<'y>(
    n: isize,
    alpha: Complex32,
    x: &[f32],
    stride_x: Stride,
    y: &'y mut [f32],
    stride_y: Stride,
) -> &'y mut [f32] {
    let ox = stride_to_offset(n, stride_x);
    let oy = stride_to_offset(n, stride_y);
    complex_axpy_ndarray(n, alpha, x, stride_x, ox, y, stride_y, oy)
}

/// Single-precision complex axpy with explicit offsets.
#[allow(clippy::too_many_arguments)]
pub fn caxpy_ndarray<'y>(
    n: isize,
    alpha: Complex32,
    x: &[f32],
    stride_x: Stride,
    offset_x: usize,
    y: &'y mut [f32],
    stride_y: Stride,
    offset_y: usize,
) -> &'y mut [f32] {
    complex_axpy_ndarray(n, alpha, x, stride_x, offset_x, y, stride_y, offset_y)
}

/// Double-precision complex axpy; negative strides start at the last
/// element.
pub fn zaxpy<'y>(
    n: isize,
    alpha: Complex64,
    x: &[f64],
    stride_x: Stride,
    y: &'y mut [f64],
    stride_y: Stride,
) -> &'y mut [f64] {
    let ox = stride_to_offset(n, stride_x);
    let oy = stride_to_offset(n, stride_y);
    complex_axpy_ndarray(n, alpha, x, stride_x, ox, y, stride_y, oy)
}

/// Double-precision complex axpy with explicit offsets.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use sn_blas::zaxpy_ndarray;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let mut y = [0.0; 6];
/// // The last two elements of x, into the first two elements of y.
/// zaxpy_ndarray(2, Complex64::new(0.0, 1.0), &x, 1, 1, &mut y, 1, 0);
/// assert_eq!(y, [-4.0, 3.0, -6.0, 5.0, 0.0, 0.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn zaxpy_ndarray<'y>(
    n: isize,
    alpha: Complex64,
    x: &[f64],
    stride_x: Stride,
    offset_x: usize,
    y: &'y mut [f64],
    stride_y: Stride,
    offset_y: usize,
) -> &'y mut [f64] {
    complex_axpy_ndarray(n, alpha, x, stride_x, offset_x, y, stride_y, offset_y)
}
