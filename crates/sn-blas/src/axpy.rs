//! Real `y := alpha * x + y` (`saxpy`, `daxpy`).

use num_traits::Float;
use sn_core::{stride_to_offset, Stride, StridedIndices};

/// Unroll factor of the unit-stride path.
const M: usize = 4;

/// Generic real axpy over explicit offsets.
///
/// Returns `y` unchanged when `n <= 0` or `alpha == 0`.
///
/// # Example
/// ```
/// use sn_blas::axpy_ndarray;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let mut y = [1.0; 5];
/// // Every other element of x, starting at index 1, into the tail of y.
/// axpy_ndarray(2, 5.0, &x, 2, 1, &mut y, 1, 3);
/// assert_eq!(y, [1.0, 1.0, 1.0, 11.0, 21.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn axpy_ndarray<'y, T: Float>(
    n: isize,
    alpha: T,
    x: &[T],
    stride_x: Stride,
    offset_x: usize,
    y: &'y mut [T],
    stride_y: Stride,
    offset_y: usize,
) -> &'y mut [T] {
    if n <= 0 || alpha == T::zero() {
        return y;
    }
    if stride_x == 1 && stride_y == 1 {
        let n = n as usize;
        let xs = &x[offset_x..offset_x + n];
        let ys = &mut y[offset_y..offset_y + n];
        let head = n % M;
        for (yi, &xi) in ys[..head].iter_mut().zip(&xs[..head]) {
            *yi = *yi + alpha * xi;
        }
        for (yc, xc) in ys[head..]
            .chunks_exact_mut(M)
            .zip(xs[head..].chunks_exact(M))
        {
            yc[0] = yc[0] + alpha * xc[0];
            yc[1] = yc[1] + alpha * xc[1];
            yc[2] = yc[2] + alpha * xc[2];
            yc[3] = yc[3] + alpha * xc[3];
        }
        return y;
    }
    let ix = StridedIndices::new(n, stride_x, offset_x);
    let iy = StridedIndices::new(n, stride_y, offset_y);
    for (i, j) in ix.zip(iy) {
        y[j] = y[j] + alpha * x[i];
    }
    y
}

/// Single-precision axpy; negative strides start at the last element.
pub fn saxpy<'y>(
    n: isize,
    alpha: f32,
    x: &[f32],
    stride_x: Stride,
    y: &'y mut [f32],
    stride_y: Stride,
) -> &'y mut [f32] {
    let ox = stride_to_offset(n, stride_x);
    let oy = stride_to_offset(n, stride_y);
    axpy_ndarray(n, alpha, x, stride_x, ox, y, stride_y, oy)
}

/// Single-precision axpy with explicit offsets.
#[allow(clippy::too_many_arguments)]
pub fn saxpy_ndarray<'y>(
    n: isize,
    alpha: f32,
    x: &[f32],
    stride_x: Stride,
    offset_x: usize,
    y: &'y mut [f32],
    stride_y: Stride,
    offset_y: usize,
) -> &'y mut [f32] {
    axpy_ndarray(n, alpha, x, stride_x, offset_x, y, stride_y, offset_y)
}

/// Double-precision axpy; negative strides start at the last element.
///
/// # Example
/// ```
/// use sn_blas::daxpy;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let mut y = [1.0; 5];
/// daxpy(5, 5.0, &x, 1, &mut y, 1);
/// assert_eq!(y, [6.0, 11.0, 16.0, 21.0, 26.0]);
/// ```
pub fn daxpy<'y>(
    n: isize,
    alpha: f64,
    x: &[f64],
    stride_x: Stride,
    y: &'y mut [f64],
    stride_y: Stride,
) -> &'y mut [f64] {
    let ox = stride_to_offset(n, stride_x);
    let oy = stride_to_offset(n, stride_y);
    axpy_ndarray(n, alpha, x, stride_x, ox, y, stride_y, oy)
}

/// Double-precision axpy with explicit offsets.
#[allow(clippy::too_many_arguments)]
pub fn daxpy_ndarray<'y>(
    n: isize,
    alpha: f64,
    x: &[f64],
    stride_x: Stride,
    offset_x: usize,
    y: &'y mut [f64],
    stride_y: Stride,
    offset_y: usize,
) -> &'y mut [f64] {
    axpy_ndarray(n, alpha, x, stride_x, offset_x, y, stride_y, offset_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn daxpy_unit_stride() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let mut y = [1.0; 7];
        daxpy(7, 2.0, &x, 1, &mut y, 1);
        assert_eq!(y, [3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0]);
    }

    #[test]
    fn daxpy_partial_length_leaves_tail() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y = [0.0; 6];
        daxpy(5, 1.0, &x, 1, &mut y, 1);
        assert_eq!(y, [1.0, 2.0, 3.0, 4.0, 5.0, 0.0]);
    }

    #[test]
    fn daxpy_mixed_strides() {
        // x walked forward by 2, y walked backward.
        let x = [1.0, -2.0, 3.0, -4.0, 5.0, -6.0];
        let mut y = [7.0, 8.0, 9.0];
        daxpy(3, 1.0, &x, 2, &mut y, -1);
        // y[2] += x[0], y[1] += x[2], y[0] += x[4]
        assert_eq!(y, [12.0, 11.0, 10.0]);
    }

    #[test]
    fn daxpy_ndarray_offsets() {
        let x = [0.0, 0.0, 1.0, 2.0, 3.0];
        let mut y = [10.0, 20.0, 30.0, 40.0];
        daxpy_ndarray(3, -1.0, &x, 1, 2, &mut y, 1, 1);
        assert_eq!(y, [10.0, 19.0, 28.0, 37.0]);
    }

    #[test]
    fn quick_returns() {
        let x = [1.0, 2.0];
        let mut y = [3.0, 4.0];
        daxpy(0, 1.0, &x, 1, &mut y, 1);
        daxpy(-2, 1.0, &x, 1, &mut y, 1);
        daxpy(2, 0.0, &x, 1, &mut y, 1);
        assert_eq!(y, [3.0, 4.0]);
    }

    #[test]
    fn returns_same_buffer() {
        let x = [1.0, 2.0];
        let mut y = [3.0, 4.0];
        let ptr = y.as_ptr();
        let out = daxpy(2, 1.0, &x, 1, &mut y, 1);
        assert_eq!(out.as_ptr(), ptr);
    }

    #[test]
    fn saxpy_matches_daxpy() {
        let xd = [0.5, -1.25, 2.0, 3.5, -0.75];
        let mut yd = [1.0, 1.0, -1.0, 0.0, 2.0];
        let xs = xd.map(|v| v as f32);
        let mut ys = yd.map(|v| v as f32);
        daxpy(5, 0.3, &xd, -1, &mut yd, 1);
        saxpy(5, 0.3, &xs, -1, &mut ys, 1);
        for (s, d) in ys.iter().zip(&yd) {
            assert_abs_diff_eq!(f64::from(*s), *d, epsilon = 1e-6);
        }
    }

    #[test]
    fn saxpy_ndarray_strided() {
        let x = [1.0f32, 2.0, 3.0, 4.0];
        let mut y = [0.0f32; 4];
        saxpy_ndarray(2, 2.0, &x, 2, 1, &mut y, 2, 0);
        assert_eq!(y, [4.0, 0.0, 8.0, 0.0]);
    }
}
