//! Accessor-generic `y := alpha * x + y`.
//!
//! Works on anything implementing [`Accessor`] / [`AccessorMut`] whose
//! element type supports `*` and `+`: plain real slices, slices of
//! [`num_complex::Complex`], or interleaved complex views.

use std::ops::{Add, Mul};

use sn_core::{stride_to_offset, Stride, StridedIndices};

use crate::accessor::{Accessor, AccessorMut};

/// Generic axpy over accessors with explicit offsets.
///
/// Unlike the typed kernels there is no `alpha == 0` quick return, since
/// the element type has no notion of zero here; `n <= 0` still returns `y`
/// untouched.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use sn_blas::{gaxpy_ndarray, Interleaved, InterleavedMut};
///
/// let xs = [1.0, 2.0, 3.0, 4.0];
/// let mut ys = [0.0; 4];
/// let x = Interleaved::new(&xs);
/// let mut y = InterleavedMut::new(&mut ys);
/// gaxpy_ndarray(2, Complex64::new(2.0, 0.0), &x, 1, 0, &mut y, 1, 0);
/// assert_eq!(ys, [2.0, 4.0, 6.0, 8.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn gaxpy_ndarray<'y, X, Y, E>(
    n: isize,
    alpha: E,
    x: &X,
    stride_x: Stride,
    offset_x: usize,
    y: &'y mut Y,
    stride_y: Stride,
    offset_y: usize,
) -> &'y mut Y
where
    X: Accessor<Item = E> + ?Sized,
    Y: AccessorMut<Item = E> + ?Sized,
    E: Copy + Mul<Output = E> + Add<Output = E>,
{
    let ix = StridedIndices::new(n, stride_x, offset_x);
    let iy = StridedIndices::new(n, stride_y, offset_y);
    for (i, j) in ix.zip(iy) {
        let updated = alpha * x.get(i) + y.get(j);
        y.set(j, updated);
    }
    y
}

/// Generic axpy over accessors; negative strides start at the last element.
pub fn gaxpy<'y, X, Y, E>(
    n: isize,
    alpha: E,
    x: &X,
    stride_x: Stride,
    y: &'y mut Y,
    stride_y: Stride,
) -> &'y mut Y
where
    X: Accessor<Item = E> + ?Sized,
    Y: AccessorMut<Item = E> + ?Sized,
    E: Copy + Mul<Output = E> + Add<Output = E>,
{
    let ox = stride_to_offset(n, stride_x);
    let oy = stride_to_offset(n, stride_y);
    gaxpy_ndarray(n, alpha, x, stride_x, ox, y, stride_y, oy)
}
