//! Index arithmetic for strided buffers.
//!
//! A strided vector of `n` logical elements lives in a flat buffer at
//! positions `offset + k * stride` for `k` in `0..n`. Negative strides walk
//! the buffer backwards; [`stride_to_offset`] gives the starting offset that
//! makes a negative-stride traversal begin at the last element in memory.

use crate::Stride;

/// Starting offset for a traversal of `n` elements with step `stride`.
///
/// Returns `(1 - n) * stride` for negative strides and `0` otherwise. An
/// empty traversal (`n <= 0`) always starts at `0`.
///
/// # Example
/// ```
/// use sn_core::stride_to_offset;
/// assert_eq!(stride_to_offset(4, 1), 0);
/// assert_eq!(stride_to_offset(4, -1), 3);
/// assert_eq!(stride_to_offset(3, -2), 4);
/// ```
#[inline]
pub fn stride_to_offset(n: isize, stride: Stride) -> usize {
    if stride < 0 && n > 0 {
        ((1 - n) * stride) as usize
    } else {
        0
    }
}

/// Iterator over the buffer positions `offset + k * stride`, `k` in `0..n`.
///
/// Positions are yielded as `usize`; a geometry that walks below zero wraps
/// to a huge index, so the slice access that consumes it fails loudly.
#[derive(Debug, Clone)]
pub struct StridedIndices {
    next: isize,
    stride: Stride,
    remaining: usize,
}

impl StridedIndices {
    /// Positions of `n` elements starting at `offset` with step `stride`.
    ///
    /// A non-positive `n` yields nothing.
    pub fn new(n: isize, stride: Stride, offset: usize) -> Self {
        Self {
            next: offset as isize,
            stride,
            remaining: n.max(0) as usize,
        }
    }
}

impl Iterator for StridedIndices {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.next += self.stride;
        self.remaining -= 1;
        Some(current as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for StridedIndices {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offset_for_positive_and_zero_stride() {
        assert_eq!(stride_to_offset(10, 1), 0);
        assert_eq!(stride_to_offset(10, 3), 0);
        assert_eq!(stride_to_offset(10, 0), 0);
    }

    #[test]
    fn offset_for_negative_stride() {
        assert_eq!(stride_to_offset(1, -1), 0);
        assert_eq!(stride_to_offset(5, -1), 4);
        assert_eq!(stride_to_offset(5, -3), 12);
    }

    #[test]
    fn offset_for_empty_traversal() {
        assert_eq!(stride_to_offset(0, -2), 0);
        assert_eq!(stride_to_offset(-4, -2), 0);
    }

    #[test]
    fn indices_forward_and_backward() {
        let fwd: Vec<_> = StridedIndices::new(4, 2, 1).collect();
        assert_eq!(fwd, vec![1, 3, 5, 7]);

        let bwd: Vec<_> = StridedIndices::new(4, -1, stride_to_offset(4, -1)).collect();
        assert_eq!(bwd, vec![3, 2, 1, 0]);
    }

    #[test]
    fn indices_zero_stride_repeats() {
        let same: Vec<_> = StridedIndices::new(3, 0, 5).collect();
        assert_eq!(same, vec![5, 5, 5]);
    }

    #[test]
    fn indices_non_positive_count_is_empty() {
        assert_eq!(StridedIndices::new(0, 1, 0).count(), 0);
        assert_eq!(StridedIndices::new(-3, 1, 0).len(), 0);
    }

    proptest! {
        #[test]
        fn negative_stride_visits_reversed_positions(n in 1isize..64, step in 1isize..8) {
            let fwd: Vec<_> = StridedIndices::new(n, step, 0).collect();
            let mut bwd: Vec<_> =
                StridedIndices::new(n, -step, stride_to_offset(n, -step)).collect();
            bwd.reverse();
            prop_assert_eq!(fwd, bwd);
        }
    }
}
