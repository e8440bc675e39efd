//! Integration tests for the strided axpy kernels.
//!
//! These exercise traversal order, stride/offset geometry, and agreement
//! between the typed kernels and the accessor-generic one.

use approx::assert_relative_eq;
use num_complex::{Complex32, Complex64};
use proptest::prelude::*;
use sn_blas::{
    caxpy, daxpy, gaxpy, stride_to_offset, zaxpy, zaxpy_ndarray, Interleaved, InterleavedMut,
};
use sn_core::{close, close_enough};

/// Flatten `(re, im)` pairs into an interleaved buffer.
fn interleaved(values: &[(f64, f64)]) -> Vec<f64> {
    values.iter().flat_map(|&(re, im)| [re, im]).collect()
}

/// Within ten units of machine epsilon relative to the larger magnitude,
/// falling back to an absolute bound for results that cancel towards zero.
fn near(got: f64, want: f64) -> bool {
    close_enough(got, want, 10) || close(got, want, 1e-15)
}

// ─── Reference example ────────────────────────────────────────────────────────

#[test]
fn complex_axpy_reference_example() {
    let x = [0.7, -0.8, -0.4, -0.7, -0.1, -0.9, 0.2, -0.8];
    let mut y = [0.6, -0.6, -0.9, 0.5, 0.7, -0.6, 0.1, -0.5];
    let expected = [0.32, -1.41, -1.55, 0.5, 0.03, -0.89, -0.38, -0.96];

    zaxpy(4, Complex64::new(0.4, -0.7), &x, 1, &mut y, 1);
    for (got, want) in y.iter().zip(expected.iter()) {
        assert!(near(*got, *want), "{got} != {want}");
    }
}

#[test]
fn single_precision_reference_example() {
    let x = [0.7f32, -0.8, -0.4, -0.7, -0.1, -0.9, 0.2, -0.8];
    let mut y = [0.6f32, -0.6, -0.9, 0.5, 0.7, -0.6, 0.1, -0.5];
    let expected = [0.32f32, -1.41, -1.55, 0.5, 0.03, -0.89, -0.38, -0.96];

    caxpy(4, Complex32::new(0.4, -0.7), &x, 1, &mut y, 1);
    for (got, want) in y.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-6);
    }
}

#[test]
fn reference_example_through_offsets() {
    // The same four elements placed at odd slots of longer buffers.
    let x = [0.0, 0.0, 0.7, -0.8, 9.0, 9.0, -0.4, -0.7, 9.0, 9.0, -0.1, -0.9, 9.0, 9.0, 0.2, -0.8];
    let mut y = [0.6, -0.6, -0.9, 0.5, 0.7, -0.6, 0.1, -0.5, 5.0, 5.0];
    let expected = [0.32, -1.41, -1.55, 0.5, 0.03, -0.89, -0.38, -0.96, 5.0, 5.0];

    let out = zaxpy_ndarray(4, Complex64::new(0.4, -0.7), &x, 2, 1, &mut y, 1, 0);
    for (got, want) in out.iter().zip(expected.iter()) {
        assert!(near(*got, *want), "{got} != {want}");
    }
}

#[test]
fn returned_buffer_can_be_reused() {
    let x = [1.0, 2.0, 3.0];
    let mut y = [0.0; 3];
    let once = daxpy(3, 1.0, &x, 1, &mut y, 1);
    let twice = daxpy(3, 2.0, &x, -1, once, 1);
    assert_eq!(twice, &[7.0, 6.0, 5.0]);
}

// ─── Geometry ─────────────────────────────────────────────────────────────────

#[test]
fn no_op_leaves_bytes_identical() {
    let x = interleaved(&[(1.0, 2.0), (3.0, 4.0)]);
    let original = interleaved(&[(f64::NAN, -0.0), (5.0, 6.0)]);
    let mut y = original.clone();
    let ptr = y.as_ptr();

    let out = zaxpy(0, Complex64::new(1.0, 1.0), &x, 1, &mut y, 1);
    assert_eq!(out.as_ptr(), ptr);
    let out = zaxpy_ndarray(-5, Complex64::new(1.0, 1.0), &x, 1, 0, &mut y, 1, 0);
    assert_eq!(out.as_ptr(), ptr);

    let before: Vec<u64> = original.iter().map(|v| v.to_bits()).collect();
    let after: Vec<u64> = y.iter().map(|v| v.to_bits()).collect();
    assert_eq!(before, after);
}

#[test]
fn zero_stride_source_broadcasts() {
    let x = interleaved(&[(2.0, -1.0)]);
    let mut y = vec![0.0; 6];
    zaxpy_ndarray(3, Complex64::new(1.0, 0.0), &x, 0, 0, &mut y, 1, 0);
    assert_eq!(y, interleaved(&[(2.0, -1.0), (2.0, -1.0), (2.0, -1.0)]));
}

#[test]
fn stride_to_offset_matches_reverse_traversal() {
    // With n = 3 and stride -2 the walk is 4, 2, 0.
    assert_eq!(stride_to_offset(3, -2), 4);
    let x = interleaved(&[(1.0, 0.0), (9.0, 9.0), (2.0, 0.0), (9.0, 9.0), (3.0, 0.0)]);
    let mut y = vec![0.0; 6];
    zaxpy(3, Complex64::new(1.0, 0.0), &x, -2, &mut y, 1);
    assert_eq!(y, interleaved(&[(3.0, 0.0), (2.0, 0.0), (1.0, 0.0)]));
}

#[test]
fn real_kernel_negative_strides_both_sides() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let mut y = [10.0, 20.0, 30.0, 40.0];
    // Both reversed: the pairing is the same as with unit strides.
    daxpy(4, 1.0, &x, -1, &mut y, -1);
    assert_eq!(y, [11.0, 22.0, 33.0, 44.0]);
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn complex_vec(n: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), n)
}

proptest! {
    /// Reversing both traversals pairs the same elements, so every output
    /// element equals the unit-stride result.
    #[test]
    fn reversed_traversal_gives_same_elements(
        (xs, ys) in (1usize..32).prop_flat_map(|n| (complex_vec(n), complex_vec(n))),
        ar in -2.0f64..2.0,
        ai in -2.0f64..2.0,
    ) {
        let n = xs.len() as isize;
        let alpha = Complex64::new(ar, ai);
        let x = interleaved(&xs);

        let mut forward = interleaved(&ys);
        zaxpy(n, alpha, &x, 1, &mut forward, 1);

        let mut backward = interleaved(&ys);
        zaxpy(n, alpha, &x, -1, &mut backward, -1);

        prop_assert_eq!(forward, backward);
    }

    /// Reversing only the source equals running forward over a reversed copy.
    #[test]
    fn reversed_source_equals_reordered_input(
        (xs, ys) in (1usize..32).prop_flat_map(|n| (complex_vec(n), complex_vec(n))),
        ar in -2.0f64..2.0,
        ai in -2.0f64..2.0,
    ) {
        let n = xs.len() as isize;
        let alpha = Complex64::new(ar, ai);

        let mut strided = interleaved(&ys);
        zaxpy(n, alpha, &interleaved(&xs), -1, &mut strided, 1);

        let reversed: Vec<_> = xs.iter().rev().copied().collect();
        let mut reordered = interleaved(&ys);
        zaxpy(n, alpha, &interleaved(&reversed), 1, &mut reordered, 1);

        prop_assert_eq!(strided, reordered);
    }

    /// The accessor-generic kernel over interleaved views matches `zaxpy`.
    #[test]
    fn generic_kernel_matches_typed_kernel(
        (xs, ys) in (1usize..16).prop_flat_map(|n| (complex_vec(n), complex_vec(n))),
        sx in prop_oneof![Just(1isize), Just(-1isize)],
        ar in -2.0f64..2.0,
        ai in -2.0f64..2.0,
    ) {
        let n = xs.len() as isize;
        let alpha = Complex64::new(ar, ai);
        let x = interleaved(&xs);

        let mut typed = interleaved(&ys);
        zaxpy(n, alpha, &x, sx, &mut typed, 1);

        let mut generic = interleaved(&ys);
        gaxpy(n, alpha, &Interleaved::new(&x), sx, &mut InterleavedMut::new(&mut generic), 1);

        prop_assert_eq!(typed, generic);
    }
}
