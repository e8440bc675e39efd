//! # sn-blas
//!
//! Strided BLAS level 1 kernels.
//!
//! Every kernel comes in two forms: a "main" form taking only strides, which
//! starts negative-stride traversals at the last element in memory, and an
//! `_ndarray` form taking an explicit starting offset per vector. Kernels
//! never allocate and return the destination they were given. They do not
//! validate geometry: the caller guarantees that all `n` positions lie
//! inside each buffer.
//!
//! Complex vectors are stored interleaved, two consecutive scalars
//! `(re, im)` per element; strides and offsets count elements, not scalars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Element-access protocol for generic kernels.
pub mod accessor;

/// Real `y := alpha * x + y`.
pub mod axpy;

/// Complex `y := alpha * x + y` over interleaved buffers.
pub mod complex_axpy;

/// Accessor-generic `y := alpha * x + y`.
pub mod gaxpy;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use accessor::{Accessor, AccessorMut, Interleaved, InterleavedMut};
pub use axpy::{axpy_ndarray, daxpy, daxpy_ndarray, saxpy, saxpy_ndarray};
pub use complex_axpy::{caxpy, caxpy_ndarray, complex_axpy_ndarray, zaxpy, zaxpy_ndarray};
pub use gaxpy::{gaxpy, gaxpy_ndarray};
pub use num_complex::{Complex, Complex32, Complex64};
pub use sn_core::stride_to_offset;
