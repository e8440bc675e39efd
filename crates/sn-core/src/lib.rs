//! # sn-core
//!
//! Core types, error definitions, and stride helpers for stdnum.
//!
//! This crate provides the building blocks shared by the kernel and
//! statistics crates: scalar type aliases, the error type and its
//! `ensure!` macro, floating-point comparison helpers, and the index
//! arithmetic used to walk strided buffers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Error types and the `ensure!` macro.
pub mod errors;

/// Stride and offset arithmetic for strided buffers.
pub mod strided;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Default floating-point type.
pub type Real = f64;

/// Alias used for buffer lengths and window capacities.
pub type Size = usize;

/// Signed step between consecutive logical elements of a strided buffer.
pub type Stride = isize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use errors::{Error, Result};
pub use strided::{stride_to_offset, StridedIndices};
