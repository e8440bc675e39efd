//! # stdnum
//!
//! Strided BLAS-like kernels and incremental moving-window statistics.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than on the individual
//! `sn-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use stdnum::blas::{zaxpy, Complex64};
//! use stdnum::stats::{MovingStdDev, WindowedStatistic};
//!
//! // y := (1 + i) * x + y over interleaved (re, im) buffers.
//! let x = [1.0, 0.0, 0.0, 1.0];
//! let mut y = [0.0; 4];
//! zaxpy(2, Complex64::new(1.0, 1.0), &x, 1, &mut y, 1);
//! assert_eq!(y, [1.0, 1.0, -1.0, 1.0]);
//!
//! let mut sd = MovingStdDev::<f64>::new(2).unwrap();
//! sd.push(1.0);
//! assert_eq!(sd.push(3.0), 2.0f64.sqrt());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and stride helpers.
pub use sn_core as core;

/// Strided BLAS level 1 kernels.
pub use sn_blas as blas;

/// Moving-window and strided batch statistics.
pub use sn_stats as stats;

pub use sn_core::{Error, Result};
