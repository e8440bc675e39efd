//! Error types for stdnum.
//!
//! Kernels never fail: invalid geometry is the caller's responsibility and
//! NaN propagates through arithmetic. Only constructors of stateful objects
//! validate their arguments, and they do so before any state exists.

use thiserror::Error;

/// The top-level error type used throughout stdnum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A constructor argument was outside its accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout stdnum.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sn_core::{ensure, errors::Error};
/// fn window(capacity: usize) -> sn_core::Result<usize> {
///     ensure!(capacity > 0, "capacity must be positive, got {capacity}");
///     Ok(capacity)
/// }
/// assert!(window(3).is_ok());
/// assert_eq!(
///     window(0),
///     Err(Error::InvalidArgument("capacity must be positive, got 0".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}
