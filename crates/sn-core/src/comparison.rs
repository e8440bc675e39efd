//! Floating-point comparison utilities.

use num_traits::Float;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close<T: Float>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `|a - b| <= n * eps * max(|a|, |b|)`, where `eps` is the
/// machine epsilon of `T`.
///
/// Two NaNs never compare close; equal infinities do.
#[inline]
pub fn close_enough<T: Float>(a: T, b: T, n: u32) -> bool {
    if a == b {
        return true;
    }
    let scale = T::from(n).unwrap_or_else(T::zero);
    let eps = a.abs().max(b.abs()) * T::epsilon() * scale;
    (a - b).abs() <= eps
}
