//! Sign utilities for bracketing.
//! - `opposite_sign` : `true` if values have opposite sign bits
//! - `same_sign`     : `true` if values share the same sign bit
//! - `is_exact_zero` : `true` for `0.0` and `-0.0`
//!
//! Comparing sign bits instead of testing `fa * fb < 0.0` keeps the
//! decision correct when the product underflows to zero.

/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}


/// Returns `true` if `x` and `y` have the same sign.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() == y.is_sign_positive()
}


/// Returns `true` if `x` is `0.0` or `-0.0`.
#[inline]
pub(crate) fn is_exact_zero(x: f64) -> bool {
    x == 0.0
}
