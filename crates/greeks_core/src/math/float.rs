//! IEEE-754 classification helpers.
//!
//! The Greeks engine branches on these to detect a degenerate d1 term.
//! `is_finite` rejects NaN as well as both infinities.

/// Returns `true` if `x` is NaN.
///
/// # Examples
/// ```
/// use greeks_core::math::float::is_nan;
///
/// assert!(is_nan(f64::NAN));
/// assert!(is_nan(0.0 / 0.0));
/// assert!(!is_nan(f64::INFINITY));
/// assert!(!is_nan(1.5));
/// ```
#[inline]
pub fn is_nan(x: f64) -> bool {
    x.is_nan()
}

/// Returns `true` if `x` is neither NaN nor ±∞.
///
/// Equivalent to `!is_nan(x - x)`: `∞ - ∞` and `NaN - NaN` are both NaN.
///
/// # Examples
/// ```
/// use greeks_core::math::float::is_finite;
///
/// assert!(is_finite(-1e300));
/// assert!(!is_finite(f64::INFINITY));
/// assert!(!is_finite(f64::NEG_INFINITY));
/// assert!(!is_finite(f64::NAN));
/// ```
#[inline]
pub fn is_finite(x: f64) -> bool {
    x.is_finite()
}
