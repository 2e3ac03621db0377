use crate::math::constants::{INFINITY, NEG_INFINITY};

/// Returns `true` if `x` is neither NaN nor an infinity.
///
/// NaN is excluded by the self-comparison, infinities by the strict bounds.
///
/// # Example
/// ```
/// use softmath::math::classify::is_finite;
///
/// assert!(is_finite(1.5));
/// assert!(!is_finite(f64::INFINITY));
/// assert!(!is_finite(f64::NAN));
/// ```
#[must_use]
#[allow(clippy::eq_op)]
pub fn is_finite(x: f64) -> bool {
    x == x && x < INFINITY && x > NEG_INFINITY
}

/// Returns `true` if `x` is exactly `+∞` or `-∞`.
///
/// # Example
/// ```
/// use softmath::math::classify::is_infinite;
///
/// assert!(is_infinite(f64::NEG_INFINITY));
/// assert!(!is_infinite(f64::MAX));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_infinite(x: f64) -> bool {
    x == INFINITY || x == NEG_INFINITY
}

/// Returns `true` if `x` is NaN, the only value unequal to itself.
///
/// # Example
/// ```
/// use softmath::math::classify::is_nan;
///
/// assert!(is_nan(f64::NAN));
/// assert!(!is_nan(0.0));
/// ```
#[must_use]
#[allow(clippy::eq_op)]
pub fn is_nan(x: f64) -> bool {
    x != x
}
