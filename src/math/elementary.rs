use crate::math::{
    classify::{is_finite, is_infinite, is_nan},
    constants::{NAN, TWO_POW_52},
};

/// Returns the absolute value of an integer.
///
/// `i32::MIN` has no positive counterpart and wraps back to itself, the same
/// way two's-complement negation behaves natively.
///
/// # Example
/// ```
/// use softmath::math::elementary::abs;
///
/// assert_eq!(abs(-7), 7);
/// assert_eq!(abs(7), 7);
/// assert_eq!(abs(i32::MIN), i32::MIN);
/// ```
#[must_use]
pub const fn abs(x: i32) -> i32 {
    if x < 0 { x.wrapping_neg() } else { x }
}

/// Returns the magnitude of a floating-point value.
///
/// Only strictly negative values are flipped, so NaN and `-0.0` are returned
/// as they came in.
///
/// # Example
/// ```
/// use softmath::math::elementary::fabs;
///
/// assert_eq!(fabs(-2.5), 2.5);
/// assert_eq!(fabs(f64::NEG_INFINITY), f64::INFINITY);
/// assert!(fabs(f64::NAN).is_nan());
/// ```
#[must_use]
pub fn fabs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}

/// Truncates toward zero through an integer cast.
///
/// Magnitudes of `2^52` and above carry no fractional bits, so they (and
/// non-finite values) are returned unchanged instead of saturating the cast.
/// Magnitudes below one truncate to a zero carrying the sign of `x`.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn trunc(x: f64) -> f64 {
    if !is_finite(x) || fabs(x) >= TWO_POW_52 {
        return x;
    }
    if fabs(x) < 1.0 {
        return x * 0.0;
    }
    (x as i64) as f64
}

/// Returns the largest integer not greater than `x`.
///
/// The value is truncated toward zero and stepped down by one when the
/// truncation overshoots, which only happens for negative fractions.
/// Non-finite input passes through unchanged.
///
/// # Example
/// ```
/// use softmath::math::elementary::floor;
///
/// assert_eq!(floor(2.7), 2.0);
/// assert_eq!(floor(-2.7), -3.0);
/// assert_eq!(floor(-3.0), -3.0);
/// assert!(floor(-0.0).is_sign_negative());
/// assert_eq!(floor(f64::INFINITY), f64::INFINITY);
/// ```
#[must_use]
pub fn floor(x: f64) -> f64 {
    if !is_finite(x) {
        return x;
    }

    let truncated = trunc(x);
    if truncated > x { truncated - 1.0 } else { truncated }
}

/// Returns the smallest integer not less than `x`.
///
/// NaN yields NaN and infinities pass through.
///
/// # Example
/// ```
/// use softmath::math::elementary::ceil;
///
/// assert_eq!(ceil(2.1), 3.0);
/// assert_eq!(ceil(-2.1), -2.0);
/// assert_eq!(ceil(4.0), 4.0);
/// assert!(ceil(-0.5).is_sign_negative());
/// assert!(ceil(f64::NAN).is_nan());
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn ceil(x: f64) -> f64 {
    if is_infinite(x) {
        return x;
    }
    if is_nan(x) {
        return NAN;
    }

    let truncated = trunc(x);
    if truncated == x || x < 0.0 {
        truncated
    } else {
        truncated + 1.0
    }
}

/// Returns the floating-point remainder of `x / y`, with the sign of `x`.
///
/// Special cases:
/// - `y` infinite: `x` when `x` is finite, NaN otherwise.
/// - `x` infinite: NaN.
/// - `y == 0`: NaN.
///
/// Otherwise the result is `x - trunc(x / y) * y`, and a zero remainder
/// carries the sign of `x`. When the quotient is too large to be held exactly
/// as an integer, the remainder is found by exact binary long division
/// instead, so it still lands in `(-|y|, |y|)`.
///
/// # Example
/// ```
/// use softmath::math::elementary::fmod;
///
/// assert!((fmod(5.3, 2.0) - 1.3).abs() < 1e-9);
/// assert_eq!(fmod(-7.0, 3.0), -1.0);
/// assert!(fmod(-6.0, 3.0).is_sign_negative());
/// assert_eq!(fmod(4.25, f64::INFINITY), 4.25);
/// assert!(fmod(1.0, 0.0).is_nan());
/// assert!(fmod(f64::INFINITY, 2.0).is_nan());
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn fmod(x: f64, y: f64) -> f64 {
    if is_infinite(y) {
        return if is_finite(x) { x } else { NAN };
    }
    if is_infinite(x) || y == 0.0 {
        return NAN;
    }
    if is_nan(x) || is_nan(y) {
        return NAN;
    }
    let quotient = x / y;
    if fabs(quotient) < TWO_POW_52 {
        let remainder = x - trunc(quotient) * y;
        // An exact multiple cancels to +0; the zero keeps the sign of `x`.
        return if remainder == 0.0 { x * 0.0 } else { remainder };
    }

    long_division_remainder(x, y)
}

/// Remainder of `x / y` for quotients beyond exact integer range.
///
/// Subtracts the largest `|y| * 2^k` not exceeding the running remainder,
/// halving `k` on every step. Each subtraction is exact because the remainder
/// always lies between `d` and `2d`.
fn long_division_remainder(x: f64, y: f64) -> f64 {
    let divisor = fabs(y);
    let mut remainder = fabs(x);

    let mut step = divisor;
    while step * 2.0 <= remainder {
        step *= 2.0;
    }

    while step >= divisor {
        if remainder >= step {
            remainder -= step;
        }
        step *= 0.5;
    }

    if x < 0.0 { -remainder } else { remainder }
}
