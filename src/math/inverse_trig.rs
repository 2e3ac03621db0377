use crate::math::{
    classify::{is_finite, is_infinite, is_nan},
    constants::{ATAN_MAX_TERMS, ATAN_REDUCTION_BOUND, FRAC_PI_2, NAN, SERIES_EPSILON},
    elementary::fabs,
    sqrt::sqrt,
};

/// Computes the arctangent of `x`, in radians within `[-π/2, π/2]`.
///
/// Two regimes share one series:
/// - `|x| < 1` sums the arctangent series of `x` directly.
/// - `|x| >= 1` sums the series of `1 / x` and uses
///   `atan(x) = sign(x) * π/2 - atan(1 / x)`.
///
/// Before summing, the argument is shrunk with the half-angle identity
/// `atan(t) = 2 * atan(t / (1 + sqrt(1 + t²)))` so the series converges
/// quickly even next to `|x| = 1`.
///
/// NaN yields NaN, `±∞` yields `±π/2` and `±0` is returned unchanged.
///
/// # Example
/// ```
/// use softmath::math::inverse_trig::atan;
///
/// assert_eq!(atan(0.0), 0.0);
/// assert!(atan(-0.0).is_sign_negative());
/// assert!((atan(1.0) - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// assert!((atan(-1e10) + std::f64::consts::FRAC_PI_2).abs() < 1e-9);
/// assert_eq!(atan(f64::INFINITY), std::f64::consts::FRAC_PI_2);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn atan(x: f64) -> f64 {
    if is_nan(x) {
        return NAN;
    }
    if is_infinite(x) {
        return if x < 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
    }
    if x == 0.0 {
        return x;
    }

    if -1.0 < x && x < 1.0 {
        atan_series(x)
    } else {
        let quadrant = if x < 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
        quadrant - atan_series(1.0 / x)
    }
}

/// Computes the arcsine of `x` as `atan(x / sqrt(1 - x²))`.
///
/// At `x = ±1` the quotient becomes `±∞` and the result is exactly `±π/2`.
/// Input outside `[-1, 1]`, or non-finite input, yields NaN.
///
/// # Example
/// ```
/// use softmath::math::inverse_trig::asin;
///
/// assert!((asin(0.5) - std::f64::consts::FRAC_PI_6).abs() < 1e-12);
/// assert_eq!(asin(1.0), std::f64::consts::FRAC_PI_2);
/// assert!(asin(1.5).is_nan());
/// ```
#[must_use]
pub fn asin(x: f64) -> f64 {
    if !is_finite(x) || x < -1.0 || x > 1.0 {
        return NAN;
    }
    atan(x / sqrt(1.0 - x * x))
}

/// Computes the arccosine of `x` as `π/2 - asin(x)`.
///
/// Input outside `[-1, 1]`, or non-finite input, yields NaN.
///
/// # Example
/// ```
/// use softmath::math::inverse_trig::acos;
///
/// assert!((acos(0.5) - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
/// assert_eq!(acos(1.0), 0.0);
/// assert!(acos(-1.01).is_nan());
/// ```
#[must_use]
pub fn acos(x: f64) -> f64 {
    if !is_finite(x) || x < -1.0 || x > 1.0 {
        return NAN;
    }
    FRAC_PI_2 - asin(x)
}

/// Sums `Σ (-1)^i t^(2i+1) / (2i+1)` for `|t| <= 1`.
fn atan_series(t: f64) -> f64 {
    let mut t = t;
    let mut scale = 1.0;
    while fabs(t) > ATAN_REDUCTION_BOUND {
        t /= 1.0 + sqrt(1.0 + t * t);
        scale *= 2.0;
    }

    let square = t * t;
    let mut power = t;
    let mut denominator = 1.0;
    let mut sign = 1.0;
    let mut sum = 0.0;

    for _ in 0..ATAN_MAX_TERMS {
        let term = sign * power / denominator;
        sum += term;

        if fabs(term) < SERIES_EPSILON {
            break;
        }
        power *= square;
        denominator += 2.0;
        sign = -sign;
    }

    scale * sum
}
