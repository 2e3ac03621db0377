use crate::math::{
    classify::{is_finite, is_nan},
    constants::{INFINITY, NAN, NEG_INFINITY, POWI_MAX_EXPONENT},
    elementary::{fabs, floor, fmod},
    exp::exp,
    log::log,
};

/// Raises `base` to the power `exponent`.
///
/// IEEE special cases are resolved first, in this order:
///
/// | base   | exponent   | result |
/// |--------|------------|--------|
/// | `0`    | NaN        | NaN    |
/// | `0`    | negative   | `+∞`   |
/// | `+∞`   | negative   | `0`    |
/// | `-1`   | `-∞`       | `1`    |
/// | `1`    | anything   | `1`    |
/// | any    | `0`        | `1`    |
/// | `0`    | positive   | `0`    |
///
/// A finite base with an integral exponent no larger than `64` in magnitude
/// is raised by repeated squaring, so results such as `2^10` are exact.
/// Squaring doubles the relative error on every step, so larger integral
/// exponents are left to the logarithm. Everything else goes through
/// `exp(exponent * log(|base|))`, with
/// the sign flipped for a negative base whenever `fmod(exponent, 2)` is
/// non-zero.
///
/// # Example
/// ```
/// use softmath::math::pow::pow;
///
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert_eq!(pow(-2.0, 3.0), -8.0);
/// assert_eq!(pow(0.0, -3.0), f64::INFINITY);
/// assert_eq!(pow(-1.0, f64::NEG_INFINITY), 1.0);
/// assert!(pow(0.0, f64::NAN).is_nan());
/// assert!((pow(2.0, 0.5) - std::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn pow(base: f64, exponent: f64) -> f64 {
    if base == 0.0 && is_nan(exponent) {
        return NAN;
    }
    if base == 0.0 && exponent < 0.0 {
        return INFINITY;
    }
    if base == INFINITY && exponent < 0.0 {
        return 0.0;
    }
    if base == -1.0 && exponent == NEG_INFINITY {
        return 1.0;
    }
    if base == 1.0 || exponent == 0.0 {
        return 1.0;
    }
    if base == 0.0 {
        return 0.0;
    }

    if is_finite(base) && floor(exponent) == exponent && fabs(exponent) <= POWI_MAX_EXPONENT {
        return powi(base, exponent);
    }

    if base < 0.0 {
        let magnitude = exp(exponent * log(-base));
        if fmod(exponent, 2.0) != 0.0 { -magnitude } else { magnitude }
    } else {
        exp(exponent * log(base))
    }
}

/// Raises a finite `base` to an integral `exponent` by binary
/// exponentiation. Negative exponents take the reciprocal of the result.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn powi(base: f64, exponent: f64) -> f64 {
    let mut n = fabs(exponent) as u64;
    let mut factor = base;
    let mut result = 1.0;

    while n > 0 {
        if n % 2 == 1 {
            result *= factor;
        }
        factor *= factor;
        n /= 2;
    }

    if exponent < 0.0 { 1.0 / result } else { result }
}
