use crate::math::{
    classify::is_finite,
    constants::{FRAC_PI_2, NAN, PI, SERIES_EPSILON, TAU, TRIG_MAX_TERMS},
    elementary::{fabs, fmod},
};

/// Computes the sine of an angle in radians.
///
/// The angle is reduced modulo 2π with [`fmod`] and folded into `[-π, π]`,
/// then the Taylor series `Σ (-1)^k x^(2k+1) / (2k+1)!` is summed until two
/// consecutive partial sums differ by less than `1e-18`. Each term is derived
/// from the previous one, `term *= -x² / ((2k)(2k+1))`.
///
/// Zero is returned as it came in, keeping its sign. Non-finite input yields
/// NaN.
///
/// # Example
/// ```
/// use softmath::math::trig::sin;
///
/// assert_eq!(sin(0.0), 0.0);
/// assert!(sin(-0.0).is_sign_negative());
/// assert!((sin(std::f64::consts::FRAC_PI_2) - 1.0).abs() < 1e-12);
/// assert!(sin(f64::INFINITY).is_nan());
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn sin(x: f64) -> f64 {
    if !is_finite(x) {
        return NAN;
    }
    if x == 0.0 {
        return x;
    }

    let angle = reduce_angle(x);
    let square = angle * angle;

    let mut term = angle;
    let mut sum = angle;
    let mut k = 1.0;

    for _ in 0..TRIG_MAX_TERMS {
        let previous = sum;
        term *= -square / ((2.0 * k) * (2.0 * k + 1.0));
        sum += term;
        k += 1.0;

        if fabs(sum - previous) < SERIES_EPSILON {
            break;
        }
    }

    sum
}

/// Computes the cosine of an angle in radians as `sin(π/2 - x)`.
///
/// `x` is reduced into `[-π, π]` before the shift, so `sin` and `cos` always
/// work from the same reduced angle. Non-finite input yields NaN.
///
/// # Example
/// ```
/// use softmath::math::trig::{cos, sin};
///
/// assert!((cos(0.0) - 1.0).abs() < 1e-12);
/// assert!((cos(std::f64::consts::PI) + 1.0).abs() < 1e-12);
/// assert!(cos(f64::NAN).is_nan());
///
/// let x = 1e17;
/// assert!((sin(x) * sin(x) + cos(x) * cos(x) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn cos(x: f64) -> f64 {
    if !is_finite(x) {
        return NAN;
    }
    sin(FRAC_PI_2 - reduce_angle(x))
}

/// Computes the tangent of an angle in radians as `sin(x) / cos(x)`.
///
/// There is no special handling for a vanishing cosine: the division follows
/// ordinary floating-point rules. Non-finite input yields NaN.
///
/// # Example
/// ```
/// use softmath::math::trig::tan;
///
/// assert!((tan(std::f64::consts::FRAC_PI_4) - 1.0).abs() < 1e-12);
/// assert!(tan(f64::NEG_INFINITY).is_nan());
/// ```
#[must_use]
pub fn tan(x: f64) -> f64 {
    if !is_finite(x) {
        return NAN;
    }
    sin(x) / cos(x)
}

/// Maps a finite angle onto the equivalent angle in `[-π, π]`.
fn reduce_angle(x: f64) -> f64 {
    let angle = fmod(x, TAU);

    if angle > PI {
        angle - TAU
    } else if angle < -PI {
        angle + TAU
    } else {
        angle
    }
}
