use crate::math::{
    classify::{is_infinite, is_nan},
    constants::{EXP_EPSILON, INFINITY, MAX_MAGNITUDE, NAN},
    elementary::fabs,
};

/// Computes `e^x` from its Taylor series.
///
/// Negative arguments are negated first and the reciprocal of the resulting
/// sum is returned, which keeps every series term positive and avoids the
/// cancellation of an alternating sum. Terms are accumulated as
/// `term *= x / i` until a term falls to [`EXP_EPSILON`].
///
/// Special cases:
/// - NaN: NaN.
/// - `+∞`, or any sum that grows past `f64::MAX`: `+∞`.
/// - `-∞`, or a negative argument whose sum overflowed: `0`.
///
/// # Example
/// ```
/// use softmath::math::exp::exp;
///
/// assert_eq!(exp(0.0), 1.0);
/// assert!((exp(1.0) - std::f64::consts::E).abs() < 1e-12);
/// assert_eq!(exp(1000.0), f64::INFINITY);
/// assert_eq!(exp(-1000.0), 0.0);
/// ```
#[must_use]
pub fn exp(x: f64) -> f64 {
    if is_nan(x) {
        return NAN;
    }
    if is_infinite(x) {
        return if x > 0.0 { INFINITY } else { 0.0 };
    }

    let negative = x < 0.0;
    let magnitude = if negative { -x } else { x };

    let sum = positive_series(magnitude);

    if negative {
        if sum > MAX_MAGNITUDE { 0.0 } else { 1.0 / sum }
    } else {
        sum
    }
}

/// Sums `Σ x^i / i!` for a finite, non-negative `x`, clamping to `+∞` on
/// overflow.
fn positive_series(x: f64) -> f64 {
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut i = 1.0;

    while fabs(term) > EXP_EPSILON {
        term *= x / i;
        i += 1.0;
        sum += term;

        if sum > MAX_MAGNITUDE {
            return INFINITY;
        }
    }

    sum
}
