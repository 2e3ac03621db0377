use crate::math::{
    classify::{is_infinite, is_nan},
    constants::{
        MIN_NORMAL, NAN, SQRT_EPSILON, SQRT_MAX_ITERATIONS, SUBNORMAL_SCALE, SUBNORMAL_SCALE_SQRT,
    },
    elementary::fabs,
};

/// Computes the square root of `x` with Newton's method.
///
/// Starting from `x / 2`, the estimate is refined with
/// `r = (r + x / r) / 2` until the residual `|x - r*r|` drops to `1e-18`
/// relative to `x`. Most inputs can never reach such a small residual in
/// `f64`, so the loop also stops as soon as an update no longer decreases the
/// estimate, and in any case after [`SQRT_MAX_ITERATIONS`] steps.
///
/// Subnormal input is first scaled by `2^54` into the normal range, where
/// the residual test is meaningful, and the root is scaled back by `2^27`.
///
/// Special cases:
/// - negative input or NaN: NaN.
/// - `+∞`: `+∞`, without entering the iteration.
/// - `±0`: returned unchanged.
///
/// # Example
/// ```
/// use softmath::math::sqrt::sqrt;
///
/// assert!((sqrt(2.0) - std::f64::consts::SQRT_2).abs() < 1e-12);
/// assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
/// assert!(sqrt(-1.0).is_nan());
///
/// let tiny = 5e-324_f64;
/// assert!((sqrt(tiny) / tiny.sqrt() - 1.0).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn sqrt(x: f64) -> f64 {
    if x < 0.0 || is_nan(x) {
        return NAN;
    }
    if is_infinite(x) || x == 0.0 {
        return x;
    }

    if x < MIN_NORMAL {
        return sqrt(x * SUBNORMAL_SCALE) / SUBNORMAL_SCALE_SQRT;
    }

    let mut root = x / 2.0;
    for step in 0..SQRT_MAX_ITERATIONS {
        if fabs(x - root * root) <= SQRT_EPSILON * x {
            break;
        }

        let next = (root + x / root) * 0.5;
        // After the first step every estimate sits above the root, so a
        // non-decreasing update means the iteration has settled.
        if step > 0 && next >= root {
            break;
        }
        root = next;
    }

    root
}
