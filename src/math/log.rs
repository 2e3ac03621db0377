use crate::math::{
    classify::{is_infinite, is_nan},
    constants::{
        E, INFINITY, LN_2, LOG_MAX_ITERATIONS, MIN_NORMAL, NAN, NEG_INFINITY, SUBNORMAL_SCALE,
        SUBNORMAL_SCALE_EXPONENT,
    },
    exp::exp,
};

/// Computes the natural logarithm of `x`.
///
/// The argument is first scaled into `[1, e)` by dividing (or multiplying) by
/// `e`, counting each step into an integer exponent offset. The scaled value
/// is then refined with
///
/// ```text
/// result += 2 * (x - exp(result)) / (x + exp(result))
/// ```
///
/// which converges much faster than plain Newton on `exp(result) = x`. A
/// subnormal argument is lifted by `2^54` first, since repeated
/// multiplication on the subnormal grid would round away its digits, and
/// `54 * ln(2)` is taken off the result. The
/// loop runs for at most [`LOG_MAX_ITERATIONS`] steps and stops early once a
/// step leaves `result` unchanged. The final answer is `result + offset`.
///
/// Special cases:
/// - negative input or NaN: NaN.
/// - `0`: `-∞`.
/// - `+∞`: `+∞`.
///
/// # Example
/// ```
/// use softmath::math::log::log;
///
/// assert_eq!(log(1.0), 0.0);
/// assert!((log(10.0) - std::f64::consts::LN_10).abs() < 1e-12);
/// assert_eq!(log(0.0), f64::NEG_INFINITY);
/// assert!(log(-1.0).is_nan());
/// assert!((log(5e-324) - 5e-324_f64.ln()).abs() < 1e-10);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
#[allow(clippy::suboptimal_flops)]
pub fn log(x: f64) -> f64 {
    if x < 0.0 || is_nan(x) {
        return NAN;
    }
    if x == 0.0 {
        return NEG_INFINITY;
    }
    if is_infinite(x) {
        return INFINITY;
    }

    if x < MIN_NORMAL {
        return log(x * SUBNORMAL_SCALE) - SUBNORMAL_SCALE_EXPONENT * LN_2;
    }

    let mut scaled = x;
    let mut ex_pow = 0.0;
    while scaled >= E {
        scaled /= E;
        ex_pow += 1.0;
    }
    while scaled < 1.0 {
        scaled *= E;
        ex_pow -= 1.0;
    }

    let mut result = 0.0;
    for _ in 0..LOG_MAX_ITERATIONS {
        let guess = exp(result);
        let next = result + 2.0 * (scaled - guess) / (scaled + guess);
        if next == result {
            break;
        }
        result = next;
    }

    result + ex_pow
}
