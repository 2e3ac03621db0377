//! Process-wide numeric constants shared by every routine in [`crate::math`].
//!
//! Everything here is a `const`: the values are fixed at compile time and never
//! written after that.

/// Archimedes' constant, π.
pub const PI: f64 = std::f64::consts::PI;
/// π / 2.
pub const FRAC_PI_2: f64 = std::f64::consts::FRAC_PI_2;
/// 2π, one full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;
/// Euler's number, the base of the natural logarithm.
pub const E: f64 = std::f64::consts::E;
/// ln(2).
pub const LN_2: f64 = std::f64::consts::LN_2;
/// ln(10).
pub const LN_10: f64 = std::f64::consts::LN_10;

/// Positive infinity.
pub const INFINITY: f64 = f64::INFINITY;
/// Negative infinity.
pub const NEG_INFINITY: f64 = f64::NEG_INFINITY;
/// Quiet NaN.
pub const NAN: f64 = f64::NAN;
/// Largest finite magnitude. Sums growing past it are clamped to infinity.
pub const MAX_MAGNITUDE: f64 = f64::MAX;
/// Smallest positive normal value. Anything below it (other than zero) is
/// subnormal.
pub const MIN_NORMAL: f64 = f64::MIN_POSITIVE;

/// Convergence threshold between successive partial sums of the sine series.
pub const SERIES_EPSILON: f64 = 1e-18;
/// Smallest exponential series term still worth adding.
pub const EXP_EPSILON: f64 = 1e-99;
/// Residual bound `|x - r*r| / x` at which the square root iteration stops.
pub const SQRT_EPSILON: f64 = 1e-18;

/// `2^52`. Every `f64` at or above this magnitude is already an integer.
pub const TWO_POW_52: f64 = 4_503_599_627_370_496.0;
/// `2^54`. Multiplying a subnormal by it lands exactly in the normal range.
pub const SUBNORMAL_SCALE: f64 = 18_014_398_509_481_984.0;
/// `log2` of [`SUBNORMAL_SCALE`].
pub const SUBNORMAL_SCALE_EXPONENT: f64 = 54.0;
/// `2^27`, the square root of [`SUBNORMAL_SCALE`].
pub const SUBNORMAL_SCALE_SQRT: f64 = 134_217_728.0;

/// Largest exponent magnitude `pow` raises by repeated squaring. Each
/// squaring doubles the relative error already present.
pub const POWI_MAX_EXPONENT: f64 = 64.0;

/// Cap on Newton steps for the square root. Seeds far from the root shrink
/// by about half per step, so the whole `f64` range fits comfortably.
pub const SQRT_MAX_ITERATIONS: usize = 2_048;
/// Cap on Newton steps for the logarithm.
pub const LOG_MAX_ITERATIONS: usize = 100;
/// Cap on terms of the sine series.
pub const TRIG_MAX_TERMS: usize = 100;
/// Cap on terms of the arctangent series.
pub const ATAN_MAX_TERMS: usize = 80;
/// Arctangent arguments are halved until they fall at or below this bound.
pub const ATAN_REDUCTION_BOUND: f64 = 0.25;
