/// Named constants: the π family, Euler's number, special values, tolerances
/// and iteration caps.
pub mod constants;

/// Finite, infinite and NaN predicates.
///
/// Every other routine classifies its input with these before computing, so
/// no iteration is ever started on a non-finite value.
pub mod classify;

/// Absolute value, rounding and floating-point remainder.
pub mod elementary;

/// Square root by Newton iteration.
pub mod sqrt;

/// Exponential by Taylor series.
pub mod exp;

/// Natural logarithm by Newton iteration on the exponential.
pub mod log;

/// Power, built on `exp`, `log` and `fmod` behind an IEEE special-case table.
pub mod pow;

/// Sine, cosine and tangent.
///
/// Angles are reduced modulo 2π before the sine series is summed; cosine and
/// tangent are derived from sine.
pub mod trig;

/// Arctangent, arcsine and arccosine.
pub mod inverse_trig;

/// The [`ext::SoftFloat`] extension trait.
pub mod ext;
