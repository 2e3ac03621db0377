/// Numeric conversion helpers.
///
/// Converts the calculator's `f64` values to integer types without silent
/// truncation. Every helper returns a `Result` that is `Ok` only when the
/// conversion is exact.
pub mod num;
