use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    math::{classify::is_finite, elementary::trunc},
};

/// Safely converts an `f64` to `i32` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns an error for non-finite, out-of-range, or fractional values.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
/// - `line`: Source code line number for error reporting.
///
/// # Returns
/// - `Ok(i32)`: The converted value if safe.
/// - `Err(RuntimeError::TypeError | LiteralTooLarge | LiteralTooSmall |
///   RealIsFractional)`: If conversion is invalid.
///
/// # Example
/// ```
/// use softmath::{error::RuntimeError, util::num::f64_to_i32_checked};
///
/// // Safe conversion
/// assert_eq!(f64_to_i32_checked(-1000.0, 1).unwrap(), -1000);
///
/// // Fractional value
/// let err = f64_to_i32_checked(1.5, 123).unwrap_err();
/// assert!(matches!(err, RuntimeError::RealIsFractional { line: 123 }));
///
/// // Out of range
/// let err = f64_to_i32_checked(1e20, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooLarge { line: 5 }));
/// let err = f64_to_i32_checked(-1e20, 6).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooSmall { line: 6 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::float_cmp)]
pub fn f64_to_i32_checked(value: f64, line: usize) -> EvalResult<i32> {
    if !is_finite(value) {
        return Err(RuntimeError::TypeError { details: format!("Cannot convert non-finite value {value} to an integer"),
                                             line });
    }
    if value > f64::from(i32::MAX) {
        return Err(RuntimeError::LiteralTooLarge { line });
    }
    if value < f64::from(i32::MIN) {
        return Err(RuntimeError::LiteralTooSmall { line });
    }
    if trunc(value) != value {
        return Err(RuntimeError::RealIsFractional { line });
    }
    Ok(value as i32)
}
