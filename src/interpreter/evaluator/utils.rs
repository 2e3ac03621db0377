use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::{CONSTANTS, EvalResult},
        function::core::BUILTIN_FUNCTIONS,
    },
};

/// Checks whether `name` is a named constant or a builtin function.
///
/// Reserved identifiers cannot be declared as variables.
///
/// # Example
/// ```
/// use softmath::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("pi"));
/// assert!(is_reserved_identifier("sin"));
/// assert!(!is_reserved_identifier("radius"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    CONSTANTS.iter().any(|(constant, _)| *constant == name) || BUILTIN_FUNCTIONS.contains(&name)
}

/// Ensures a builtin received exactly `expected` arguments.
///
/// # Parameters
/// - `name`: Builtin name, used in the error message.
/// - `args`: Evaluated arguments.
/// - `expected`: Required argument count.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// Returns `RuntimeError::ArgumentCountMismatch` when the counts differ.
///
/// # Example
/// ```
/// use softmath::interpreter::evaluator::utils::check_arity;
///
/// assert!(check_arity("sin", &[1.0], 1, 1).is_ok());
/// assert!(check_arity("pow", &[1.0], 2, 1).is_err());
/// ```
pub fn check_arity(name: &str, args: &[f64], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  found: args.len(),
                                                  line })
    }
}
