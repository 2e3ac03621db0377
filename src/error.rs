/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of a
/// calculator script: unexpected tokens, unbalanced delimiters, reserved names
/// and similar problems detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a script, such
/// as unknown names, wrong argument counts or failed numeric conversions.
/// Numeric domain problems are not errors: they surface as NaN or infinity.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
