/// Binary operator evaluation logic.
///
/// Maps `+ - * /` onto IEEE arithmetic and `%`, `^` onto `fmod` and `pow`.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context holding variables,
/// the named constants and error propagation.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides reserved-name lookup and argument-count checks.
pub mod utils;

/// Function evaluation.
///
/// Handles builtin function calls, argument checking, and return value
/// computation.
pub mod function;
