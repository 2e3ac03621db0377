/// Entry point of expression parsing and the shared result type.
pub mod core;

/// Unary operators, exponentiation and primary expressions.
///
/// Handles negation, `^`, literals, identifiers, function calls, grouping and
/// `|expr|` magnitudes.
pub mod unary;

/// Left-associative binary operators.
///
/// Implements the additive and multiplicative precedence levels.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides comma-separated list parsing and identifier helpers.
pub mod utils;

/// Statement parsing.
///
/// Implements `let` declarations and expression statements.
pub mod statement;
