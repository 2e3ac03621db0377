use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy:
///
/// ```text
///     expression     := additive
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := unary (("*" | "/" | "%") unary)*
///     unary          := "-" unary | exponent
///     exponent       := primary ("^" unary)?
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
///
/// # Example
/// ```
/// use softmath::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse_expression},
/// };
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
///
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
