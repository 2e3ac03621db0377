use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Operand parser for one precedence level.
type OperandParser<I> = fn(&mut Peekable<I>) -> ParseResult<Expr>;

/// Parses `+` and `-`, the loosest-binding operators.
///
/// `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses `*`, `/` and `%`.
///
/// `multiplicative := unary (("*" | "/" | "%") unary)*`
///
/// # Example
/// ```
/// use softmath::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::binary::parse_multiplicative},
/// };
///
/// let tokens = tokenize("8 / 4 % 3").unwrap();
/// let expr = parse_multiplicative(&mut tokens.iter().peekable()).unwrap();
///
/// // `%` binds the whole of `8 / 4` on its left.
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Mod, .. }));
/// ```
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}

/// Folds a chain of operands joined by operators that `accepts` admits into a
/// tree leaning left, so `a - b - c` becomes `(a - b) - c`. The chain stops at
/// the first token that is not an admitted operator.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operand: OperandParser<I>,
                                 accepts: fn(BinaryOperator) -> bool)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = operand(tokens)?;

    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: *line };
    }

    Ok(left)
}

/// The operator a token stands for, if it is one of `+ - * / % ^`.
///
/// # Example
/// ```
/// use softmath::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    Some(match token {
        Token::Plus => BinaryOperator::Add,
        Token::Minus => BinaryOperator::Sub,
        Token::Star => BinaryOperator::Mul,
        Token::Slash => BinaryOperator::Div,
        Token::Percent => BinaryOperator::Mod,
        Token::Caret => BinaryOperator::Pow,
        _ => return None,
    })
}
