use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_call_arguments,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation binds more
/// loosely than exponentiation, so `-2 ^ 2` is `-(2 ^ 2)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or an exponent-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line: *line, })
    } else {
        parse_exponent(tokens)
    }
}

/// Parses exponentiation expressions.
///
/// `^` is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`. The
/// exponent may carry its own sign, as in `2 ^ -1`.
///
/// The rule is: `exponent := primary ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens)?;

    if let Some((Token::Caret, line)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   line:  *line, });
    }

    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
/// - absolute expressions (`|expr|`)
///
/// Grammar (simplified):
/// ```text
///     primary := number
///              | identifier_or_function
///              | "(" expression ")"
///              | "|" expression "|"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(value), line) => {
            let expr = Expr::Literal { value: *value,
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::Pipe, _) => parse_abs(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses an absolute-value expression of the form `| expr |`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the opening `|`.
///
/// # Returns
/// An [`Expr::Abs`] node.
///
/// # Errors
/// Returns `ParseError::ExpectedPipe` when the closing `|` is missing.
fn parse_abs<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((_, line)) => *line,
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::Pipe, _)) => Ok(Expr::Abs { expr: Box::new(expr),
                                                 line }),
        _ => Err(ParseError::ExpectedPipe { line }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((_, line)) => *line,
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses either a variable reference or a function call.
///
/// An identifier directly followed by `(` starts a call whose arguments are a
/// comma-separated expression list; otherwise the identifier names a variable
/// or constant.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// An [`Expr::FunctionCall`] or [`Expr::Variable`].
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), line)) => (n.clone(), *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                     line:  *line, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line: 0 });
        },
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_call_arguments(tokens, line)?;
            Ok(Expr::FunctionCall { name, arguments, line })
        },
        _ => Ok(Expr::Variable { name, line }),
    }
}
