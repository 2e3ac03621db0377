use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses the argument list of a call whose `(` has already been consumed.
///
/// Arguments are full expressions separated by commas and the list ends at
/// `)`, so `f()` yields no arguments. When the script runs out inside the
/// list, the missing `)` is reported against `line`, the line of the call.
///
/// Grammar: `arguments := (expression ("," expression)*)? ")"`
///
/// # Errors
/// - `ParseError::ExpectedClosingParen` when the tokens end before `)`.
/// - `ParseError::UnexpectedToken` for anything but `,` or `)` after an
///   argument.
/// - Any error raised by an argument expression.
pub(in crate::interpreter::parser) fn parse_call_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                                  line: usize)
                                                                  -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(Vec::new());
    }

    let mut arguments = Vec::new();
    loop {
        arguments.push(parse_expression(tokens)?);

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => return Ok(arguments),
            Some((tok, found_on)) => {
                return Err(ParseError::UnexpectedToken { token: format!("{tok:?} in argument list, expected ',' or ')'"),
                                                         line:  *found_on, });
            },
            None => return Err(ParseError::ExpectedClosingParen { line }),
        }
    }
}

/// Consumes the variable name of a `let` declaration that starts on `line`.
///
/// Reserved names are accepted here; the declaration parser rejects them once
/// the name is known.
pub(in crate::interpreter::parser) fn parse_declared_name<'a, I>(tokens: &mut Peekable<I>,
                                                                 line: usize)
                                                                 -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((tok, found_on)) => {
            Err(ParseError::UnexpectedToken { token: format!("{tok:?} after 'let', expected a variable name"),
                                              line:  *found_on, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
