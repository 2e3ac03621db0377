use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_identifier,
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_declared_name,
        },
    },
};

/// Parses a single statement.
///
/// A statement is either a variable declaration (`let x = ...`) or an
/// expression used as a statement. The statement must end at a newline or at
/// the end of input; anything else is reported as trailing tokens.
///
/// The statement's source line is taken from the next available token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Example
/// ```
/// use softmath::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let tokens = tokenize("let r = sqrt(2)").unwrap();
/// let statement = parse_statement(&mut tokens.iter().peekable()).unwrap();
/// assert!(matches!(statement, Statement::VariableDeclaration { ref name, .. } if name == "r"));
///
/// let tokens = tokenize("1 2").unwrap();
/// assert!(parse_statement(&mut tokens.iter().peekable()).is_err());
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = if let Some(statement) = parse_variable_declaration(tokens)? {
        statement
    } else {
        let current_line = tokens.peek().map_or(0, |(_, l)| *l);
        let expr = parse_expression(tokens)?;
        Statement::Expression { expr,
                                line: current_line }
    };

    match tokens.peek() {
        None | Some((Token::NewLine, _)) => Ok(statement),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                        line:  *line, }),
    }
}

/// Parses a variable declaration of the form `let <identifier> = <expression>`.
///
/// Returns `Ok(None)` without consuming anything when the next token is not
/// `let`. Constants and builtin names cannot be declared.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Let, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let name = parse_declared_name(tokens, line)?;
        if is_reserved_identifier(&name) {
            return Err(ParseError::IdentifierReserved { name, line });
        }

        match tokens.next() {
            Some((Token::Equals, _)) => {},
            Some((tok, l)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected '=', found {tok:?}"),
                                                         line:  *l, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { line });
            },
        }

        let value = parse_expression(tokens)?;
        return Ok(Some(Statement::VariableDeclaration { name, value, line }));
    }

    Ok(None)
}
