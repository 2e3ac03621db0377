/// Problems found in a script before any of it runs.
///
/// The lexer reports characters it has no token for and the parser reports
/// grammar violations. Every variant records the line it was found on, which
/// [`ParseError::line`] returns.
#[derive(Debug)]
pub enum ParseError {
    /// A token (or an unlexable slice of input) appeared where the grammar
    /// does not allow it.
    UnexpectedToken {
        /// What was found, with what was expected when that is known.
        token: String,
        /// The line the token is on.
        line:  usize,
    },
    /// The script ended in the middle of a statement.
    UnexpectedEndOfInput {
        /// The line of the unfinished statement, or `0` when unknown.
        line: usize,
    },
    /// A group or argument list opened with `(` was never closed.
    ExpectedClosingParen {
        /// The line of the opening `(`.
        line: usize,
    },
    /// A magnitude opened with `|` was never closed.
    ExpectedPipe {
        /// The line of the opening `|`.
        line: usize,
    },
    /// A complete statement was followed by more tokens on its line.
    UnexpectedTrailingTokens {
        /// The first token past the end of the statement.
        token: String,
        /// The line of the statement.
        line:  usize,
    },
    /// A `let` tried to bind the name of a constant or builtin.
    IdentifierReserved {
        /// The name that cannot be declared.
        name: String,
        /// The line of the declaration.
        line: usize,
    },
}

impl ParseError {
    /// The line the error was reported on.
    ///
    /// # Example
    /// ```
    /// use softmath::interpreter::lexer::tokenize;
    ///
    /// let err = tokenize("1 +\n2 $ 3").unwrap_err();
    /// assert_eq!(err.line(), 2);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedClosingParen { line }
            | Self::ExpectedPipe { line }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::IdentifierReserved { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Did not expect {token}.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: The script ends in the middle of a statement.")
            },
            Self::ExpectedClosingParen { line } => {
                write!(f, "Error on line {line}: This '(' is never closed with ')'.")
            },
            Self::ExpectedPipe { line } => {
                write!(f, "Error on line {line}: This '|' is never closed with another '|'.")
            },
            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: The statement should end here, but {token} follows it."),
            Self::IdentifierReserved { name, line } => write!(f,
                                                              "Error on line {line}: '{name}' is a constant or builtin and cannot be declared."),
        }
    }
}

impl std::error::Error for ParseError {}
