/// The evaluator module computes the value of parsed statements.
///
/// The evaluator walks the AST, resolves variables and constants, applies
/// operators and dispatches builtin calls to the math library.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages declared variables for the lifetime of a script.
/// - Reports runtime errors such as unknown names or wrong argument counts.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw script text and produces a stream of tokens, each
/// corresponding to a number, identifier, operator or delimiter, paired with
/// its line number.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Skips whitespace and comments.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar, reporting errors with location info.
/// - Encodes operator precedence and associativity.
pub mod parser;
