//! # softmath
//!
//! softmath reimplements a subset of the standard math library (absolute
//! value, rounding, remainder, square root, exponential, logarithm, power,
//! trigonometric and inverse trigonometric functions, and float
//! classification) from nothing but basic arithmetic: Taylor series, Newton
//! iteration and argument reduction.
//!
//! Every routine classifies its input before computing and reports domain
//! problems the IEEE way, through NaN and signed infinities.
//!
//! A small calculator language sits on top of the library so the functions
//! can be exercised from scripts and from the command line.
//!
//! ```
//! use softmath::{cos, pow, sin};
//!
//! let x = 0.75;
//! assert!((pow(sin(x), 2.0) + pow(cos(x), 2.0) - 1.0).abs() < 1e-9);
//! assert_eq!(pow(2.0, 10.0), 1024.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Context,
    lexer::{Token, tokenize},
    parser::statement::parse_statement,
};

/// Defines the structure of parsed calculator scripts.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of a script as a tree. The AST is built by the parser
/// and traversed by the evaluator.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Only the calculator front-end can fail; the math routines themselves
/// signal problems through NaN and infinities.
pub mod error;
/// Lexes, parses and evaluates calculator scripts.
pub mod interpreter;
/// The numeric primitives.
///
/// # Responsibilities
/// - Classifies values as finite, infinite or NaN.
/// - Provides absolute value, rounding and remainder.
/// - Computes square roots, exponentials, logarithms and powers.
/// - Computes trigonometric and inverse trigonometric functions.
pub mod math;
/// General utilities for safe numeric conversion.
pub mod util;

pub use math::{
    classify::{is_finite, is_infinite, is_nan},
    elementary::{abs, ceil, fabs, floor, fmod},
    exp::exp,
    ext::SoftFloat,
    inverse_trig::{acos, asin, atan},
    log::log,
    pow::pow,
    sqrt::sqrt,
    trig::{cos, sin, tan},
};

/// Evaluates a script and returns the value of its last statement.
///
/// Statements are separated by newlines and evaluated in order against one
/// shared [`Context`], so later lines can use variables declared earlier.
/// An empty script (or one holding only comments) yields `None`.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use softmath::evaluate;
///
/// let value = evaluate("let r = 2\npi * r ^ 2").unwrap();
/// assert!((value.unwrap() - 4.0 * std::f64::consts::PI).abs() < 1e-12);
///
/// assert_eq!(evaluate("// nothing here").unwrap(), None);
/// assert!(evaluate("sin(1, 2)").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Option<f64>, Box<dyn std::error::Error>> {
    let mut context = Context::new();
    let tokens = tokenize(source)?;

    let mut iter = tokens.iter().peekable();

    let mut result = None;

    while iter.peek().is_some() {
        while let Some((Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }

        let statement = parse_statement(&mut iter)?;
        result = Some(context.eval_statement(&statement)?);
    }

    Ok(result)
}

/// Runs a script, optionally printing the value of its last statement.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use softmath::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// assert!(get_result("let result = sqrt(16) + 1", false).is_ok());
///
/// // Example with an intentional error (unknown variable).
/// assert!(get_result("let y = x + 1", false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = evaluate(source)?;

    if auto_print && let Some(v) = result {
        println!("{v}");
    }

    Ok(())
}
