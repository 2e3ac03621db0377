use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    math::{
        constants::{E, INFINITY, NAN, PI, TAU},
        elementary::fabs,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Named constants every script can refer to. Their names are reserved.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", PI),
                                        ("tau", TAU),
                                        ("e", E),
                                        ("inf", INFINITY),
                                        ("nan", NAN)];

/// Stores the runtime evaluation context.
///
/// Holds the variables declared so far with `let`. Constants and builtins are
/// static and live outside the context.
///
/// ## Usage
///
/// `Context` is created once per script and reused for every statement, so
/// later statements see the variables declared by earlier ones.
pub struct Context {
    /// Variables declared with `let`, by name.
    pub variables: HashMap<String, f64>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, variables, unary and binary operations, function calls and
    /// absolute values.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value. Numeric problems (division by zero, domain errors)
    /// are carried as NaN or infinity, never as errors.
    ///
    /// # Example
    /// ```
    /// use softmath::{
    ///     interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_expression},
    /// };
    ///
    /// let tokens = tokenize("|-3| + 2 ^ 3").unwrap();
    /// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
    ///
    /// let context = Context::new();
    /// assert_eq!(context.eval(&expr).unwrap(), 11.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => {
                let arg_vals = arguments.iter()
                                        .map(|argument| self.eval(argument))
                                        .collect::<EvalResult<Vec<_>>>()?;
                Self::eval_function(name, &arg_vals, *line)
            },
            Expr::Abs { expr, .. } => Ok(fabs(self.eval(expr)?)),
        }
    }

    /// Evaluates a single statement.
    ///
    /// A variable declaration binds its value in the context and yields it; an
    /// expression statement just yields its value.
    ///
    /// # Errors
    /// - `VariableShadowing` when the declared name is already bound.
    /// - Any error raised while evaluating the expression.
    ///
    /// # Example
    /// ```
    /// use softmath::{
    ///     ast::{Expr, Statement},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// let declaration =
    ///     Statement::VariableDeclaration { name:  "x".to_string(),
    ///                                      value: Expr::Literal { value: 4.0, line: 1 },
    ///                                      line:  1, };
    ///
    /// assert_eq!(context.eval_statement(&declaration).unwrap(), 4.0);
    /// assert!(context.eval_statement(&declaration).is_err());
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        match statement {
            Statement::VariableDeclaration { name, value, line } => {
                if self.variables.contains_key(name) {
                    return Err(RuntimeError::VariableShadowing { name: name.clone(),
                                                                 line: *line, });
                }

                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                Ok(value)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }

    /// Resolves a variable or named constant.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if the name is neither a
    /// constant nor a declared variable.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<f64> {
        if let Some((_, value)) = CONSTANTS.iter().find(|(constant, _)| *constant == name) {
            return Ok(*value);
        }

        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}
