use crate::{ast::UnaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: IEEE negation, so `-0` and `-nan` flip their sign bit.
    ///
    /// # Example
    /// ```
    /// use softmath::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
        }
    }
}
