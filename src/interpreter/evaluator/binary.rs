use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::Context,
    math::{elementary::fmod, pow::pow},
};

impl Context {
    /// Evaluates a binary operation on two values.
    ///
    /// `+`, `-`, `*` and `/` follow IEEE arithmetic, so division by zero
    /// produces a signed infinity (or NaN for `0 / 0`) instead of an error.
    /// `%` is [`fmod`] and `^` is [`pow`].
    ///
    /// # Parameters
    /// - `op`: Operator to apply.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use softmath::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, -7.0, 3.0), -1.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Mod => fmod(left, right),
            BinaryOperator::Pow => pow(left, right),
        }
    }
}
