use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, utils::check_arity},
    math::{classify, elementary, exp, inverse_trig, log, pow, sqrt, trig},
    util::num::f64_to_i32_checked,
};

/// Applies a one-argument routine from [`crate::math`] to a value.
///
/// The generated functions accept exactly one argument and never fail beyond
/// the arity check: domain problems come back as NaN or infinity.
///
/// # Example
/// ```
/// use softmath::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(&[std::f64::consts::FRAC_PI_2], 1).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:path) => {
        #[doc = concat!("Builtin `", stringify!($fname), "`.")]
        pub fn $fname(args: &[f64], line: usize) -> EvalResult<f64> {
            check_arity(stringify!($fname), args, 1, line)?;
            Ok($real_fn(args[0]))
        }
    };
}

/// Applies a predicate from [`crate::math::classify`], mapping `true` to `1`
/// and `false` to `0`.
macro_rules! predicate_builtin {
    ($fname:ident, $predicate:path) => {
        #[doc = concat!("Builtin `", stringify!($fname), "`: `1` if the predicate holds, else `0`.")]
        pub fn $fname(args: &[f64], line: usize) -> EvalResult<f64> {
            check_arity(stringify!($fname), args, 1, line)?;
            Ok(if $predicate(args[0]) { 1.0 } else { 0.0 })
        }
    };
}

real_builtin!(fabs, elementary::fabs);
real_builtin!(floor, elementary::floor);
real_builtin!(ceil, elementary::ceil);
real_builtin!(sqrt, sqrt::sqrt);
real_builtin!(exp, exp::exp);
real_builtin!(ln, log::log);
real_builtin!(sin, trig::sin);
real_builtin!(cos, trig::cos);
real_builtin!(tan, trig::tan);
real_builtin!(asin, inverse_trig::asin);
real_builtin!(acos, inverse_trig::acos);
real_builtin!(atan, inverse_trig::atan);

predicate_builtin!(isfinite, classify::is_finite);
predicate_builtin!(isinf, classify::is_infinite);
predicate_builtin!(isnan, classify::is_nan);

/// Integer absolute value.
///
/// The argument must hold an exact 32-bit integer; fractional, non-finite or
/// out-of-range values are rejected rather than silently truncated.
///
/// # Example
/// ```
/// use softmath::{error::RuntimeError, interpreter::evaluator::function::builtin::abs};
///
/// assert_eq!(abs(&[-12.0], 1).unwrap(), 12.0);
///
/// let err = abs(&[-1.5], 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::RealIsFractional { line: 3 }));
/// ```
pub fn abs(args: &[f64], line: usize) -> EvalResult<f64> {
    check_arity("abs", args, 1, line)?;

    let value = f64_to_i32_checked(args[0], line)?;
    Ok(f64::from(elementary::abs(value)))
}

/// Floating-point remainder of two values.
///
/// # Example
/// ```
/// use softmath::interpreter::evaluator::function::builtin::fmod;
///
/// assert_eq!(fmod(&[7.5, 2.0], 1).unwrap(), 1.5);
/// ```
pub fn fmod(args: &[f64], line: usize) -> EvalResult<f64> {
    check_arity("fmod", args, 2, line)?;
    Ok(elementary::fmod(args[0], args[1]))
}

/// Raises the first argument to the power of the second.
///
/// # Example
/// ```
/// use softmath::interpreter::evaluator::function::builtin::pow;
///
/// assert_eq!(pow(&[3.0, 4.0], 1).unwrap(), 81.0);
/// ```
pub fn pow(args: &[f64], line: usize) -> EvalResult<f64> {
    check_arity("pow", args, 2, line)?;
    Ok(pow::pow(args[0], args[1]))
}

/// Computes a logarithm.
///
/// - With one argument: the natural logarithm.
/// - With two arguments: the logarithm of `args[0]` in base `args[1]`,
///   `ln(value) / ln(base)`.
///
/// # Example
/// ```
/// use softmath::interpreter::evaluator::function::builtin::log;
///
/// let r = log(&[1000.0, 10.0], 1).unwrap();
/// assert!((r - 3.0).abs() < 1e-12);
///
/// let r = log(&[1.0], 1).unwrap();
/// assert_eq!(r, 0.0);
/// ```
pub fn log(args: &[f64], line: usize) -> EvalResult<f64> {
    match args {
        [value] => Ok(log::log(*value)),
        [value, base] => Ok(log::log(*value) / log::log(*base)),
        _ => Err(RuntimeError::ArgumentCountMismatch { name: "log".to_string(),
                                                       found: args.len(),
                                                       line }),
    }
}

/// Prints a value to standard output and returns it unchanged.
///
/// # Example
/// ```
/// use softmath::interpreter::evaluator::function::builtin::print;
///
/// assert_eq!(print(&[2.5], 1).unwrap(), 2.5);
/// ```
pub fn print(args: &[f64], line: usize) -> EvalResult<f64> {
    check_arity("print", args, 1, line)?;

    println!("{}", args[0]);
    Ok(args[0])
}
