use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        function::builtin,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
type BuiltinFn = fn(&[f64], usize) -> EvalResult<f64>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"      => { arity: Arity::Exact(1), func: builtin::abs },
    "fabs"     => { arity: Arity::Exact(1), func: builtin::fabs },
    "floor"    => { arity: Arity::Exact(1), func: builtin::floor },
    "ceil"     => { arity: Arity::Exact(1), func: builtin::ceil },
    "fmod"     => { arity: Arity::Exact(2), func: builtin::fmod },
    "sqrt"     => { arity: Arity::Exact(1), func: builtin::sqrt },
    "exp"      => { arity: Arity::Exact(1), func: builtin::exp },
    "ln"       => { arity: Arity::Exact(1), func: builtin::ln },
    "log"      => { arity: Arity::OneOf(&[1, 2]), func: builtin::log },
    "pow"      => { arity: Arity::Exact(2), func: builtin::pow },
    "sin"      => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"      => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"      => { arity: Arity::Exact(1), func: builtin::tan },
    "asin"     => { arity: Arity::Exact(1), func: builtin::asin },
    "acos"     => { arity: Arity::Exact(1), func: builtin::acos },
    "atan"     => { arity: Arity::Exact(1), func: builtin::atan },
    "isfinite" => { arity: Arity::Exact(1), func: builtin::isfinite },
    "isinf"    => { arity: Arity::Exact(1), func: builtin::isinf },
    "isnan"    => { arity: Arity::Exact(1), func: builtin::isnan },
    "print"    => { arity: Arity::Exact(1), func: builtin::print },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

impl Context {
    /// Evaluates a builtin function call.
    ///
    /// The name is looked up in the builtin table, the argument count is
    /// verified against the builtin's arity and the builtin is executed.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arg_vals`: Evaluated argument values.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    ///
    /// # Example
    /// ```
    /// use softmath::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_function("pow", &[2.0, 10.0], 1).unwrap(), 1024.0);
    /// assert!(Context::eval_function("pow", &[2.0], 1).is_err());
    /// assert!(Context::eval_function("gamma", &[2.0], 1).is_err());
    /// ```
    pub fn eval_function(name: &str, arg_vals: &[f64], line: usize) -> EvalResult<f64> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name:
                                                                                      name.to_string(),
                                                                                  line })?;

        if !builtin.arity.check(arg_vals.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             found: arg_vals.len(),
                                                             line });
        }

        (builtin.func)(arg_vals, line)
    }
}
