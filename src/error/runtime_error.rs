#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a variable that already exists.
    VariableShadowing {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A builtin was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the builtin.
        name:  String,
        /// The number of arguments supplied.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value was too large to be converted safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value was too small to be converted safely.
    LiteralTooSmall {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to use a real number where an integer was required.
    RealIsFractional {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::VariableShadowing { name, line } => write!(f,
                                                             "Error on line {line}: Variable shadowing is not allowed: '{name}'."),

            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::ArgumentCountMismatch { name, found, line } => write!(f,
                                                                        "Error on line {line}: Argument count mismatch: '{name}' cannot be called with {found} argument(s)."),

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::LiteralTooSmall { line } => {
                write!(f, "Error on line {line}: Literal is too small.")
            },
            Self::RealIsFractional { line } => write!(f,
                                                      "Error on line {line}: Value is fractional and cannot be safely converted to an integer."),
        }
    }
}

impl std::error::Error for RuntimeError {}
