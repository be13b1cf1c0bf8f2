#[derive(Debug)]
/// Represents all errors that can be raised during evaluation and execution.
pub enum RuntimeError {
    /// Tried to assign through a `const` binding.
    ConstantAssignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value could not be coerced to the type an operator requires.
    TypeError {
        /// Details about the coercion failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Evaluated a construct that is parsed but has no runtime semantics.
    UnsupportedConstruct {
        /// The construct that was evaluated.
        construct: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Writing to the debug output channel failed.
    OutputFailure {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConstantAssignment { name, line } => {
                write!(f, "Error on line {line}: Cannot assign to constant '{name}'.")
            },

            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },

            Self::UnsupportedConstruct { construct, line } => {
                write!(f, "Error on line {line}: Cannot evaluate {construct}; it has no runtime support.")
            },

            Self::OutputFailure { line } => {
                write!(f, "Error on line {line}: Failed to write debug output.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
