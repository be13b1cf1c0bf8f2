#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer could not recognize a character sequence.
    InvalidLexeme {
        /// The offending lexeme.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of what was found versus what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a name that already exists in the same scope.
    Redeclaration {
        /// The redeclared name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Referenced a name that is not declared in any enclosing scope.
    UndeclaredName {
        /// The unknown name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of an assignment is not a settable expression.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLexeme { lexeme, line } => {
                write!(f, "Error on line {line}: Invalid lexeme [{lexeme}].")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::Redeclaration { name, line } => {
                write!(f, "Error on line {line}: Name '{name}' is already declared in this scope.")
            },

            Self::UndeclaredName { name, line } => {
                write!(f, "Error on line {line}: Name '{name}' is not declared.")
            },

            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Assignment target is not a variable.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
