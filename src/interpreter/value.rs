use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types that can appear in expressions,
/// assignments, and conditions. Values are immutable once constructed;
/// mutation happens only through the storage cells that hold them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A text value.
    Text(String),
    /// The deferred-value constant `undefined`, also the content of a
    /// declared-but-uninitialized variable.
    Undefined,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// Coerces the value to an `f64` using the single numeric conversion rule
    /// shared by all arithmetic and relational operators.
    ///
    /// - `Number` is returned as-is.
    /// - `Bool` converts `true` to `1` and `false` to `0`.
    /// - `Text` is trimmed and parsed as a decimal number.
    /// - `Undefined` never converts.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: The coerced number.
    /// - `Err(RuntimeError::TypeError)`: If the value is `Undefined` or
    ///   unparsable text.
    ///
    /// # Example
    /// ```
    /// use minijs::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_number(1).unwrap(), 1.0);
    /// assert_eq!(Value::Text("3.5".to_string()).as_number(1).unwrap(), 3.5);
    /// assert!(Value::Undefined.as_number(1).is_err());
    /// assert!(Value::Text("abc".to_string()).as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Self::Text(t) => t.trim().parse().map_err(|_| RuntimeError::TypeError {
                details: format!("'{t}' is not a number"),
                line,
            }),
            Self::Undefined => Err(RuntimeError::TypeError { details: "undefined is not a number".to_string(),
                                                             line }),
        }
    }

    /// Converts the value to a boolean by truthiness.
    ///
    /// `Undefined` is false, booleans pass through, every number except
    /// exactly zero is true, and text is true unless empty. Truthiness never
    /// fails, which is why `if` and `while` conditions accept any value.
    ///
    /// # Example
    /// ```
    /// use minijs::interpreter::value::Value;
    ///
    /// assert!(Value::Number(-0.5).truthy());
    /// assert!(!Value::Number(0.0).truthy());
    /// assert!(Value::Text("x".to_string()).truthy());
    /// assert!(!Value::Text(String::new()).truthy());
    /// assert!(!Value::Undefined.truthy());
    /// ```
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Bool(b) => *b,
            Self::Text(t) => !t.is_empty(),
            Self::Undefined => false,
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders the value the way the `debug` statement prints it: numbers
    /// without a trailing `.0`, booleans as `true`/`false`, text verbatim,
    /// and `undefined` literally.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(t) => write!(f, "{t}"),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}
