/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// code: invalid lexemes, unexpected tokens, redeclarations, undeclared
/// names, and invalid assignment targets detected before execution.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution: assignment
/// to a constant, failed numeric coercions, and evaluation of constructs the
/// core does not support.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
