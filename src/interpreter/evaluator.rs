/// The binary module evaluates binary operations.
///
/// The short-circuit connectives are handled at the expression level so the
/// right operand stays unevaluated when the left already decides the
/// result; every other operator works on two computed values.
pub mod binary;
/// The core module holds the execution context and the command/expression
/// walkers.
///
/// The context owns the environment produced by parsing and the output
/// channel `debug` writes to.
pub mod core;
/// The unary module evaluates unary operations, including the mutating
/// increment and decrement forms.
pub mod unary;
