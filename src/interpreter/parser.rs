/// The binary module parses the layered binary-operator grammar.
///
/// Precedence is encoded structurally: logical connectives sit above a
/// single, non-chaining relational layer, which sits above additive and
/// multiplicative arithmetic.
pub mod binary;
/// The command module parses statements: blocks, declarations, `debug`,
/// control flow, and assignments.
///
/// Block and loop parsing create and leave scope frames in lock-step with
/// the source nesting.
pub mod command;
/// The core module holds the parser state and the program entry point.
///
/// The state couples the peekable token stream with the live scope chain,
/// so declaration and name resolution happen during the descent itself.
pub mod core;
/// The unary module parses prefix and postfix operators and the factor
/// layer: literals, grouping, list/object/function forms, variable
/// references, and call suffixes.
pub mod unary;
