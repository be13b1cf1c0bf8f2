/// The environment module manages lexical scopes and variable storage.
///
/// Scopes form a parent-linked chain stored in an arena; each scope maps
/// names to storage cells held in a flat cell arena. The parser creates and
/// leaves scopes in lock-step with blocks and loop bodies, resolving every
/// name reference to its cell index while parsing.
///
/// # Responsibilities
/// - Declares variables with shadowing and redeclaration rules.
/// - Resolves names through the scope chain at parse time.
/// - Provides direct cell access for resolution-free evaluation.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the command tree, executes commands for their
/// effects, and evaluates expressions to values, implementing the operator,
/// coercion, and short-circuit semantics of the language.
///
/// # Responsibilities
/// - Executes commands: blocks, declarations, assignments, `debug`, control
///   flow.
/// - Evaluates expressions, performing numeric coercion and truthiness
///   conversion.
/// - Reports runtime errors such as assignment to a constant.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a keyword, a
/// literal, an operator, or punctuation. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles numeric and text literals, identifiers, and operators.
/// - Surfaces invalid lexemes as errors instead of aborting the scan.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a single-pass recursive descent over the token stream. It
/// constructs the command/expression tree and simultaneously declares
/// variables into the live scope chain, so every reference is bound to its
/// storage cell by the time parsing finishes.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (commands, expressions).
/// - Validates grammar and syntax, reporting errors with line numbers.
/// - Interleaves declaration and name resolution with parsing.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum covering numbers, booleans, text, and the
/// deferred-value constant `undefined`, together with the coercion rules the
/// operators rely on and the textual rendering used by `debug`.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Implements numeric coercion and truthiness conversion.
/// - Renders values for the debug output channel.
pub mod value;
