//! # minijs
//!
//! minijs is an interpreter for a small JavaScript-like scripting language.
//! It tokenizes, parses, and executes scripts with support for `let`/`const`
//! declarations, block scoping, `if`/`while` control flow, a `debug` print
//! statement, and the usual arithmetic, relational, and logical operators.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::interpreter::{
    environment::Environment,
    evaluator::core::Context,
    lexer::tokenize,
    parser::core::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Command` and `Expr` enums that represent the
/// syntactic structure of a script as a tree. The tree is built by the parser
/// and walked by the evaluator.
///
/// # Responsibilities
/// - Defines command and expression types for all language constructs.
/// - Attaches source line numbers to every node for error reporting.
/// - Stores parse-time resolved variable cells so evaluation never performs a
///   name lookup.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing, or
/// executing a script. Every error carries the originating source line; the
/// first error anywhere aborts the whole run.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for user feedback.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together lexing, parsing, the scoped environment, value
/// representations, and evaluation to provide a complete runtime for the
/// language.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, environment, parser, evaluator.
/// - Provides the entry points for parsing and executing scripts.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Executes a script, writing `debug` output to standard output.
///
/// The source is tokenized and parsed as a whole program first; only when
/// parsing succeeds does execution start. Any lexical, syntactic, or runtime
/// error aborts the run and is returned to the caller.
///
/// # Errors
/// Returns an error if tokenization, parsing, or execution fails.
///
/// # Examples
/// ```
/// // A well-formed script runs to completion.
/// let res = minijs::run("let x = 1; x = x + 1;");
/// assert!(res.is_ok());
///
/// // Assigning to an undeclared name is caught while parsing.
/// let res = minijs::run("y = 1;");
/// assert!(res.is_err());
/// ```
pub fn run(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    run_with_output(source, io::stdout())
}

/// Executes a script, writing `debug` output to the given writer.
///
/// This is the same pipeline as [`run`] with an injectable output channel,
/// which is how the test suite captures `debug` lines.
///
/// # Errors
/// Returns an error if tokenization, parsing, or execution fails.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// minijs::run_with_output("debug 1 + 2;", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "3\n");
/// ```
pub fn run_with_output<W: Write>(source: &str, out: W) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    let mut environment = Environment::new();
    let program = parse_program(tokens.iter(), &mut environment)?;

    let mut context = Context::with_output(environment, out);
    context.execute(&program)?;

    Ok(())
}
