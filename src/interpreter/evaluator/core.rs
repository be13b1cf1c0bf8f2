use std::io::{self, Write};

use crate::{
    ast::{Command, Expr},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// A specialized [`Result`] type for evaluation operations.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The execution context of a program.
///
/// Owns the environment whose cells were allocated during parsing and the
/// writer the `debug` statement prints to. Because every variable reference
/// in the tree is already a cell index, execution reads and writes storage
/// directly.
pub struct Context<W: Write> {
    /// The scope chain and variable cells of the running program.
    pub environment: Environment,
    out:             W,
}

impl Context<io::Stdout> {
    /// Creates a context that prints `debug` output to standard output.
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self::with_output(environment, io::stdout())
    }
}

impl<W: Write> Context<W> {
    /// Creates a context that prints `debug` output to `out`.
    ///
    /// Tests use this with an in-memory buffer to capture what a program
    /// prints.
    pub fn with_output(environment: Environment, out: W) -> Self {
        Self { environment, out }
    }

    /// Executes a command for its effects.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised anywhere inside the
    /// command; execution stops at that point.
    pub fn execute(&mut self, command: &Command) -> EvalResult<()> {
        match command {
            Command::Blocks { commands, .. } => {
                for command in commands {
                    self.execute(command)?;
                }

                Ok(())
            },

            Command::Initialize { variable, expr, .. } => {
                let value = self.eval(expr)?;
                self.environment.set_value(*variable, value);

                Ok(())
            },

            Command::Assign { rhs, lhs, line } => {
                let value = self.eval(rhs)?;

                if let Some(cell) = lhs {
                    if self.environment.cell(*cell).is_constant() {
                        let name = self.environment.cell(*cell).name().to_string();
                        return Err(RuntimeError::ConstantAssignment { name, line: *line });
                    }

                    self.environment.set_value(*cell, value);
                }

                Ok(())
            },

            Command::Debug { expr, line } => {
                let value = self.eval(expr)?;
                writeln!(self.out, "{value}").map_err(|_| RuntimeError::OutputFailure { line: *line })
            },

            Command::If { condition,
                          then_branch,
                          else_branch,
                          .. } => {
                if self.eval(condition)?.truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            },

            Command::While { condition, body, .. } => {
                while self.eval(condition)?.truthy() {
                    self.execute(body)?;
                }

                Ok(())
            },

            Command::For { line, .. } => {
                Err(RuntimeError::UnsupportedConstruct { construct: "a for loop",
                                                         line:      *line, })
            },
        }
    }

    /// Evaluates an expression to a value.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] when a coercion fails, a mutation targets
    /// a constant, or the expression is a parsed-only construct.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Const { value, .. } => Ok(value.clone()),

            Expr::Variable { cell, .. } => Ok(self.environment.value(*cell).clone()),

            Expr::Unary { op, operand, line } => self.eval_unary(*op, operand, *line),

            Expr::Binary { left,
                           op,
                           right,
                           line, } => self.eval_binary(left, *op, right, *line),

            Expr::List { line, .. } => {
                Err(RuntimeError::UnsupportedConstruct { construct: "a list literal",
                                                         line:      *line, })
            },

            Expr::Object { line, .. } => {
                Err(RuntimeError::UnsupportedConstruct { construct: "an object literal",
                                                         line:      *line, })
            },

            Expr::Function { line, .. } => {
                Err(RuntimeError::UnsupportedConstruct { construct: "a function literal",
                                                         line:      *line, })
            },

            Expr::Call { line, .. } => {
                Err(RuntimeError::UnsupportedConstruct { construct: "a function call",
                                                         line:      *line, })
            },
        }
    }
}
