use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a binary operation.
    ///
    /// `&&` and `||` short-circuit here, before the right operand exists as
    /// a value; everything else is delegated to [`eval_binary_values`].
    pub(crate) fn eval_binary(&mut self,
                              left: &Expr,
                              op: BinaryOperator,
                              right: &Expr,
                              line: usize)
                              -> EvalResult<Value> {
        match op {
            BinaryOperator::And => {
                if !self.eval(left)?.truthy() {
                    return Ok(Value::Bool(false));
                }

                Ok(Value::Bool(self.eval(right)?.truthy()))
            },

            BinaryOperator::Or => {
                if self.eval(left)?.truthy() {
                    return Ok(Value::Bool(true));
                }

                Ok(Value::Bool(self.eval(right)?.truthy()))
            },

            _ => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                eval_binary_values(op, &lhs, &rhs, line)
            },
        }
    }
}

/// Applies a binary operator to two computed values.
///
/// Equality and inequality compare values structurally and never coerce, so
/// `1 == "1"` is `false`. The comparisons and the arithmetic operators
/// coerce both operands to numbers first; division follows floating-point
/// rules, so dividing by zero yields an infinity rather than an error.
///
/// # Errors
/// Returns [`crate::error::RuntimeError::TypeError`] when an operand of a
/// numeric operator cannot be coerced.
///
/// # Example
/// ```
/// use minijs::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary_values,
///              interpreter::value::Value};
///
/// let sum = eval_binary_values(BinaryOperator::Add, &Value::Text("3".into()), &Value::Text("4".into()), 1);
/// assert_eq!(sum.unwrap(), Value::Number(7.0));
///
/// let mixed = eval_binary_values(BinaryOperator::Equal, &Value::Number(1.0), &Value::Text("1".into()), 1);
/// assert_eq!(mixed.unwrap(), Value::Bool(false));
/// ```
pub fn eval_binary_values(op: BinaryOperator, lhs: &Value, rhs: &Value, line: usize) -> EvalResult<Value> {
    match op {
        BinaryOperator::And => Ok(Value::Bool(lhs.truthy() && rhs.truthy())),
        BinaryOperator::Or => Ok(Value::Bool(lhs.truthy() || rhs.truthy())),

        BinaryOperator::Equal => Ok(Value::Bool(lhs == rhs)),
        BinaryOperator::NotEqual => Ok(Value::Bool(lhs != rhs)),

        BinaryOperator::LowerThan => Ok(Value::Bool(lhs.as_number(line)? < rhs.as_number(line)?)),
        BinaryOperator::LowerEqual => Ok(Value::Bool(lhs.as_number(line)? <= rhs.as_number(line)?)),
        BinaryOperator::GreaterThan => Ok(Value::Bool(lhs.as_number(line)? > rhs.as_number(line)?)),
        BinaryOperator::GreaterEqual => Ok(Value::Bool(lhs.as_number(line)? >= rhs.as_number(line)?)),

        BinaryOperator::Add => Ok(Value::Number(lhs.as_number(line)? + rhs.as_number(line)?)),
        BinaryOperator::Sub => Ok(Value::Number(lhs.as_number(line)? - rhs.as_number(line)?)),
        BinaryOperator::Mul => Ok(Value::Number(lhs.as_number(line)? * rhs.as_number(line)?)),
        BinaryOperator::Div => Ok(Value::Number(lhs.as_number(line)? / rhs.as_number(line)?)),
    }
}
