use std::io::Write;

use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a unary operation.
    ///
    /// The pure operators work on the operand's value; the increment and
    /// decrement forms mutate the operand's storage cell and differ only in
    /// which of the two numbers they yield.
    pub(crate) fn eval_unary(&mut self, op: UnaryOperator, operand: &Expr, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not | UnaryOperator::Plus | UnaryOperator::Minus => {
                let value = self.eval(operand)?;
                eval_unary_value(op, &value, line)
            },

            UnaryOperator::PreIncrement => self.step_variable(operand, 1.0, true, line),
            UnaryOperator::PreDecrement => self.step_variable(operand, -1.0, true, line),
            UnaryOperator::PostIncrement => self.step_variable(operand, 1.0, false, line),
            UnaryOperator::PostDecrement => self.step_variable(operand, -1.0, false, line),
        }
    }

    /// Adds `delta` to the variable behind `operand` and yields the new
    /// value (`pre`) or the old one (post).
    fn step_variable(&mut self, operand: &Expr, delta: f64, pre: bool, line: usize) -> EvalResult<Value> {
        let Expr::Variable { cell, .. } = operand else {
            return Err(RuntimeError::TypeError { details: "'++' and '--' require a variable".to_string(),
                                                 line });
        };

        let cell = *cell;
        if self.environment.cell(cell).is_constant() {
            let name = self.environment.cell(cell).name().to_string();
            return Err(RuntimeError::ConstantAssignment { name, line });
        }

        let old = self.environment.value(cell).as_number(line)?;
        let new = old + delta;
        self.environment.set_value(cell, Value::Number(new));

        Ok(Value::Number(if pre { new } else { old }))
    }
}

/// Applies a pure unary operator to a computed value.
///
/// # Errors
/// Returns [`RuntimeError::TypeError`] when `+` or `-` cannot coerce the
/// operand to a number, or when a mutating operator reaches this value-level
/// path.
///
/// # Example
/// ```
/// use minijs::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary_value,
///              interpreter::value::Value};
///
/// let negated = eval_unary_value(UnaryOperator::Minus, &Value::Text(" 2 ".into()), 1);
/// assert_eq!(negated.unwrap(), Value::Number(-2.0));
///
/// let inverted = eval_unary_value(UnaryOperator::Not, &Value::Undefined, 1);
/// assert_eq!(inverted.unwrap(), Value::Bool(true));
/// ```
pub fn eval_unary_value(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Bool(!value.truthy())),
        UnaryOperator::Plus => Ok(Value::Number(value.as_number(line)?)),
        UnaryOperator::Minus => Ok(Value::Number(-value.as_number(line)?)),

        UnaryOperator::PreIncrement
        | UnaryOperator::PreDecrement
        | UnaryOperator::PostIncrement
        | UnaryOperator::PostDecrement => {
            Err(RuntimeError::TypeError { details: "'++' and '--' require a variable".to_string(),
                                          line })
        },
    }
}
