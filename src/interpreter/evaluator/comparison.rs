use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `eq(a, b)`: structural equality of the two values.
    ///
    /// An integer never equals a float, even of the same magnitude.
    pub fn eval_eq(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let lhs = self.eval(&args[0])?;
        let rhs = self.eval(&args[1])?;
        Ok(Value::Bool(lhs == rhs))
    }

    /// Evaluates `lt(a, b)`.
    pub fn eval_lt(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let lhs = self.eval(&args[0])?;
        let rhs = self.eval(&args[1])?;
        less_than(&lhs, &rhs).map(Value::Bool)
    }
}

/// Orders two values of the same kind.
///
/// Numbers compare numerically (an integer and a float compare as floats),
/// strings lexicographically and lists by length.
///
/// # Errors
/// `TypeError` for any other pair.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::{evaluator::comparison::less_than, value::core::Value};
///
/// assert!(less_than(&Value::Integer(1), &Value::Real(1.5)).unwrap());
/// assert!(less_than(&Value::from("apple"), &Value::from("banana")).unwrap());
/// assert!(less_than(&Value::from("a"), &Value::Integer(1)).is_err());
/// ```
pub fn less_than(lhs: &Value, rhs: &Value) -> EvalResult<bool> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => Ok(a < b),
        (a, b) if a.is_number() && b.is_number() => Ok(a.as_real("lt")? < b.as_real("lt")?),
        (Value::Str(a), Value::Str(b)) => Ok(a < b),
        (Value::List(a), Value::List(b)) => Ok(a.len() < b.len()),
        (a, b) => Err(RuntimeError::TypeError { details: format!("'lt' cannot compare {} and {}",
                                                                 a.type_name(),
                                                                 b.type_name()) }),
    }
}
