use std::{io::Write, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `add(a, b, ...)` as a left fold over its arguments.
    ///
    /// A dict followed by a string key consumes the argument after the key as
    /// the value to insert, so `add(d, "k", 1)` is one insertion rather than
    /// two additions.
    ///
    /// # Parameters
    /// - `args`: The unevaluated arguments, at least two.
    ///
    /// # Returns
    /// The accumulated value.
    pub fn eval_add(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let mut result = self.eval(&args[0])?;
        let mut rest = args[1..].iter();

        while let Some(arg) = rest.next() {
            let next = self.eval(arg)?;

            result = match (result, next) {
                (Value::Dict(dict), Value::Str(key)) if rest.len() > 0 => {
                    let value = match rest.next() {
                        Some(value) => self.eval(value)?,
                        None => Value::Null,
                    };
                    let mut dict = Rc::unwrap_or_clone(dict);
                    dict.insert(key, value);
                    Value::from(dict)
                },
                (lhs, rhs) => add_values(lhs, rhs)?,
            };
        }

        Ok(result)
    }

    /// Evaluates `sub(a, b, ...)` as a left fold over its arguments.
    pub fn eval_sub(&mut self, args: &[Expr]) -> EvalResult<Value> {
        self.fold_args(args, sub_values)
    }

    /// Evaluates `mult(a, b, ...)` as a left fold over its arguments.
    pub fn eval_mult(&mut self, args: &[Expr]) -> EvalResult<Value> {
        self.fold_args(args, mult_values)
    }

    fn fold_args(&mut self,
                 args: &[Expr],
                 op: fn(Value, Value) -> EvalResult<Value>)
                 -> EvalResult<Value> {
        let mut result = self.eval(&args[0])?;
        for arg in &args[1..] {
            let next = self.eval(arg)?;
            result = op(result, next)?;
        }
        Ok(result)
    }
}

/// Adds two values.
///
/// - Two integers add as integers; any other pair of numbers adds as floats.
/// - Strings concatenate.
/// - Two lists concatenate; a list and any other value appends it.
/// - Two dicts merge, entries of `rhs` winning.
///
/// # Errors
/// `Overflow` if integer addition overflows, `TypeError` for any other pair.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::{evaluator::arithmetic::add_values, value::core::Value};
///
/// assert_eq!(add_values(Value::Integer(1), Value::Integer(2)).unwrap(), Value::Integer(3));
/// assert_eq!(add_values(Value::Integer(1), Value::Real(0.5)).unwrap(), Value::Real(1.5));
/// assert_eq!(add_values("ab".into(), "cd".into()).unwrap(), Value::from("abcd"));
/// assert!(add_values(Value::Bool(true), Value::Integer(1)).is_err());
/// ```
pub fn add_values(lhs: Value, rhs: Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => a.checked_add(b)
                                                   .map(Value::Integer)
                                                   .ok_or(RuntimeError::Overflow),
        (lhs, rhs) if lhs.is_number() && rhs.is_number() => {
            Ok(Value::Real(lhs.as_real("add")? + rhs.as_real("add")?))
        },
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
        (Value::List(a), Value::List(b)) => {
            let mut items = Rc::unwrap_or_clone(a);
            items.extend(b.iter().cloned());
            Ok(Value::from(items))
        },
        (Value::List(a), item) => {
            let mut items = Rc::unwrap_or_clone(a);
            items.push(item);
            Ok(Value::from(items))
        },
        (Value::Dict(a), Value::Dict(b)) => {
            let mut dict = Rc::unwrap_or_clone(a);
            dict.extend(b.iter().map(|(k, v)| (k.clone(), v.clone())));
            Ok(Value::from(dict))
        },
        (lhs, rhs) => Err(mismatch("add", &lhs, &rhs)),
    }
}

/// Subtracts `rhs` from `lhs`.
///
/// - Numbers subtract with the same promotion rule as [`add_values`].
/// - A string has every occurrence of `rhs` removed.
/// - A list minus a list drops every element found in `rhs`.
/// - A list minus any other value drops its first occurrence.
/// - A dict minus a string drops that key.
///
/// # Errors
/// `KeyNotFound` when the item or key is absent, `Overflow` on integer
/// overflow, `TypeError` for any other pair.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::{evaluator::arithmetic::sub_values, value::core::Value};
///
/// assert_eq!(sub_values("banana".into(), "an".into()).unwrap(), Value::from("ba"));
///
/// let list = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(1)]);
/// let expected = Value::from(vec![Value::Integer(2), Value::Integer(1)]);
/// assert_eq!(sub_values(list, Value::Integer(1)).unwrap(), expected);
/// ```
pub fn sub_values(lhs: Value, rhs: Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => a.checked_sub(b)
                                                   .map(Value::Integer)
                                                   .ok_or(RuntimeError::Overflow),
        (lhs, rhs) if lhs.is_number() && rhs.is_number() => {
            Ok(Value::Real(lhs.as_real("sub")? - rhs.as_real("sub")?))
        },
        (Value::Str(a), Value::Str(b)) => {
            if b.is_empty() {
                return Ok(Value::Str(a));
            }
            Ok(Value::Str(a.replace(&b, "")))
        },
        (Value::List(a), Value::List(b)) => {
            let mut items = Rc::unwrap_or_clone(a);
            items.retain(|item| !b.contains(item));
            Ok(Value::from(items))
        },
        (Value::List(a), item) => {
            let Some(position) = a.iter().position(|element| *element == item) else {
                return Err(RuntimeError::KeyNotFound { key:       item.to_string(),
                                                       container: "List", });
            };
            let mut items = Rc::unwrap_or_clone(a);
            items.remove(position);
            Ok(Value::from(items))
        },
        (Value::Dict(a), Value::Str(key)) => {
            let mut dict = Rc::unwrap_or_clone(a);
            if dict.remove(&key).is_none() {
                return Err(RuntimeError::KeyNotFound { key,
                                                       container: "Dict" });
            }
            Ok(Value::from(dict))
        },
        (lhs, rhs) => Err(mismatch("sub", &lhs, &rhs)),
    }
}

/// Multiplies two numbers.
///
/// # Errors
/// `Overflow` on integer overflow, `TypeError` unless both are numbers.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::{evaluator::arithmetic::mult_values, value::core::Value};
///
/// assert_eq!(mult_values(Value::Integer(5), Value::Integer(5)).unwrap(), Value::Integer(25));
/// assert_eq!(mult_values(Value::Integer(2), Value::Real(1.5)).unwrap(), Value::Real(3.0));
/// assert!(mult_values("ab".into(), Value::Integer(2)).is_err());
/// ```
pub fn mult_values(lhs: Value, rhs: Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => a.checked_mul(b)
                                                   .map(Value::Integer)
                                                   .ok_or(RuntimeError::Overflow),
        (lhs, rhs) if lhs.is_number() && rhs.is_number() => {
            Ok(Value::Real(lhs.as_real("mult")? * rhs.as_real("mult")?))
        },
        (lhs, rhs) => Err(mismatch("mult", &lhs, &rhs)),
    }
}

fn mismatch(function: &str, lhs: &Value, rhs: &Value) -> RuntimeError {
    RuntimeError::TypeError { details: format!("'{function}' cannot combine {} and {}",
                                               lhs.type_name(),
                                               rhs.type_name()) }
}
