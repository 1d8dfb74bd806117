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
    /// Evaluates `get(container, key)`.
    pub fn eval_get(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let container = self.eval(&args[0])?;
        let key = self.eval(&args[1])?;
        get_value(&container, &key)
    }

    /// Evaluates `len(value)`.
    pub fn eval_len(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let value = self.eval(&args[0])?;
        len_value(&value)
    }
}

/// Reads an element of a list by index or an entry of a dict by key.
///
/// # Errors
/// - `IndexOutOfBounds` if a list index is outside `0..len`.
/// - `KeyNotFound` if a dict has no such key.
/// - `TypeError` if the container is not a list or dict, or the key has the
///   wrong type for it.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
///
/// use eucalyptus::{
///     error::RuntimeError,
///     interpreter::{evaluator::collection::get_value, value::core::Value},
/// };
///
/// let list = Value::from(vec![Value::Integer(10), Value::Integer(20)]);
/// assert_eq!(get_value(&list, &Value::Integer(1)).unwrap(), Value::Integer(20));
/// assert_eq!(get_value(&list, &Value::Integer(2)),
///            Err(RuntimeError::IndexOutOfBounds { index: 2, length: 2 }));
///
/// let dict = Value::from(BTreeMap::from([("a".to_string(), Value::Integer(1))]));
/// assert!(matches!(get_value(&dict, &Value::from("b")),
///                  Err(RuntimeError::KeyNotFound { .. })));
/// ```
pub fn get_value(container: &Value, key: &Value) -> EvalResult<Value> {
    match (container, key) {
        (Value::List(items), Value::Integer(index)) => usize::try_from(*index).ok()
                                                                           .and_then(|i| items.get(i))
                                                                           .cloned()
                                                                           .ok_or(RuntimeError::IndexOutOfBounds { index:  *index,
                                                                                                                   length: items.len(), }),
        (Value::Dict(entries), Value::Str(name)) => {
            entries.get(name)
                   .cloned()
                   .ok_or_else(|| RuntimeError::KeyNotFound { key:       name.clone(),
                                                              container: "Dict", })
        },
        (Value::List(_), other) => Err(RuntimeError::TypeError { details: format!("List index must be an Integer, got {}",
                                                                                  other.type_name()) }),
        (Value::Dict(_), other) => Err(RuntimeError::TypeError { details: format!("Dict key must be a String, got {}",
                                                                                  other.type_name()) }),
        (other, _) => Err(RuntimeError::TypeError { details: format!("'get' expects a List or Dict, got {}",
                                                                     other.type_name()) }),
    }
}

/// Number of characters in a string, elements in a list or entries in a
/// dict.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::{evaluator::collection::len_value, value::core::Value};
///
/// assert_eq!(len_value(&Value::from("héllo")).unwrap(), Value::Integer(5));
/// assert!(len_value(&Value::Integer(5)).is_err());
/// ```
pub fn len_value(value: &Value) -> EvalResult<Value> {
    let length = match value {
        Value::Str(s) => s.chars().count(),
        Value::List(items) => items.len(),
        Value::Dict(entries) => entries.len(),
        other => {
            return Err(RuntimeError::TypeError { details: format!("'len' expects a String, List or Dict, got {}",
                                                                  other.type_name()) });
        },
    };

    i64::try_from(length).map(Value::Integer)
                         .map_err(|_| RuntimeError::Overflow)
}
