use std::{collections::BTreeMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult, stack::ensure_sufficient_stack,
        value::function::UserFunction,
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce. Composite values are
/// shared behind `Rc` and never mutated in place: operations that "modify" a
/// list or dict build a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// The absence of a value. Statements that only have side effects yield
    /// `Null`, which is also what lets a body keep running.
    Null,
    /// An ordered list of values.
    List(Rc<Vec<Self>>),
    /// A mapping from string keys to values.
    Dict(Rc<BTreeMap<String, Self>>),
    /// A user-defined function.
    Function(Rc<UserFunction>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(v: BTreeMap<String, Self>) -> Self {
        Self::Dict(Rc::new(v))
    }
}

impl From<UserFunction> for Value {
    fn from(v: UserFunction) -> Self {
        Self::Function(Rc::new(v))
    }
}

impl Value {
    /// Name of the value's type as it appears in error messages.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "Integer");
    /// assert_eq!(Value::from(Vec::<Value>::new()).type_name(), "List");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Real(_) => "Float",
            Self::Str(_) => "String",
            Self::Bool(_) => "Boolean",
            Self::Null => "null",
            Self::List(_) => "List",
            Self::Dict(_) => "Dict",
            Self::Function(_) => "Function",
        }
    }

    /// Maps the value to a boolean for conditional contexts.
    ///
    /// Booleans are themselves, numbers are truthy when non-zero, strings,
    /// lists and dicts when non-empty. `Null` is falsy and functions are
    /// truthy.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(l) => !l.is_empty(),
            Self::Dict(d) => !d.is_empty(),
            Self::Null => false,
            Self::Function(_) => true,
        }
    }

    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts the value to a numeric `f64`, or returns an error if it is not
    /// a number.
    ///
    /// # Parameters
    /// - `context`: Description of the operation, used in the error message.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, context: &str) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            other => Err(RuntimeError::TypeError { details: format!("{context} expects a number, got {}",
                                                                    other.type_name()) }),
        }
    }

    /// Borrows the elements of a list, or returns an error if not a list.
    pub fn as_list(&self, context: &str) -> EvalResult<&Rc<Vec<Self>>> {
        match self {
            Self::List(l) => Ok(l),
            other => Err(RuntimeError::TypeError { details: format!("{context} must be a List, got {}",
                                                                    other.type_name()) }),
        }
    }

    /// Returns `true` if the value is an [`Integer`](Value::Integer) or a
    /// [`Real`](Value::Real).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::List(l) => ensure_sufficient_stack(|| {
                write!(f, "[")?;

                for (index, value) in l.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            }),
            Self::Dict(d) => ensure_sufficient_stack(|| {
                write!(f, "{{")?;
                for (index, (key, value)) in d.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                write!(f, "}}")
            }),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}
