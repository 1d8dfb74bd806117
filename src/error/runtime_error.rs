#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors do not carry a position themselves; `interpret` attaches
/// the failing top-level call through [`ExecutionError`](crate::error::ExecutionError).
pub enum RuntimeError {
    /// An identifier did not follow the convention its binding site demands.
    Naming {
        /// The offending identifier.
        name:     String,
        /// Human readable description of the expected convention.
        expected: &'static str,
    },
    /// Tried to bind a name from the reserved-name set.
    ReservedName {
        /// The reserved identifier.
        name: String,
    },
    /// Tried to re-bind a SCREAMING_SNAKE_CASE constant.
    ReassignConstant {
        /// The name of the constant.
        name: String,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The function being called.
        function: String,
        /// Description of the accepted count, e.g. `exactly 2`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A dictionary key or list item was not present.
    KeyNotFound {
        /// Display form of the missing key or item.
        key:       String,
        /// `Dict` or `List`.
        container: &'static str,
    },
    /// Tried to access a list element outside the allowed bounds.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  i64,
        /// The length of the list.
        length: usize,
    },
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is neither built in nor defined.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Called a variable whose value is not a function.
    NotCallable {
        /// The name of the variable.
        name: String,
    },
    /// Integer arithmetic overflowed.
    Overflow,
    /// User functions nested deeper than the interpreter allows.
    RecursionLimit {
        /// The maximum number of nested user-function calls.
        limit: usize,
    },
    /// Writing to the output sink failed.
    Output {
        /// The underlying I/O error message.
        details: String,
    },
    /// An error that escaped from the body of a user function.
    InFunction {
        /// The user function that was executing.
        name:   String,
        /// The original error.
        source: Box<Self>,
    },
}

impl RuntimeError {
    /// Tags `self` with the user function it escaped from.
    ///
    /// Errors that already carry a function keep the innermost one.
    #[must_use]
    pub fn in_function(self, name: &str) -> Self {
        match self {
            Self::InFunction { .. } => self,
            other => Self::InFunction { name:   name.to_string(),
                                        source: Box::new(other), },
        }
    }

    /// Splits off the innermost function tag, if any.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::error::RuntimeError;
    ///
    /// let error = RuntimeError::Overflow.in_function("square");
    /// let (function, cause) = error.into_parts();
    ///
    /// assert_eq!(function.as_deref(), Some("square"));
    /// assert_eq!(cause, RuntimeError::Overflow);
    /// ```
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, Self) {
        match self {
            Self::InFunction { name, source } => (Some(name), *source),
            other => (None, other),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Naming { name, expected } => {
                write!(f, "Name '{name}' must be in {expected}.")
            },
            Self::ReservedName { name } => write!(f, "Cannot define reserved name '{name}'."),
            Self::ReassignConstant { name } => {
                write!(f, "Cannot reassign constant Variable '{name}'.")
            },
            Self::TypeError { details } => write!(f, "Type error: {details}."),
            Self::ArgumentCountMismatch { function,
                                          expected,
                                          found, } => write!(f,
                                                             "'{function}' expects {expected} argument(s), got {found}."),
            Self::KeyNotFound { key, container } => {
                write!(f, "'{key}' not found in {container}.")
            },
            Self::IndexOutOfBounds { index, length } => write!(f,
                                                               "Index out of bounds: {index} for List of length {length}."),
            Self::UnknownVariable { name } => write!(f, "Variable '{name}' is not defined."),
            Self::UnknownFunction { name } => write!(f, "Function '{name}' is not defined."),
            Self::NotCallable { name } => {
                write!(f, "Cannot call Variable '{name}' as it is not a Function.")
            },
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::RecursionLimit { limit } => {
                write!(f, "Maximum recursion depth of {limit} exceeded.")
            },
            Self::Output { details } => write!(f, "Failed to write output: {details}."),
            Self::InFunction { source, .. } => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
