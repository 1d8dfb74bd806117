use crate::error::RuntimeError;

/// A runtime failure attributed to the top-level call that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionError {
    /// The 1-based position of the failing top-level call.
    pub line:     usize,
    /// The innermost user function executing when the error was raised.
    pub function: Option<String>,
    /// The underlying failure.
    pub error:    RuntimeError,
}

impl ExecutionError {
    /// Attributes `error` to the top-level call at `line`.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::error::{ExecutionError, RuntimeError};
    ///
    /// let error = ExecutionError::new(3, RuntimeError::Overflow.in_function("grow"));
    ///
    /// assert_eq!(error.to_string(),
    ///            "Error on line 3 while executing function 'grow': Integer overflow while trying to compute result.");
    /// ```
    #[must_use]
    pub fn new(line: usize, error: RuntimeError) -> Self {
        let (function, error) = error.into_parts();
        Self { line,
               function,
               error }
    }
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.function {
            Some(function) => write!(f,
                                     "Error on line {} while executing function '{function}': {}",
                                     self.line, self.error),
            None => write!(f, "Error on line {}: {}", self.line, self.error),
        }
    }
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
