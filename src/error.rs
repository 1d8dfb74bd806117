/// Execution errors.
///
/// Wraps a runtime error with the position of the top-level call that was
/// running and, when the failure escaped a user function, that function's
/// name. This is the only error `interpret` reports.
pub mod execution_error;
/// Lexing errors.
///
/// Raised while turning raw source text into tokens, for example when a
/// string literal is never closed.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the expression tree
/// from the token stream. Parse errors include missing parentheses, trailing
/// commas, malformed dictionary literals and premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised by built-ins and user-function
/// invocation: naming violations, type mismatches, arity mismatches, missing
/// keys or indices, and unknown names.
pub mod runtime_error;

pub use execution_error::ExecutionError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error surfaced by running a program end to end.
#[derive(Debug)]
pub enum Error {
    /// The source text could not be tokenized or parsed.
    Parse(ParseError),
    /// A top-level statement failed while being evaluated.
    Execution(ExecutionError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<ExecutionError> for Error {
    fn from(error: ExecutionError) -> Self {
        Self::Execution(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Execution(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Execution(e) => Some(e),
        }
    }
}
