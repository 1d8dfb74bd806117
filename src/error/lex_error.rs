#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// Input ended while a string literal was still open.
    UnterminatedString {
        /// The physical source line where the string was opened.
        line: usize,
    },
    /// A character that cannot start any token.
    UnexpectedCharacter {
        /// The offending text.
        token: String,
        /// The physical source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { line } => {
                write!(f, "LexError on line {line}: Unterminated string literal.")
            },
            Self::UnexpectedCharacter { token, line } => {
                write!(f, "LexError on line {line}: Unexpected character '{token}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
