use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// The `line` carried by every grammar error is the 1-based position of the
/// top-level call being parsed, not a physical source line.
pub enum ParseError {
    /// The token stream could not be produced.
    Lex(LexError),
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The top-level call where the error occurred.
        line:  usize,
    },
    /// Reached the end of input where a token was expected.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
        /// The top-level call where the error occurred.
        line:     usize,
    },
    /// An opening parenthesis `(` was expected after a call name.
    ExpectedOpeningParen {
        /// The call name.
        name:  String,
        /// The token found instead, if any.
        found: Option<String>,
        /// The top-level call where the error occurred.
        line:  usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token found instead, if any.
        found: Option<String>,
        /// The top-level call where the error occurred.
        line:  usize,
    },
    /// A comma appeared directly before a closing delimiter.
    TrailingComma {
        /// The construct being parsed: `function call`, `List` or `Dict`.
        context: &'static str,
        /// The top-level call where the error occurred.
        line:    usize,
    },
    /// A dictionary key was not a string literal.
    KeyType {
        /// The top-level call where the error occurred.
        line: usize,
    },
    /// An integer literal was too large to be represented safely.
    LiteralTooLarge {
        /// The literal text.
        token: String,
        /// The top-level call where the error occurred.
        line:  usize,
    },
    /// A `:` was expected between a dictionary key and its value.
    ExpectedColon {
        /// The token found instead, if any.
        found: Option<String>,
        /// The top-level call where the error occurred.
        line:  usize,
    },
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

/// Renders an optional token the way error messages quote it.
fn describe(found: Option<&String>) -> String {
    found.map_or_else(|| "nothing".to_string(), |token| format!("'{token}'"))
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),

            Self::UnexpectedToken { token, line } => {
                write!(f, "ParseError on line {line}: Unexpected token '{token}'.")
            },

            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "ParseError on line {line}: Expected {expected}, but got nothing."),

            Self::ExpectedOpeningParen { name, found, line } => write!(f,
                                                                       "ParseError on line {line}: Expected '(' after '{name}', but got {}.",
                                                                       describe(found.as_ref())),

            Self::ExpectedClosingParen { found, line } => write!(f,
                                                                 "ParseError on line {line}: Expected ')', but got {}.",
                                                                 describe(found.as_ref())),

            Self::TrailingComma { context, line } => {
                write!(f, "ParseError on line {line}: Trailing comma in {context}.")
            },

            Self::KeyType { line } => write!(f,
                                             "ParseError on line {line}: Dict keys must be String literals."),

            Self::LiteralTooLarge { token, line } => {
                write!(f, "ParseError on line {line}: Literal {token} is too large.")
            },

            Self::ExpectedColon { found, line } => write!(f,
                                                          "ParseError on line {line}: Expected ':' after Dict key, but got {}.",
                                                          describe(found.as_ref())),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}
