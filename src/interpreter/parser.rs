/// Program-level parsing.
///
/// Splits the token stream into top-level calls and dispatches argument
/// parsing on one token of lookahead.
pub mod core;

/// Call parsing.
///
/// Parses `name(arg, ...)` both at the top level and nested inside arguments.
pub mod call;

/// Literal parsing.
///
/// Classifies bare words into numbers, literal keywords and variables, and
/// parses list and dict literals.
pub mod literal;

/// Utility functions for the parser.
///
/// Provides the shared comma-separated list parser with trailing-comma
/// detection.
pub mod utils;

pub use self::core::{ParseResult, parse};
