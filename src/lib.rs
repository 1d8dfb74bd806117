//! # eucalyptus
//!
//! eucalyptus is a small dynamically typed scripting language written in
//! Rust. Every statement is a function call such as `print(add(1, 2))`; the
//! language has integers, floats, strings, booleans, `null`, lists, dicts and
//! user-defined functions, and enforces naming conventions at every binding
//! site.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Interpreter, parser::parse, reserved::ReservedNames, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of a program as a tree of function calls. The AST is
/// built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the three node kinds: literals, variables and calls.
/// - Attaches the position of the enclosing top-level call to every node.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a
/// program. It standardizes error reporting and carries the information a
/// caller needs to display a failure: what went wrong, on which top-level
/// call, and inside which user function.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and function names for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the scope stack,
/// value representations and the reserved-name configuration to provide a
/// complete runtime for eucalyptus programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

/// Parses and runs a program, printing to standard output.
///
/// # Returns
/// The last non-null value produced by a top-level call, if any.
///
/// # Errors
/// Returns an error if parsing fails or any top-level call fails.
///
/// # Examples
/// ```
/// use eucalyptus::{interpreter::{reserved::ReservedNames, value::core::Value}, run};
///
/// let result = run("def(x, 2) return(mult(x, 21))", ReservedNames::default()).unwrap();
/// assert_eq!(result, Some(Value::Integer(42)));
///
/// // 'y' is not defined.
/// assert!(run("print(y)", ReservedNames::default()).is_err());
/// ```
pub fn run(source: &str, reserved: ReservedNames) -> Result<Option<Value>, Error> {
    let mut interpreter = Interpreter::new(reserved);
    let program = parse(source)?;
    Ok(interpreter.interpret(&program)?)
}

/// Parses and runs a program, sending everything `print` writes to
/// `output`.
///
/// # Errors
/// Returns an error if parsing fails or any top-level call fails.
///
/// # Examples
/// ```
/// use eucalyptus::{interpreter::reserved::ReservedNames, run_with_output};
///
/// let mut output = Vec::new();
/// run_with_output(r#"forEach(n, [1, 2], print(n))"#, ReservedNames::default(), &mut output).unwrap();
///
/// assert_eq!(output, b"1\n2\n");
/// ```
pub fn run_with_output<W: Write>(source: &str,
                                 reserved: ReservedNames,
                                 output: W)
                                 -> Result<Option<Value>, Error> {
    let mut interpreter = Interpreter::with_output(reserved, output);
    let program = parse(source)?;
    Ok(interpreter.interpret(&program)?)
}
