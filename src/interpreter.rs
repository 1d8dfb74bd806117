/// The environment module holds the variables of a running program.
///
/// A stack of scopes, innermost last, with lexical lookup that walks outward
/// and writes that go to the innermost scope.
pub mod environment;
/// The evaluator module executes the program tree.
///
/// The evaluator walks the top-level calls in order, dispatching each to a
/// built-in or to a user function, threading one environment through the
/// whole run.
///
/// # Responsibilities
/// - Evaluates literals, variables and calls.
/// - Implements every built-in and user-function invocation.
/// - Reports runtime errors with the failing call and function attached.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a flat stream
/// of punctuation, quoted strings and bare words.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser uses one token of lookahead to tell literals, variables and
/// nested calls apart, and produces the program as an ordered sequence of
/// calls.
pub mod parser;
/// The reserved module defines the identifiers programs may not bind.
pub mod reserved;
/// Stack safety for deep recursion.
///
/// Grows the native stack on demand while parsing and evaluating deeply
/// nested programs.
pub mod stack;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and the user-function record.
/// - Implements truthiness, type names and the display form used by `print`.
pub mod value;
