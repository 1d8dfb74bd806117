/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, expression evaluation, body execution under the
/// control-flow propagation contract, and call dispatch.
pub mod core;

/// The built-in table.
///
/// Declares every built-in name with its arity and routes calls to the
/// handlers in the sibling modules.
pub mod builtin;

/// `add`, `sub` and `mult`.
///
/// Left folds with integer-to-float promotion and the string, list and dict
/// forms of addition and subtraction.
pub mod arithmetic;

/// `get` and `len`.
///
/// Bounds-checked list indexing, key-checked dict lookup and sizes.
pub mod collection;

/// `eq` and `lt`.
pub mod comparison;

/// `if`, `while` and `forEach`.
///
/// Conditionals and loops, each loop running in a scope that is closed
/// exactly once however the loop ends.
pub mod control;

/// `def`, `defFunction` and `inc`.
///
/// Binding sites, with naming-convention, reserved-name and constant checks.
pub mod definition;

/// User-defined function invocation.
pub mod function;

/// `and` and `or`.
pub mod logic;

/// `print`.
pub mod print;

/// Utility functions for evaluation.
///
/// Provides the scope guard, naming-convention predicates and the helpers
/// shared by the built-ins.
pub mod utils;
