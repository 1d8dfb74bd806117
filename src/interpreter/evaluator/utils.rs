use std::{
    io::Write,
    ops::{Deref, DerefMut},
};

use crate::{
    ast::{Expr, FunctionCall, LiteralValue},
    error::RuntimeError,
    interpreter::{
        environment::ScopeKind,
        evaluator::core::{EvalResult, Interpreter},
    },
};

/// Closes a scope when dropped.
///
/// Returned by [`Interpreter::scoped`]. The guard dereferences to the
/// interpreter, so the code running inside the scope goes through it; once
/// the guard is dropped, whether the body finished, returned early or failed
/// with `?`, the scope is popped exactly once.
pub struct ScopeGuard<'a, W: Write> {
    interpreter: &'a mut Interpreter<W>,
}

impl<W: Write> Deref for ScopeGuard<'_, W> {
    type Target = Interpreter<W>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl<W: Write> DerefMut for ScopeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<W: Write> Drop for ScopeGuard<'_, W> {
    fn drop(&mut self) {
        self.interpreter.environment.exit_scope();
    }
}

impl<W: Write> Interpreter<W> {
    /// Pushes a scope of the given kind and returns a guard that pops it.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::{
    ///     environment::ScopeKind, evaluator::core::Interpreter, reserved::ReservedNames,
    ///     value::core::Value,
    /// };
    ///
    /// let mut interpreter = Interpreter::with_output(ReservedNames::default(), Vec::new());
    /// {
    ///     let mut scope = interpreter.scoped(ScopeKind::Block);
    ///     scope.environment.set_variable("n", Value::Integer(1));
    ///     assert_eq!(scope.environment.depth(), 2);
    /// }
    ///
    /// assert_eq!(interpreter.environment.depth(), 1);
    /// assert!(!interpreter.environment.has_variable("n"));
    /// ```
    pub fn scoped(&mut self, kind: ScopeKind) -> ScopeGuard<'_, W> {
        self.environment.enter_scope(kind);
        ScopeGuard { interpreter: self }
    }

    /// Fails with `ReservedName` if `name` is in the reserved-name set.
    pub fn check_not_reserved(&self, name: &str) -> EvalResult<()> {
        if self.reserved().contains(name) {
            return Err(RuntimeError::ReservedName { name: name.to_string() });
        }
        Ok(())
    }

    /// Validates a loop variable or function parameter: snake_case and not
    /// reserved.
    pub fn check_local_name(&self, name: &str) -> EvalResult<()> {
        if !is_snake_case(name) {
            return Err(RuntimeError::Naming { name:     name.to_string(),
                                              expected: "snake_case", });
        }
        self.check_not_reserved(name)
    }
}

/// Checks `^[a-z][a-z0-9]*([A-Z][a-z0-9]*)*$`, the convention for function
/// names.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::evaluator::utils::is_camel_case;
///
/// assert!(is_camel_case("square"));
/// assert!(is_camel_case("sumOfSquares2"));
/// assert!(!is_camel_case("SumOfSquares"));
/// assert!(!is_camel_case("sum_of_squares"));
/// ```
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Checks `^[a-z][a-z0-9]*(_[a-z][a-z0-9]*)*$`, the convention for
/// variables.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::evaluator::utils::is_snake_case;
///
/// assert!(is_snake_case("total"));
/// assert!(is_snake_case("running_total_2"));
/// assert!(!is_snake_case("runningTotal"));
/// assert!(!is_snake_case("trailing_"));
/// assert!(!is_snake_case("double__underscore"));
/// ```
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    underscore_separated(name, |c| c.is_ascii_lowercase(), |c| {
        c.is_ascii_lowercase() || c.is_ascii_digit()
    })
}

/// Checks `^[A-Z][A-Z0-9]*(_[A-Z][A-Z0-9]*)*$`, the convention for
/// write-once constants.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::evaluator::utils::is_screaming_snake_case;
///
/// assert!(is_screaming_snake_case("MAX_SIZE"));
/// assert!(!is_screaming_snake_case("Max_Size"));
/// ```
#[must_use]
pub fn is_screaming_snake_case(name: &str) -> bool {
    underscore_separated(name, |c| c.is_ascii_uppercase(), |c| {
        c.is_ascii_uppercase() || c.is_ascii_digit()
    })
}

/// Every `_`-separated segment is non-empty, starts with a `first` character
/// and continues with `rest` characters.
fn underscore_separated(name: &str, first: impl Fn(char) -> bool, rest: impl Fn(char) -> bool) -> bool {
    name.split('_').all(|segment| {
                        let mut chars = segment.chars();
                        chars.next().is_some_and(&first) && chars.all(&rest)
                    })
}

/// Reads the name out of an argument that must be a bare identifier.
///
/// # Parameters
/// - `expr`: The argument node.
/// - `context`: Description of the argument, used in the error message.
pub fn expect_variable<'a>(expr: &'a Expr, context: &str) -> EvalResult<&'a str> {
    expr.as_variable()
        .ok_or_else(|| RuntimeError::TypeError { details: format!("{context} must be a Variable, got {}",
                                                                  expr.kind_name()) })
}

/// Reads a list of names from an argument that is either one identifier or
/// a list literal of identifiers.
pub fn expect_variables(expr: &Expr, context: &str) -> EvalResult<Vec<String>> {
    match expr {
        Expr::Literal { value: LiteralValue::List(items),
                        .. } => items.iter()
                                     .map(|item| expect_variable(item, context).map(ToString::to_string))
                                     .collect(),
        other => Ok(vec![expect_variable(other, context)?.to_string()]),
    }
}

/// Reads a body from an argument that is either one call or a list literal
/// of calls.
///
/// # Example
/// ```
/// use eucalyptus::interpreter::{evaluator::utils::expect_body, parser::parse};
///
/// let program = parse("while(true, [print(1), return(2)])").unwrap();
/// let body = expect_body(&program[0].arguments[1], "while body").unwrap();
///
/// assert_eq!(body.len(), 2);
/// assert_eq!(body[1].name, "return");
/// ```
pub fn expect_body(expr: &Expr, context: &str) -> EvalResult<Vec<FunctionCall>> {
    let as_call = |expr: &Expr| match expr {
        Expr::FunctionCall(call) => Ok(call.clone()),
        other => Err(RuntimeError::TypeError { details: format!("{context} must contain only function calls, got {}",
                                                                other.kind_name()) }),
    };

    match expr {
        Expr::Literal { value: LiteralValue::List(items),
                        .. } => items.iter().map(as_call).collect(),
        other => Ok(vec![as_call(other)?]),
    }
}
