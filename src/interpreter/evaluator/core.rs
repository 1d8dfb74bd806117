use std::{
    collections::BTreeMap,
    io::{self, Stdout, Write},
};

use crate::{
    ast::{Expr, FunctionCall, LiteralValue},
    error::{ExecutionError, RuntimeError},
    interpreter::{
        environment::Environment, evaluator::builtin::Builtin, reserved::ReservedNames,
        stack::ensure_sufficient_stack, value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Outcome of executing a body of statements.
///
/// A body runs its statements in order and stops at the first one whose
/// result is not `Null`. That result is how `return`, and any nested `if`,
/// `while` or `forEach` that produced a value, unwinds outward.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Every statement yielded `Null`.
    Continue,
    /// A statement yielded this value; the remaining statements were skipped.
    Return(Value),
}

impl Signal {
    /// The value the enclosing construct yields: `Null` for `Continue`.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Continue => Value::Null,
            Self::Return(value) => value,
        }
    }
}

/// Stores the runtime evaluation state.
///
/// This struct holds everything a running program touches: the scope stack,
/// the reserved-name set and the sink `print` writes to.
///
/// ## Usage
///
/// An `Interpreter` is created once and can run several programs in turn;
/// definitions made by one program stay visible to the next, which is how the
/// interactive prompt works.
///
/// ```
/// use eucalyptus::interpreter::{
///     evaluator::core::Interpreter, parser::parse, reserved::ReservedNames,
/// };
///
/// let mut interpreter = Interpreter::with_output(ReservedNames::default(), Vec::new());
/// let program = parse("print(add(1, 2))").unwrap();
/// interpreter.interpret(&program).unwrap();
///
/// assert_eq!(interpreter.output(), b"3\n");
/// ```
pub struct Interpreter<W: Write = Stdout> {
    /// The variables of the running program.
    pub environment: Environment,
    reserved:        ReservedNames,
    output:          W,
}

impl Interpreter<Stdout> {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new(reserved: ReservedNames) -> Self {
        Self::with_output(reserved, io::stdout())
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints to `output`.
    pub fn with_output(reserved: ReservedNames, output: W) -> Self {
        Self { environment: Environment::new(),
               reserved,
               output }
    }

    /// The sink `print` writes to.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and returns its output sink.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::{
    ///     evaluator::core::Interpreter, parser::parse, reserved::ReservedNames,
    /// };
    ///
    /// let mut interpreter = Interpreter::with_output(ReservedNames::default(), Vec::new());
    /// interpreter.interpret(&parse("print(add(2, 3))").unwrap()).unwrap();
    ///
    /// let output: Vec<u8> = interpreter.into_output();
    /// assert_eq!(output, b"5\n");
    /// ```
    pub fn into_output(self) -> W {
        self.output
    }

    /// The reserved-name set binding sites are checked against.
    pub const fn reserved(&self) -> &ReservedNames {
        &self.reserved
    }

    pub(crate) fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Runs a program.
    ///
    /// Each top-level call is evaluated in order against the shared
    /// environment. A top-level call that yields a value does not stop the
    /// program; the last such value is returned so embedders can use it.
    ///
    /// # Errors
    /// Stops at the first failing call and returns an `ExecutionError`
    /// carrying that call's position and, if the failure escaped a user
    /// function, the innermost function's name.
    pub fn interpret(&mut self, program: &[FunctionCall]) -> Result<Option<Value>, ExecutionError> {
        let mut result = None;

        for call in program {
            tracing::debug!(line = call.line, name = %call.name, "executing statement");
            match self.eval_call(call) {
                Ok(value) => {
                    if !value.is_null() {
                        result = Some(value);
                    }
                },
                Err(error) => return Err(ExecutionError::new(call.line, error)),
            }
        }

        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Literals build
    /// their value (evaluating nested list and dict elements), variables are
    /// looked up in the environment, and calls are dispatched.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal { value, .. } => self.eval_literal(value),
            Expr::Variable { name, .. } => self.eval_variable(name),
            Expr::FunctionCall(call) => self.eval_call(call),
        })
    }

    /// Evaluates a literal. List and dict literals are rebuilt on every
    /// evaluation, so each produces a fresh value.
    ///
    /// List elements that evaluate to `Null` are left out of the list.
    pub fn eval_literal(&mut self, literal: &LiteralValue) -> EvalResult<Value> {
        Ok(match literal {
            LiteralValue::Integer(i) => Value::Integer(*i),
            LiteralValue::Real(r) => Value::Real(*r),
            LiteralValue::Str(s) => Value::Str(s.clone()),
            LiteralValue::Bool(b) => Value::Bool(*b),
            LiteralValue::Null => Value::Null,
            LiteralValue::List(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    let value = self.eval(element)?;
                    if !value.is_null() {
                        values.push(value);
                    }
                }
                Value::from(values)
            },
            LiteralValue::Dict(entries) => {
                let mut dict = BTreeMap::new();
                for (key, element) in entries {
                    let value = self.eval(element)?;
                    dict.insert(key.clone(), value);
                }
                Value::from(dict)
            },
        })
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if no active scope defines `name`.
    pub fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.environment
            .get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Evaluates a function call.
    ///
    /// A built-in name is dispatched to its handler; any other name must
    /// resolve to a user function in the environment.
    pub fn eval_call(&mut self, call: &FunctionCall) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match Builtin::from_name(&call.name) {
            Some(builtin) => self.eval_builtin(builtin, call),
            None => self.call_user_function(call),
        })
    }

    /// Executes a body under the control-flow propagation contract.
    ///
    /// Statements run in order; the first non-`Null` result stops the body
    /// and is returned as [`Signal::Return`].
    pub fn execute_body(&mut self, body: &[FunctionCall]) -> EvalResult<Signal> {
        for statement in body {
            let value = self.eval_call(statement)?;
            if !value.is_null() {
                return Ok(Signal::Return(value));
            }
        }
        Ok(Signal::Continue)
    }
}
