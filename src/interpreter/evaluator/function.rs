use std::io::Write;

use crate::{
    ast::FunctionCall,
    error::RuntimeError,
    interpreter::{
        environment::ScopeKind,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Maximum number of user-function calls that may be active at once.
pub const MAX_CALL_DEPTH: usize = 10_000;

impl<W: Write> Interpreter<W> {
    /// Executes a call to a user-defined function.
    ///
    /// The function is looked up by the call's name. Arguments are evaluated
    /// in the caller's scope, then a function scope is pushed, each parameter
    /// is bound to its argument and the body runs until a statement yields a
    /// value. The scope is popped on every exit path.
    ///
    /// # Errors
    /// - `UnknownFunction` if the name is not bound.
    /// - `NotCallable` if it is bound to something other than a function.
    /// - `ArgumentCountMismatch` if the argument count differs from the
    ///   parameter count.
    /// - `RecursionLimit` if [`MAX_CALL_DEPTH`] calls are already active.
    ///
    /// Errors raised while the body runs are tagged with the function's name.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::{
    ///     evaluator::core::Interpreter, parser::parse, reserved::ReservedNames,
    /// };
    ///
    /// let mut interpreter = Interpreter::with_output(ReservedNames::default(), Vec::new());
    /// let program = parse("defFunction(square, x, return(mult(x, x))) print(square(5))").unwrap();
    /// interpreter.interpret(&program).unwrap();
    ///
    /// assert_eq!(interpreter.output(), b"25\n");
    /// assert_eq!(interpreter.environment.depth(), 1);
    /// ```
    pub fn call_user_function(&mut self, call: &FunctionCall) -> EvalResult<Value> {
        let function = match self.environment.get_variable(&call.name) {
            Some(Value::Function(function)) => function.clone(),
            Some(_) => return Err(RuntimeError::NotCallable { name: call.name.clone() }),
            None => return Err(RuntimeError::UnknownFunction { name: call.name.clone() }),
        };

        if call.arguments.len() != function.arity() {
            return Err(RuntimeError::ArgumentCountMismatch { function: function.name.clone(),
                                                             expected: format!("exactly {}", function.arity()),
                                                             found:    call.arguments.len(), });
        }

        let values = call.arguments
                         .iter()
                         .map(|arg| self.eval(arg))
                         .collect::<EvalResult<Vec<_>>>()?;

        let call_depth = self.environment.call_depth();
        if call_depth >= MAX_CALL_DEPTH {
            tracing::debug!(name = %function.name, call_depth, "recursion limit reached");
            return Err(RuntimeError::RecursionLimit { limit: MAX_CALL_DEPTH });
        }

        tracing::debug!(name = %function.name, depth = self.environment.depth() + 1, "call function");

        let mut scope = self.scoped(ScopeKind::Function);
        for (param, value) in function.params.iter().zip(values) {
            scope.environment.set_variable(param, value);
        }

        scope.execute_body(&function.body)
             .map(|signal| signal.into_value())
             .map_err(|error| error.in_function(&function.name))
    }
}
