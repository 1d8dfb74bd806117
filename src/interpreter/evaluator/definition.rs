use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::{
                expect_body, expect_variable, expect_variables, is_camel_case, is_screaming_snake_case,
                is_snake_case,
            },
        },
        value::{core::Value, function::UserFunction},
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `def(name, value)`.
    ///
    /// `name` must be a bare identifier that is not reserved, in snake_case
    /// for a variable or SCREAMING_SNAKE_CASE for a constant. A constant can
    /// only be defined while no variable of that name is visible. A variable
    /// rebinds the nearest existing binding in the current function frame, or
    /// is defined in the current scope.
    ///
    /// # Errors
    /// - `TypeError` if `name` is not an identifier.
    /// - `ReservedName`, `ReassignConstant` or `Naming` as described above.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Interpreter, parser::parse, reserved::ReservedNames},
    /// };
    ///
    /// let mut interpreter = Interpreter::with_output(ReservedNames::default(), Vec::new());
    /// let program = parse("def(LIMIT, 1) def(LIMIT, 2)").unwrap();
    /// let error = interpreter.interpret(&program).unwrap_err();
    ///
    /// assert_eq!(error.line, 2);
    /// assert_eq!(error.error, RuntimeError::ReassignConstant { name: "LIMIT".to_string() });
    /// ```
    pub fn eval_def(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let name = expect_variable(&args[0], "First argument of 'def'")?;
        self.check_not_reserved(name)?;

        let constant = is_screaming_snake_case(name);
        if constant && self.environment.has_variable(name) {
            return Err(RuntimeError::ReassignConstant { name: name.to_string() });
        }
        if !constant && !is_snake_case(name) {
            return Err(RuntimeError::Naming { name:     name.to_string(),
                                              expected: "snake_case if mutable or SCREAMING_SNAKE_CASE if constant", });
        }

        let value = self.eval(&args[1])?;
        if constant {
            self.environment.set_variable(name, value);
        } else {
            self.environment.assign_nearest(name, value);
        }

        Ok(Value::Null)
    }

    /// Evaluates `defFunction(name, params, body)`.
    ///
    /// - `name`: camelCase identifier, not reserved.
    /// - `params`: one identifier or a list of identifiers, each snake_case
    ///   and not reserved.
    /// - `body`: one call or a list of calls.
    ///
    /// Binds a [`UserFunction`] under `name` with the same rule `def` uses
    /// for variables, so defining an existing name replaces the function.
    pub fn eval_def_function(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let name = expect_variable(&args[0], "First argument of 'defFunction'")?;
        self.check_not_reserved(name)?;
        if !is_camel_case(name) {
            return Err(RuntimeError::Naming { name:     name.to_string(),
                                              expected: "camelCase", });
        }

        let params = expect_variables(&args[1], "Second argument of 'defFunction'")?;
        for param in &params {
            self.check_local_name(param)?;
        }

        let body = expect_body(&args[2], "Third argument of 'defFunction'")?;

        tracing::debug!(name, params = params.len(), statements = body.len(), "define function");
        let function = UserFunction { name: name.to_string(),
                                      params,
                                      body };
        self.environment.assign_nearest(name, Value::from(function));

        Ok(Value::Null)
    }

    /// Evaluates `inc(name, amount)`.
    ///
    /// Reads the current value of `name`, adds `amount` and writes the sum
    /// back with the same rule `def` uses. Both must be integers.
    ///
    /// # Errors
    /// - `UnknownVariable` if `name` is not bound.
    /// - `ReassignConstant` if `name` is a constant.
    /// - `TypeError` if either operand is not an integer.
    /// - `Overflow` if the sum does not fit.
    pub fn eval_inc(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let name = expect_variable(&args[0], "First argument of 'inc'")?;
        if is_screaming_snake_case(name) {
            return Err(RuntimeError::ReassignConstant { name: name.to_string() });
        }

        let current = self.eval_variable(name)?;
        let amount = self.eval(&args[1])?;

        let (Value::Integer(current), Value::Integer(amount)) = (&current, &amount) else {
            return Err(RuntimeError::TypeError { details: format!("'inc' expects Integers, got {} and {}",
                                                                  current.type_name(),
                                                                  amount.type_name()) });
        };

        let sum = current.checked_add(*amount).ok_or(RuntimeError::Overflow)?;
        self.environment.assign_nearest(name, Value::Integer(sum));

        Ok(Value::Null)
    }
}
