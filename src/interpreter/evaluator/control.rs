use std::{io::Write, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::ScopeKind,
        evaluator::{
            core::{EvalResult, Interpreter, Signal},
            utils::{expect_body, expect_variable},
        },
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `if(condition, then)` or `if(condition, then, otherwise)`.
    ///
    /// Only the chosen branch is evaluated. Without an `otherwise` branch a
    /// falsy condition yields `Null`.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::{
    ///     evaluator::core::Interpreter, parser::parse, reserved::ReservedNames, value::core::Value,
    /// };
    ///
    /// let mut interpreter = Interpreter::with_output(ReservedNames::default(), Vec::new());
    /// let program = parse(r#"if(lt(1, 2), "yes", "no")"#).unwrap();
    ///
    /// assert_eq!(interpreter.interpret(&program).unwrap(), Some(Value::from("yes")));
    /// ```
    pub fn eval_if(&mut self, args: &[Expr]) -> EvalResult<Value> {
        if self.eval(&args[0])?.is_truthy() {
            return self.eval(&args[1]);
        }

        match args.get(2) {
            Some(otherwise) => self.eval(otherwise),
            None => Ok(Value::Null),
        }
    }

    /// Evaluates `while(condition, body)`.
    ///
    /// The loop runs in one block scope that lives as long as the loop. The
    /// condition is re-evaluated before every iteration and must be a
    /// boolean. If a body statement yields a value, the loop stops and
    /// yields it.
    ///
    /// # Errors
    /// `TypeError` if the condition is not a boolean or the body is not made
    /// of calls.
    pub fn eval_while(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let body = expect_body(&args[1], "Second argument of 'while'")?;
        let mut scope = self.scoped(ScopeKind::Block);

        loop {
            match scope.eval(&args[0])? {
                Value::Bool(true) => {},
                Value::Bool(false) => break,
                other => {
                    return Err(RuntimeError::TypeError { details: format!("'while' condition must be a Boolean, got {}",
                                                                          other.type_name()) });
                },
            }

            if let Signal::Return(value) = scope.execute_body(&body)? {
                return Ok(value);
            }
        }

        Ok(Value::Null)
    }

    /// Evaluates `forEach(item, list, body)`.
    ///
    /// The loop variable must be snake_case and not reserved. The list is
    /// evaluated once; the loop then runs in one block scope, rebinding the
    /// loop variable to each element in turn. The loop variable is gone once
    /// the loop ends.
    ///
    /// # Errors
    /// `Naming` or `ReservedName` for a bad loop variable, `TypeError` if the
    /// second argument is not a list or the body is not made of calls.
    pub fn eval_for_each(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let name = expect_variable(&args[0], "First argument of 'forEach'")?;
        self.check_local_name(name)?;

        let items = Rc::clone(self.eval(&args[1])?.as_list("Second argument of 'forEach'")?);
        let body = expect_body(&args[2], "Third argument of 'forEach'")?;

        let mut scope = self.scoped(ScopeKind::Block);
        for item in items.iter() {
            scope.environment.set_variable(name, item.clone());

            if let Signal::Return(value) = scope.execute_body(&body)? {
                return Ok(value);
            }
        }

        Ok(Value::Null)
    }
}
