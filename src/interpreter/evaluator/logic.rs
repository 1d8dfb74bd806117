use std::io::Write;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `and(a, b, ...)`.
    ///
    /// Every argument is evaluated, even after one is falsy, so side effects
    /// in later arguments always happen.
    pub fn eval_and(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let mut result = true;
        for arg in args {
            result &= self.eval(arg)?.is_truthy();
        }
        Ok(Value::Bool(result))
    }

    /// Evaluates `or(a, b, ...)`. Like `and`, never short-circuits.
    pub fn eval_or(&mut self, args: &[Expr]) -> EvalResult<Value> {
        let mut result = false;
        for arg in args {
            result |= self.eval(arg)?.is_truthy();
        }
        Ok(Value::Bool(result))
    }
}
