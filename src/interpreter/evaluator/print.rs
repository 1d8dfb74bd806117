use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates `print(a, ...)`.
    ///
    /// Each argument is evaluated and written on its own line using its
    /// display form. `null` arguments are evaluated but not written.
    ///
    /// # Returns
    /// Always `Null`, so a `print` never ends the enclosing body.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::{
    ///     evaluator::core::Interpreter, parser::parse, reserved::ReservedNames,
    /// };
    ///
    /// let mut interpreter = Interpreter::with_output(ReservedNames::default(), Vec::new());
    /// let program = parse(r#"print("a", null, [1, "b"])"#).unwrap();
    /// interpreter.interpret(&program).unwrap();
    ///
    /// assert_eq!(String::from_utf8_lossy(interpreter.output()), "a\n[1, b]\n");
    /// ```
    pub fn eval_print(&mut self, args: &[Expr]) -> EvalResult<Value> {
        for arg in args {
            let value = self.eval(arg)?;
            if value.is_null() {
                continue;
            }

            writeln!(self.output_mut(), "{value}").map_err(|e| RuntimeError::Output { details: e.to_string() })?;
        }

        Ok(Value::Null)
    }
}
