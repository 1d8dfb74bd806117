use crate::ast::FunctionCall;

/// A function defined at runtime with `defFunction`.
///
/// The function owns its parameter names and body. Calls look it up by name
/// every time, so re-defining a name replaces the function for later calls.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    /// The camelCase name the function was defined under.
    pub name:   String,
    /// Parameter names, bound positionally on each call.
    pub params: Vec<String>,
    /// Statements executed in order until one yields a non-null value.
    pub body:   Vec<FunctionCall>,
}

impl UserFunction {
    /// Number of arguments a call must supply.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl std::fmt::Display for UserFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<function {}({})>", self.name, self.params.join(", "))
    }
}
