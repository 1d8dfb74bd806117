use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// What opened a scope.
///
/// Function scopes bound the reach of [`Environment::assign_nearest`]: code
/// inside a function can read outer variables but never rebind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// The outermost scope; exists for the whole lifetime of the environment.
    Global,
    /// The scope of one user-function invocation.
    Function,
    /// The scope of a `while` or `forEach` loop.
    Block,
}

/// One mapping layer of the scope stack.
#[derive(Debug, Clone)]
struct Scope {
    kind:      ScopeKind,
    variables: HashMap<String, Value>,
}

impl Scope {
    fn new(kind: ScopeKind) -> Self {
        Self { kind,
               variables: HashMap::new() }
    }
}

/// Stores the variables visible to a running program.
///
/// The environment is a stack of scopes, innermost last. Reads search from
/// the innermost scope outward; [`set_variable`](Self::set_variable) always
/// writes into the innermost scope, so an inner binding shadows an outer one
/// without changing it. The global scope is never popped.
#[derive(Debug, Clone)]
pub struct Environment {
    scopes:     Vec<Scope>,
    call_depth: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:     vec![Scope::new(ScopeKind::Global)],
               call_depth: 0 }
    }

    /// Pushes a new, empty scope.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::environment::{Environment, ScopeKind};
    ///
    /// let mut env = Environment::new();
    /// env.enter_scope(ScopeKind::Block);
    ///
    /// assert_eq!(env.depth(), 2);
    /// ```
    pub fn enter_scope(&mut self, kind: ScopeKind) {
        tracing::trace!(?kind, depth = self.scopes.len() + 1, "enter scope");
        if kind == ScopeKind::Function {
            self.call_depth += 1;
        }
        self.scopes.push(Scope::new(kind));
    }

    /// Removes the innermost scope and every variable defined in it.
    ///
    /// # Panics
    /// Panics if only the global scope is left. Scopes are opened and closed
    /// in pairs by the interpreter, so this indicates an internal bug.
    pub fn exit_scope(&mut self) {
        assert!(self.scopes.len() > 1, "cannot exit the global scope");
        if let Some(scope) = self.scopes.pop()
           && scope.kind == ScopeKind::Function
        {
            self.call_depth -= 1;
        }
        tracing::trace!(depth = self.scopes.len(), "exit scope");
    }

    /// Number of scopes currently on the stack, including the global one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Number of function scopes on the stack, i.e. the depth of nested
    /// user-function calls.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::environment::{Environment, ScopeKind};
    ///
    /// let mut env = Environment::new();
    /// env.enter_scope(ScopeKind::Function);
    /// env.enter_scope(ScopeKind::Block);
    /// env.enter_scope(ScopeKind::Function);
    /// assert_eq!(env.call_depth(), 2);
    ///
    /// env.exit_scope();
    /// assert_eq!(env.call_depth(), 1);
    /// ```
    #[must_use]
    pub const fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Defines or updates a variable in the innermost scope.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.variables.insert(name.to_string(), value);
        }
    }

    /// Retrieves a variable from the current or enclosing scopes.
    ///
    /// Lookup begins at the innermost scope and proceeds outward toward the
    /// global scope. Returns `None` if the variable is not defined in any
    /// active scope.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::{
    ///     environment::{Environment, ScopeKind},
    ///     value::core::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.set_variable("x", Value::Integer(1));
    /// env.enter_scope(ScopeKind::Function);
    /// env.set_variable("x", Value::Integer(2));
    ///
    /// assert_eq!(env.get_variable("x"), Some(&Value::Integer(2)));
    /// env.exit_scope();
    /// assert_eq!(env.get_variable("x"), Some(&Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.variables.get(name))
    }

    /// Checks whether a variable exists in any active scope.
    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.get_variable(name).is_some()
    }

    /// Rebinds the nearest visible variable, or defines it in the innermost
    /// scope when there is none.
    ///
    /// The search walks outward through loop scopes but stops at the nearest
    /// function scope, so a function can never rebind a variable of its
    /// caller or of the global scope; it shadows it instead.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::{
    ///     environment::{Environment, ScopeKind},
    ///     value::core::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.set_variable("total", Value::Integer(0));
    ///
    /// env.enter_scope(ScopeKind::Block);
    /// env.assign_nearest("total", Value::Integer(1));
    /// env.exit_scope();
    /// assert_eq!(env.get_variable("total"), Some(&Value::Integer(1)));
    ///
    /// env.enter_scope(ScopeKind::Function);
    /// env.assign_nearest("total", Value::Integer(9));
    /// env.exit_scope();
    /// assert_eq!(env.get_variable("total"), Some(&Value::Integer(1)));
    /// ```
    pub fn assign_nearest(&mut self, name: &str, value: Value) {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.variables.get_mut(name) {
                *slot = value;
                return;
            }
            if scope.kind == ScopeKind::Function {
                break;
            }
        }
        self.set_variable(name, value);
    }
}
