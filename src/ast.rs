/// Represents a literal value in the language.
///
/// `LiteralValue` covers all constant values that can appear directly in
/// source code. Scalars are stored as-is; list and dict literals hold further
/// unevaluated nodes, which are evaluated each time the literal is.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A string literal with its delimiters stripped.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `null` literal.
    Null,
    /// A list literal: `[a, b, c]`.
    List(Vec<Expr>),
    /// A dict literal: `{"key": value}`. Later duplicates win on evaluation.
    Dict(Vec<(String, Expr)>),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A call of a named function with an ordered list of argument nodes.
///
/// The same shape is used for built-in calls, user-function calls and the
/// statements that make up function and loop bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Name of the function being called.
    pub name:      String,
    /// Arguments to the function, unevaluated.
    pub arguments: Vec<Expr>,
    /// Position of the enclosing top-level call.
    pub line:      usize,
}

/// An abstract syntax tree (AST) node.
///
/// There are exactly three kinds of node. Functions are not a node kind; they
/// are runtime values produced by evaluating a `defFunction` call.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean, null, list or dict).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Position of the enclosing top-level call.
        line:  usize,
    },
    /// Reference to a variable by name, resolved at evaluation time.
    Variable {
        /// Name of the variable.
        name: String,
        /// Position of the enclosing top-level call.
        line: usize,
    },
    /// A nested function call such as `add(1, 2)`.
    FunctionCall(FunctionCall),
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use eucalyptus::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::FunctionCall(FunctionCall { line, .. }) => *line,
        }
    }

    /// Returns the variable name if `self` is a bare identifier.
    #[must_use]
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Short description of the node kind, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Literal { value, .. } => match value {
                LiteralValue::Integer(_) => "Integer",
                LiteralValue::Real(_) => "Float",
                LiteralValue::Str(_) => "String",
                LiteralValue::Bool(_) => "Boolean",
                LiteralValue::Null => "null",
                LiteralValue::List(_) => "List",
                LiteralValue::Dict(_) => "Dict",
            },
            Self::Variable { .. } => "Variable",
            Self::FunctionCall(_) => "Function call",
        }
    }
}
