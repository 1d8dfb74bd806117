use std::io::Write;

use crate::{
    ast::FunctionCall,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Specifies the allowed number of arguments for a built-in.
///
/// - `Exact(n)` means the built-in must receive exactly `n` arguments.
/// - `AtLeast(n)` means it accepts `n` or more.
/// - `Between(lo, hi)` means it accepts any count in `lo..=hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Between(usize, usize),
}

impl Arity {
    /// Tests whether `found` arguments satisfy this arity constraint.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::evaluator::builtin::Arity;
    ///
    /// assert!(Arity::Between(2, 3).check("if", 3).is_ok());
    /// assert!(Arity::AtLeast(2).check("add", 1).is_err());
    /// ```
    pub fn check(self, function: &str, found: usize) -> EvalResult<()> {
        let ok = match self {
            Self::Exact(n) => found == n,
            Self::AtLeast(n) => found >= n,
            Self::Between(lo, hi) => (lo..=hi).contains(&found),
        };

        if ok {
            return Ok(());
        }

        Err(RuntimeError::ArgumentCountMismatch { function: function.to_string(),
                                                  expected: self.to_string(),
                                                  found })
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::Between(lo, hi) => write!(f, "{lo} to {hi}"),
        }
    }
}

/// Defines built-in functions by generating the `Builtin` enum and a name
/// list.
///
/// Each entry provides:
/// - the name programs call it by,
/// - the enum variant,
/// - an arity specification.
///
/// The macro produces:
/// - `Builtin` with `from_name`, `name` and `arity`,
/// - `BUILTIN_FUNCTIONS` (public list of built-in names, which the
///   reserved-name set starts from).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $variant:ident { arity: $arity:expr $(,)? }
        ),* $(,)?
    ) => {
        /// A built-in function.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Builtin {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        /// Names of every built-in, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

        impl Builtin {
            /// Looks up a built-in by the name programs call it by.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The name programs call the built-in by.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// The number of arguments the built-in accepts.
            #[must_use]
            pub const fn arity(self) -> Arity {
                match self {
                    $(Self::$variant => $arity,)*
                }
            }
        }
    };
}

builtin_functions! {
    "add"         => Add         { arity: Arity::AtLeast(2) },
    "and"         => And         { arity: Arity::AtLeast(2) },
    "def"         => Def         { arity: Arity::Exact(2) },
    "defFunction" => DefFunction { arity: Arity::Exact(3) },
    "eq"          => Eq          { arity: Arity::Exact(2) },
    "forEach"     => ForEach     { arity: Arity::Exact(3) },
    "get"         => Get         { arity: Arity::Exact(2) },
    "if"          => If          { arity: Arity::Between(2, 3) },
    "inc"         => Inc         { arity: Arity::Exact(2) },
    "len"         => Len         { arity: Arity::Exact(1) },
    "lt"          => Lt          { arity: Arity::Exact(2) },
    "mult"        => Mult        { arity: Arity::AtLeast(2) },
    "or"          => Or          { arity: Arity::AtLeast(2) },
    "print"       => Print       { arity: Arity::AtLeast(1) },
    "return"      => Return      { arity: Arity::Exact(1) },
    "sub"         => Sub         { arity: Arity::AtLeast(2) },
    "while"       => While       { arity: Arity::Exact(2) },
}

impl<W: Write> Interpreter<W> {
    /// Evaluates a call to a built-in.
    ///
    /// The arity is checked before any argument is evaluated. Arguments are
    /// handed over unevaluated: binding sites read names from them and
    /// control constructs decide what to evaluate and when.
    ///
    /// # Parameters
    /// - `builtin`: The built-in being called.
    /// - `call`: The call node, for its argument list.
    ///
    /// # Returns
    /// The value the built-in yields; `Null` for pure side effects.
    pub fn eval_builtin(&mut self, builtin: Builtin, call: &FunctionCall) -> EvalResult<Value> {
        let args = call.arguments.as_slice();
        builtin.arity().check(builtin.name(), args.len())?;
        tracing::trace!(name = builtin.name(), args = args.len(), "builtin");

        match builtin {
            Builtin::Add => self.eval_add(args),
            Builtin::Sub => self.eval_sub(args),
            Builtin::Mult => self.eval_mult(args),
            Builtin::Eq => self.eval_eq(args),
            Builtin::Lt => self.eval_lt(args),
            Builtin::And => self.eval_and(args),
            Builtin::Or => self.eval_or(args),
            Builtin::Get => self.eval_get(args),
            Builtin::Len => self.eval_len(args),
            Builtin::Def => self.eval_def(args),
            Builtin::DefFunction => self.eval_def_function(args),
            Builtin::Inc => self.eval_inc(args),
            Builtin::If => self.eval_if(args),
            Builtin::While => self.eval_while(args),
            Builtin::ForEach => self.eval_for_each(args),
            Builtin::Return => self.eval(&args[0]),
            Builtin::Print => self.eval_print(args),
        }
    }
}
