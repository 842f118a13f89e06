use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, min_max},
        },
        value::{callable::Callable, core::Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "min"   => { arity: Arity::AtLeast(2), func: |args, line| min_max::min_max("min", args, line) },
    "max"   => { arity: Arity::AtLeast(2), func: |args, line| min_max::min_max("max", args, line) },
    "floor" => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("floor", args, line) },
    "ceil"  => { arity: Arity::Exact(1), func: |args, line| builtin::unary_round("ceil", args, line) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    /// Describes the accepted counts for error messages.
    fn describe(self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::AtLeast(m) => format!("at least {m}"),
        }
    }
}

/// Returns the canonical name of a builtin, if `name` is one.
///
/// # Example
/// ```
/// use xmas::interpreter::evaluator::function::core::builtin_name;
///
/// assert_eq!(builtin_name("max"), Some("max"));
/// assert_eq!(builtin_name("len"), None);
/// ```
#[must_use]
pub fn builtin_name(name: &str) -> Option<&'static str> {
    BUILTIN_TABLE.iter().find(|b| b.name == name).map(|b| b.name)
}

impl Context<'_> {
    /// Evaluates a call written as `name(args)`.
    ///
    /// The name is resolved in this order:
    /// 1. a user-defined function,
    /// 2. a builtin,
    /// 3. a variable holding a function value.
    ///
    /// Arguments are evaluated left to right in the caller's context before
    /// the call.
    ///
    /// # Errors
    /// - `UndefinedName` if the name is bound nowhere.
    /// - `TypeMismatch` if it names a variable that is not a function.
    /// - Any error raised by the arguments or the callee.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        let callable = if let Some(def) = self.user_function(name) {
            Callable::User(def)
        } else if let Some(builtin) = builtin_name(name) {
            Callable::Builtin(builtin)
        } else {
            match self.global(name) {
                Some(Value::Function(callable)) => callable.clone(),
                Some(other) => return Err(other.mismatch(&format!("call of '{name}'"),
                                                          "function",
                                                          line)),
                None => {
                    return Err(RuntimeError::UndefinedName { name: name.to_string(),
                                                             line });
                },
            }
        };

        let args = self.eval_arguments(arguments)?;
        self.call(&callable, args, line)
    }

    /// Applies a computed value to already evaluated arguments.
    ///
    /// # Errors
    /// `TypeMismatch` if `callee` is not a function.
    pub(crate) fn apply(&mut self, callee: &Value, args: Vec<Value>, line: usize) -> EvalResult<Value> {
        match callee {
            Value::Function(callable) => self.call(callable, args, line),
            other => Err(other.mismatch("call", "function", line)),
        }
    }

    /// Calls a callable with already evaluated arguments.
    ///
    /// A composition passes every argument to its first stage and the
    /// first stage's single result to the second.
    ///
    /// # Example
    /// ```
    /// use xmas::{Value, run};
    ///
    /// let source = "addOne(x) = x + 1\ndouble(x) = x * 2\n(addOne |> double)(4)";
    ///
    /// assert_eq!(run(source, None).unwrap(), Value::Integer(10));
    /// ```
    pub(crate) fn call(&mut self,
                       callable: &Callable,
                       args: Vec<Value>,
                       line: usize)
                       -> EvalResult<Value> {
        match callable {
            Callable::User(def) => self.call_user_defined_function(def, args, line),
            Callable::Builtin(name) => Self::call_builtin(name, &args, line),
            Callable::Composed(first, second) => {
                let intermediate = self.call(first, args, line)?;
                self.call(second, vec![intermediate], line)
            },
        }
    }

    /// Executes a builtin after checking its arity.
    fn call_builtin(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UndefinedName { name:
                                                                                    name.to_string(),
                                                                                line })?;

        if !builtin.arity.check(args.len()) {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected: builtin.arity.describe(),
                                                     found: args.len(),
                                                     line });
        }
        (builtin.func)(args, line)
    }

    /// Executes a user-defined function.
    ///
    /// Its parameter count must match the number of supplied arguments.
    /// Parameters are bound in the global table for the duration of the call
    /// and the bindings they shadowed are restored afterwards, also when the
    /// body fails. The body is evaluated as a block.
    ///
    /// # Errors
    /// - Wrong number of arguments.
    /// - Any error raised by the body.
    fn call_user_defined_function(&mut self,
                                  def: &FunctionDef,
                                  args: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Value> {
        if args.len() != def.params.len() {
            return Err(RuntimeError::ArityMismatch { name: def.name.clone(),
                                                     expected: def.params.len().to_string(),
                                                     found: args.len(),
                                                     line });
        }

        let shadowed: Vec<Option<Value>> =
            def.params
               .iter()
               .zip(args)
               .map(|(param, value)| self.bind(param, value))
               .collect();

        let result = self.nested(|ctx| ctx.eval_as_block(&def.body, Value::Nothing));

        for (param, old) in def.params.iter().zip(shadowed).rev() {
            self.restore(param, old);
        }

        result
    }
}
