use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::core::builtin_name,
        },
        value::{callable::Callable, core::Value},
    },
    util::num::range_length,
};

impl Context<'_> {
    /// Resolves a name used as a value.
    ///
    /// The lookup order is:
    /// 1. the global variable table,
    /// 2. user-defined functions,
    /// 3. built-in functions.
    ///
    /// Functions resolve to `Value::Function`, so they can be stored, piped
    /// and called later.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedName` if the name is bound nowhere.
    ///
    /// # Example
    /// ```
    /// use xmas::{Context, Value};
    ///
    /// let ctx = Context::new();
    ///
    /// assert!(matches!(ctx.eval_variable("max", 1).unwrap(), Value::Function(_)));
    /// assert!(ctx.eval_variable("nope", 1).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.global(name) {
            return Ok(value.clone());
        }
        if let Some(def) = self.user_function(name) {
            return Ok(Value::Function(Callable::User(def)));
        }
        if let Some(builtin) = builtin_name(name) {
            return Ok(Value::Function(Callable::Builtin(builtin)));
        }

        Err(RuntimeError::UndefinedName { name: name.to_string(),
                                          line })
    }

    /// Evaluates expressions left to right, stopping at the first error.
    ///
    /// Used for list literal elements and eager call arguments.
    pub(crate) fn eval_arguments(&mut self, arguments: &[Expr]) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|arg| self.eval(arg)).collect()
    }

    /// Evaluates a range literal `[start..end]`.
    ///
    /// Both ends are included. The list ascends when `start <= end` and
    /// descends otherwise, so `[3..1]` is `[3, 2, 1]`.
    ///
    /// # Errors
    /// `Overflow` when the list cannot be allocated.
    pub(crate) fn eval_range(&mut self, start: &Expr, end: &Expr, line: usize) -> EvalResult<Value> {
        let start = self.eval(start)?.as_integer("range start", line)?;
        let end = self.eval(end)?.as_integer("range end", line)?;

        let mut values = Vec::new();
        values.try_reserve_exact(range_length(start, end, line)?)
              .map_err(|_| RuntimeError::Overflow { line })?;

        if start <= end {
            values.extend((start..=end).map(Value::Integer));
        } else {
            values.extend((end..=start).rev().map(Value::Integer));
        }

        Ok(Value::from(values))
    }
}
