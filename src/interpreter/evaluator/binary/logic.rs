use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        trace::TraceEvent,
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `&&` or `||` with short-circuiting.
    ///
    /// The left operand must be a boolean. `&&` stops at `false` and `||`
    /// stops at `true` without evaluating the right operand; otherwise the
    /// right operand must be a boolean too and is the result.
    ///
    /// # Example
    /// ```
    /// use xmas::{Value, run};
    ///
    /// // 'missing' is never evaluated.
    /// assert_eq!(run("false && missing", None).unwrap(), Value::Bool(false));
    /// assert_eq!(run("true || missing", None).unwrap(), Value::Bool(true));
    ///
    /// assert!(run("1 && true", None).is_err());
    /// ```
    pub(crate) fn eval_logic(&mut self,
                             left: &Expr,
                             op: BinaryOperator,
                             right: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        let context = format!("'{op}'");
        let lhs = self.eval(left)?.as_bool(&context, line)?;

        let decided = match op {
            BinaryOperator::And => !lhs,
            _ => lhs,
        };
        if decided {
            return Ok(Value::Bool(lhs));
        }

        let rhs = self.eval(right)?.as_bool(&context, line)?;
        self.record(|depth| TraceEvent::Binary { op,
                                                 left: Value::Bool(lhs),
                                                 right: Value::Bool(rhs),
                                                 result: Value::Bool(rhs),
                                                 depth });
        Ok(Value::Bool(rhs))
    }

    /// Combines two already evaluated booleans with `&&` or `||`.
    pub(crate) fn eval_logic_values(op: BinaryOperator,
                                    left: &Value,
                                    right: &Value,
                                    line: usize)
                                    -> EvalResult<Value> {
        let context = format!("'{op}'");
        let (a, b) = (left.as_bool(&context, line)?, right.as_bool(&context, line)?);

        Ok(Value::Bool(match op {
                           BinaryOperator::And => a && b,
                           _ => a || b,
                       }))
    }
}
