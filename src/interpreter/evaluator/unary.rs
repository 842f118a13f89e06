use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: integer negation; negating `i64::MIN` overflows.
    /// - `Not`: boolean negation; other kinds are rejected.
    /// - `ToInteger`: parses decimal text (an optional sign followed by
    ///   digits, no surrounding whitespace) or maps `true`/`false` to `1`/`0`.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use xmas::{Context, Value, ast::UnaryOperator};
    ///
    /// // Negation
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// // Boolean not
    /// let v = Context::eval_unary(UnaryOperator::Not, &Value::Bool(false), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// // Conversion
    /// let v = Context::eval_unary(UnaryOperator::ToInteger, &Value::from("-12"), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-12));
    /// assert!(Context::eval_unary(UnaryOperator::ToInteger, &Value::from("1x"), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => {
                let n = value.as_integer("'-'", line)?;
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool("'!'", line)?)),
            UnaryOperator::ToInteger => match value {
                Value::Text(text) => {
                    text.parse::<i64>()
                        .map(Value::Integer)
                        .map_err(|_| RuntimeError::ConversionFailure { text: text.to_string(),
                                                                       line })
                },
                Value::Bool(b) => Ok(Value::Integer(i64::from(*b))),
                other => Err(other.mismatch("'~'", "text or boolean", line)),
            },
        }
    }
}
