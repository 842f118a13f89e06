use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` compares any two values structurally: lists element by element,
    /// texts by content, and values of different kinds are simply unequal.
    /// The relational operators order two integers numerically or two texts
    /// lexicographically. The "no value" sentinel cannot be compared.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use xmas::{Context, Value, ast::BinaryOperator};
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Less,
    ///                                       &Value::Integer(3),
    ///                                       &Value::Integer(5),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal,
    ///                                       &Value::from("1"),
    ///                                       &Value::Integer(1),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        if left.is_nothing() || right.is_nothing() {
            return Err(Self::operand_mismatch(op, left, right, line));
        }

        if op == BinaryOperator::Equal {
            return Ok(Value::Bool(left == right));
        }

        let ordering = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => return Err(Self::operand_mismatch(op, left, right, line)),
        };

        Ok(Value::Bool(match op {
                           BinaryOperator::Less => ordering.is_lt(),
                           BinaryOperator::Greater => ordering.is_gt(),
                           BinaryOperator::LessEqual => ordering.is_le(),
                           BinaryOperator::GreaterEqual => ordering.is_ge(),
                           _ => return Err(Self::operand_mismatch(op, left, right, line)),
                       }))
    }
}
