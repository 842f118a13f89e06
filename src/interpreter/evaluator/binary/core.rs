use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        trace::TraceEvent,
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary expression.
    ///
    /// `&&` and `||` are handed to [`Context::eval_logic`] unevaluated so
    /// they can short-circuit. Every other operator evaluates the left
    /// operand, then the right, and combines them with
    /// [`Context::eval_binary`]. The result is recorded as a trace event.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize)
                                 -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_logic(left, op, right, line);
        }

        let left = self.eval(left)?;
        let right = self.eval(right)?;
        let result = Self::eval_binary(op, &left, &right, line)?;

        self.record(|depth| TraceEvent::Binary { op,
                                                 left,
                                                 right,
                                                 result: result.clone(),
                                                 depth });
        Ok(result)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator:
    /// - `+` adds integers or concatenates two lists or two texts,
    /// - `-`, `*`, `/` and `%` use checked integer arithmetic,
    /// - relational operators and `==` use `eval_comparison`,
    /// - `&&` and `||` require two booleans,
    /// - `|>` composes two functions.
    ///
    /// The "no value" sentinel is rejected by every operator.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use xmas::{Context, Value, ast::BinaryOperator};
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    /// let line = 1;
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, line);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let joined = Context::eval_binary(BinaryOperator::Add,
    ///                                   &Value::from("ab"),
    ///                                   &Value::from("c"),
    ///                                   line);
    /// assert_eq!(joined.unwrap(), Value::from("abc"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, Or, Pipe, Sub,
        };

        match op {
            Add => Self::eval_add(left, right, line),
            Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, line),
            Less | Greater | LessEqual | GreaterEqual | Equal => {
                Self::eval_comparison(op, left, right, line)
            },
            And | Or => Self::eval_logic_values(op, left, right, line),
            Pipe => match (left, right) {
                (Value::Function(first), Value::Function(second)) => {
                    Ok(Value::Function(first.clone().then(second.clone())))
                },
                (Value::Function(_), other) | (other, _) => {
                    Err(other.mismatch("'|>'", "function", line))
                },
            },
        }
    }
}
