use std::rc::Rc;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `+`.
    ///
    /// Two integers are added with overflow checking. Two lists, or two
    /// texts, are concatenated into a new value; neither operand changes.
    /// Any other pairing is a type mismatch.
    ///
    /// # Example
    /// ```
    /// use xmas::{Context, Value};
    ///
    /// let a = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
    /// let b = Value::from(vec![Value::Integer(3)]);
    ///
    /// assert_eq!(Context::eval_add(&a, &b, 1).unwrap().to_string(), "[1, 2, 3]");
    /// assert!(Context::eval_add(&a, &Value::Integer(3), 1).is_err());
    /// ```
    pub fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                a.checked_add(*b)
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (Value::List(a), Value::List(b)) => {
                let mut joined = Vec::with_capacity(a.len() + b.len());
                joined.extend(a.iter().cloned());
                joined.extend(b.iter().cloned());
                Ok(Value::List(Rc::new(joined)))
            },
            (Value::Text(a), Value::Text(b)) => Ok(Value::from(format!("{a}{b}"))),
            _ => Err(Self::operand_mismatch(BinaryOperator::Add, left, right, line)),
        }
    }

    /// Evaluates `-`, `*`, `/` or `%` on two integers.
    ///
    /// Division truncates toward zero and the remainder takes the sign of the
    /// dividend, so `(a / b) * b + a % b == a` always holds.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero divisor.
    /// - `Overflow` when the result does not fit in 64 bits (including
    ///   `i64::MIN / -1`).
    /// - `TypeMismatch` for non-integer operands.
    ///
    /// # Example
    /// ```
    /// use xmas::{Context, Value, ast::BinaryOperator};
    ///
    /// let div = Context::eval_arithmetic(BinaryOperator::Div,
    ///                                    &Value::Integer(-7),
    ///                                    &Value::Integer(2),
    ///                                    1).unwrap();
    /// let rem = Context::eval_arithmetic(BinaryOperator::Mod,
    ///                                    &Value::Integer(-7),
    ///                                    &Value::Integer(2),
    ///                                    1).unwrap();
    ///
    /// assert_eq!(div, Value::Integer(-3));
    /// assert_eq!(rem, Value::Integer(-1));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(Self::operand_mismatch(op, left, right, line));
        };
        let (a, b) = (*a, *b);

        if matches!(op, BinaryOperator::Div | BinaryOperator::Mod) && b == 0 {
            return Err(RuntimeError::DivisionByZero { line });
        }

        let result = match op {
            BinaryOperator::Sub => a.checked_sub(b),
            BinaryOperator::Mul => a.checked_mul(b),
            BinaryOperator::Div => a.checked_div(b),
            BinaryOperator::Mod => a.checked_rem(b),
            _ => return Err(Self::operand_mismatch(op, left, right, line)),
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }

    /// Builds the error for an operator applied to unsupported operand kinds.
    pub(crate) fn operand_mismatch(op: BinaryOperator,
                                   left: &Value,
                                   right: &Value,
                                   line: usize)
                                   -> RuntimeError {
        RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                      left.type_name(),
                                                      right.type_name()),
                                     line }
    }
}
