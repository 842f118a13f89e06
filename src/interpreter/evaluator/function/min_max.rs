use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Computes the minimum or maximum of integer arguments.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. Any non-integer argument produces a `TypeMismatch` error.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing at least one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The smallest or largest argument as `Value::Integer`.
///
/// # Example
/// ```
/// use xmas::{Value, interpreter::evaluator::function::min_max::min_max};
///
/// let r = min_max("min", &[Value::Integer(3), Value::Integer(7)], 1).unwrap();
/// assert_eq!(r, Value::Integer(3));
///
/// let r = min_max("max", &[Value::Integer(3), Value::Integer(7), Value::Integer(-2)], 1).unwrap();
/// assert_eq!(r, Value::Integer(7));
///
/// assert!(min_max("max", &[Value::Integer(3), Value::from("7")], 1).is_err());
/// ```
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let context = format!("'{name}'");
    let numbers = args.iter()
                      .map(|arg| arg.as_integer(&context, line))
                      .collect::<EvalResult<Vec<i64>>>()?;

    let result = if name == "min" {
        numbers.into_iter().min()
    } else {
        numbers.into_iter().max()
    };

    result.map(Value::Integer)
          .ok_or_else(|| RuntimeError::ArityMismatch { name:     name.to_string(),
                                                       expected: "at least 1".to_string(),
                                                       found:    0,
                                                       line, })
}
