use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Applies a rounding operation (`floor` or `ceil`) to an integer.
///
/// Integers are already whole, so the value is returned as-is; any other
/// kind is a `TypeMismatch`.
///
/// # Parameters
/// - `name`: Operation name (`floor`, `ceil`).
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use xmas::{Value, interpreter::evaluator::function::builtin::unary_round};
///
/// let r = unary_round("floor", &[Value::Integer(-3)], 1).unwrap();
/// assert_eq!(r, Value::Integer(-3));
///
/// assert!(unary_round("ceil", &[Value::Bool(true)], 1).is_err());
/// ```
pub fn unary_round(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let value = args.first().unwrap_or(&Value::Nothing);

    value.as_integer(&format!("'{name}'"), line)
         .map(Value::Integer)
}
