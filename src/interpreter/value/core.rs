use std::rc::Rc;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{callable::Callable, grid::Grid},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and accumulators. Values are immutable;
/// list and text payloads are shared behind `Rc`, so copying a value into a
/// variable never copies its elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and logical operations. Used as the
    /// condition of `if`, which must evaluate to `Bool`.
    Bool(bool),
    /// Immutable text, indexed and sliced by character.
    Text(Rc<str>),
    /// An ordered list of values of any kinds.
    List(Rc<Vec<Self>>),
    /// The 2-D `input` grid, or a row slice of it.
    Grid(Rc<Grid>),
    /// A callable: user-defined, built-in, or a pipe composition.
    Function(Callable),
    /// The "no value" sentinel produced by a block that never assigns `_`,
    /// an `if` without else branch whose condition is false, or a `for`
    /// without an initial accumulator.
    Nothing,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(Rc::from(v))
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Text(Rc::from(v.to_string()))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Self::Function(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Text(s) => s.as_str().into(),
        }
    }
}

impl Value {
    /// The kind of the value as used in error messages.
    ///
    /// # Example
    /// ```
    /// use xmas::Value;
    ///
    /// assert_eq!(Value::from("abc").type_name(), "text");
    /// assert_eq!(Value::Nothing.type_name(), "no value");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Grid(_) => "grid",
            Self::Function(_) => "function",
            Self::Nothing => "no value",
        }
    }

    /// Returns the integer, or a `TypeMismatch` naming `context`.
    ///
    /// # Parameters
    /// - `context`: What required the integer, e.g. `"index"`.
    /// - `line`: Source code line number for error reporting.
    pub fn as_integer(&self, context: &str, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => Err(other.mismatch(context, "integer", line)),
        }
    }

    /// Returns the boolean, or a `TypeMismatch` naming `context`.
    ///
    /// Conditions and logical operators accept booleans only; no other kind
    /// is treated as true or false.
    pub fn as_bool(&self, context: &str, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(other.mismatch(context, "boolean", line)),
        }
    }

    /// Builds a `TypeMismatch` error for this value.
    ///
    /// # Example
    /// ```
    /// use xmas::{Value, error::RuntimeError};
    ///
    /// let err = Value::Bool(true).mismatch("'-'", "integer", 3);
    ///
    /// assert_eq!(err,
    ///            RuntimeError::TypeMismatch { details: "'-' expects integer, found boolean"
    ///                                                  .to_string(),
    ///                                         line:    3, });
    /// ```
    #[must_use]
    pub fn mismatch(&self, context: &str, expected: &str, line: usize) -> RuntimeError {
        RuntimeError::TypeMismatch { details: format!("{context} expects {expected}, found {}",
                                                      self.type_name()),
                                     line }
    }

    /// Renders the value for traces and error messages.
    ///
    /// Unlike [`Display`](std::fmt::Display), text is quoted, so `"1"` and
    /// `1` are told apart.
    ///
    /// # Example
    /// ```
    /// use xmas::Value;
    ///
    /// let v = Value::from(vec![Value::Integer(1), Value::from("a")]);
    ///
    /// assert_eq!(v.to_string(), "[1, a]");
    /// assert_eq!(v.repr(), "[1, \"a\"]");
    /// ```
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::Text(s) => format!("{s:?}"),
            Self::List(items) => {
                let items: Vec<String> = items.iter().map(Self::repr).collect();
                format!("[{}]", items.join(", "))
            },
            Self::Grid(grid) => {
                let rows: Vec<String> =
                    grid.iter()
                        .map(|row| {
                            let cells: Vec<String> = row.iter().map(|c| format!("{c:?}")).collect();
                            format!("[{}]", cells.join(", "))
                        })
                        .collect();
                format!("[{}]", rows.join(", "))
            },
            Self::Nothing => "no value".to_string(),
            other => other.to_string(),
        }
    }

    /// Returns `true` for the "no value" sentinel.
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Grid(grid) => write!(f, "{grid}"),
            Self::Function(_) => write!(f, "<function>"),
            Self::Nothing => Ok(()),
        }
    }
}
