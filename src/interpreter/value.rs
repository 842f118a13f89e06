/// Callable values.
///
/// Defines the `Callable` type carried by `Value::Function`: a user-defined
/// function, a built-in referenced by name, or a left-to-right composition
/// built by the `|>` operator.
pub mod callable;
/// The 2-D character grid behind `input`.
///
/// A `Grid` is built once from the input text, one row per line, and is
/// read-only afterwards. It supports cell and row access, row slicing and
/// conversion into nested lists.
pub mod grid;

pub mod core;
