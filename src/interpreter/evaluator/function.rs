/// Built-in rounding functions.
///
/// `floor` and `ceil` over integers, where both are the identity.
pub mod builtin;
/// The `min` and `max` builtins over two or more integers.
pub mod min_max;

pub mod core;
