/// Checked integer arithmetic and concatenation.
pub mod arithmetic;
/// Ordering and structural equality.
pub mod comparison;
/// Short-circuiting `&&` and `||`.
pub mod logic;

pub mod core;
