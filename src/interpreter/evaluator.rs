/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// checked arithmetic, concatenation, comparisons, the short-circuiting
/// logical operators and pipe composition.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, logical NOT and conversion to integer.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the main dispatch over expressions and
/// statements, the accumulator stack and the save/restore discipline for
/// global bindings.
pub mod core;

/// Evaluation of the special forms `if`, `for` and `len`.
///
/// These forms look like calls but control which of their arguments are
/// evaluated, and when.
pub mod special;

/// Index, slice and method access on lists, text and the input grid.
pub mod index;

/// Utility functions for evaluation.
///
/// Provides literal, name and list evaluation shared by the other modules.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// application of composed callables.
pub mod function;
