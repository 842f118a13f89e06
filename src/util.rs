/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the `i64`
/// integers of the language and the `usize` lengths and positions of Rust
/// collections, without risking silent truncation or sign loss.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and in range, or a `RuntimeError` otherwise.
pub mod num;
