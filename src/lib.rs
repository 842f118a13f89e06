//! # xmas
//!
//! xmas is a small scripting language for grid-shaped puzzle input.
//! Programs work on integers, booleans, text and nested lists, return values
//! through the implicit accumulator `_`, and read their puzzle input through
//! the 2-D `input` grid.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides the error types of every phase.
///
/// Lexing, parsing and evaluation each have their own error enum, and
/// [`error::Error`] unifies them for callers that run the whole pipeline.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions or line numbers for context.
/// - Integrates with `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the value model and
/// tracing.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `usize` without silent data loss.
pub mod util;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::{Position, Token, tokenize},
        parser::core::parse,
        trace::{TraceEvent, TraceSink},
        value::core::Value,
    },
};

/// Runs a program against optional input text and returns its final value.
///
/// The source is tokenized, parsed and evaluated in a fresh [`Context`]. The
/// result is the value of the last top-level expression, or the assigned value
/// when the program ends with an assignment. A program that produces neither
/// yields [`Value::Nothing`].
///
/// # Errors
/// Returns the first lexing, parsing or runtime error encountered.
///
/// # Examples
/// ```
/// use xmas::{Value, run};
///
/// let value = run("x = 20\nx + 22", None).unwrap();
/// assert_eq!(value, Value::Integer(42));
///
/// let value = run("len(input)", Some("abc\ndef")).unwrap();
/// assert_eq!(value.to_string(), "[2, 3]");
///
/// // 'y' is never bound.
/// assert!(run("y + 1", None).is_err());
/// ```
pub fn run(source: &str, input: Option<&str>) -> Result<Value, Error> {
    let program = parse(&tokenize(source)?)?;
    let mut context = Context::with_input(input.unwrap_or_default());

    Ok(context.run(&program)?)
}

/// Runs a program like [`run`] while recording trace events into `sink`.
///
/// Every assignment, operator evaluation, conditional decision and loop
/// iteration is recorded in evaluation order. Tracing never changes the
/// result.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error encountered.
///
/// # Examples
/// ```
/// use xmas::{TraceEvent, Value, run_traced};
///
/// let mut events: Vec<TraceEvent> = Vec::new();
/// let value = run_traced("x = 1 + 2", None, &mut events).unwrap();
///
/// assert_eq!(value, Value::Integer(3));
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[1].to_string(), "x: undefined → 3");
/// ```
pub fn run_traced(source: &str,
                  input: Option<&str>,
                  sink: &mut dyn TraceSink)
                  -> Result<Value, Error> {
    let program = parse(&tokenize(source)?)?;
    let mut context = Context::with_input(input.unwrap_or_default()).traced(sink);

    Ok(context.run(&program)?)
}
