/// Parser entry points and the shared result type.
///
/// Contains the program-level parse loop and the expression entry point.
pub mod core;

/// Unary, primary and postfix expression parsing.
///
/// Handles prefix operators, literals, identifiers and calls, the special
/// forms, bracket literals, and postfix indexing and method calls.
pub mod unary;

/// Binary operator parsing.
///
/// Implements one function per precedence level, from pipe down to
/// multiplication.
pub mod binary;

/// Block parsing.
///
/// Parses `{ ... }` sequences of statements.
pub mod block;

/// Utility functions for the parser.
///
/// Provides comma-separated list parsing, token expectations and error
/// construction shared by the other parser modules.
pub mod utils;

/// Statement parsing.
///
/// Recognizes function definitions, assignments and expression statements.
pub mod statement;
