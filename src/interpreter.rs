/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against a single global variable table and a
/// function table, evaluates operators and special forms, manages the
/// accumulator stack and produces the program's final value.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, `if`, `for`, `len` and indexing.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a finite list of tokens,
/// each tagged with the line and column it starts at.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Handles integer and text literals, identifiers, keywords and operators.
/// - Reports lexical errors for unrecognized or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions by recursive descent.
/// - Resolves operator precedence and the list/range/index bracket forms.
/// - Reports syntax errors with position information.
pub mod parser;
/// Trace events emitted while evaluating.
///
/// A trace is an ordered record of assignments, operator evaluations,
/// conditional decisions and loop iterations. It is collected only when a
/// sink is attached and never influences evaluation.
pub mod trace;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, booleans, text, lists, the input
///   grid, functions and the "no value" sentinel.
/// - Implements conversions, structural equality and rendering.
pub mod value;
