use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            binary::parse_pipe,
            statement::parse_statement,
            utils::{skip_separators, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token list into a program.
///
/// Statements are separated by newlines or `;`; empty lines are skipped.
/// Anything left on a line after a complete statement is an error.
///
/// # Parameters
/// - `tokens`: Positioned tokens as produced by [`crate::tokenize`].
///
/// # Returns
/// The program's statements in source order.
///
/// # Example
/// ```
/// use xmas::{ast::Statement, parse, tokenize};
///
/// let program = parse(&tokenize("addOne(x) = x + 1; addOne(2)").unwrap()).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[0], Statement::Function(_)));
///
/// assert!(parse(&tokenize("1 + 2 3").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[(Token, Position)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut program = Vec::new();

    loop {
        skip_separators(&mut iter);
        match iter.peek() {
            None | Some((Token::EndOfInput, _)) => break,
            Some(_) => {},
        }

        program.push(parse_statement(&mut iter)?);

        match iter.peek() {
            None | Some((Token::EndOfInput, _)) => break,
            Some((tok, _)) if tok.is_separator() => {},
            Some((tok, position)) => return Err(unexpected("end of statement", tok, *position)),
        }
    }

    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, pipe composition, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := pipe`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_pipe(tokens)
}
