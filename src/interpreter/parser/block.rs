use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{skip_separators, unexpected},
        },
    },
};

/// Parses a block expression delimited by braces.
///
/// A block consists of zero or more statements separated by newlines or `;`.
/// Parsing continues until the closing `}` token is consumed. Separators
/// around statements are ignored, so blocks may be written on one line or
/// spread over many.
///
/// Grammar: `block := "{" (statement (separator statement)*)? "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// `Expr::Block { statements, line }`.
///
/// # Errors
/// Fails when a statement is malformed, when two statements share a line
/// without a separator, or when the input ends before `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some((Token::EndOfInput, position)) => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "'}'".to_string(),
                                                              position: *position, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: "'}'".to_string(),
                                                              position: Position::default(), });
            },
            Some(_) => {},
        }

        statements.push(parse_statement(tokens)?);

        match tokens.peek() {
            Some((Token::RBrace, _)) => {},
            Some((tok, _)) if tok.is_separator() => {},
            Some((tok, position)) => return Err(unexpected("newline, ';' or '}'", tok, *position)),
            None => {},
        }
    }

    Ok(Expr::Block { statements, line })
}
