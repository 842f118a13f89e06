use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::core::ParseResult,
    },
};

/// Builds the error for finding `token` where `expected` was required.
///
/// The end-of-input marker produces `UnexpectedEndOfInput`; every other token
/// produces `UnexpectedToken`.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 token: &Token,
                                                 position: Position)
                                                 -> ParseError {
    if *token == Token::EndOfInput {
        ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                           position }
    } else {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found: token.to_string(),
                                      position }
    }
}

/// Consumes the next token, requiring it to equal `expected`.
///
/// # Returns
/// The position of the consumed token.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((tok, position)) if tok == expected => Ok(*position),
        Some((tok, position)) => Err(unexpected(&expected.to_string(), tok, *position)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       position: Position::default(), }),
    }
}

/// Skips newline tokens, which are insignificant inside brackets.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Position)>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Skips statement separators (newlines and `;`).
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Position)>
{
    while let Some((tok, _)) = tokens.peek()
          && tok.is_separator()
    {
        tokens.next();
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, argument lists, parameter lists
/// and index brackets. It repeatedly calls `parse_item` to parse one element,
/// expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. Newlines
/// around items are ignored so long lists may span lines.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut items = Vec::new();
    skip_newlines(tokens);
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        skip_newlines(tokens);
        match tokens.next() {
            Some((Token::Comma, _)) => skip_newlines(tokens),
            Some((tok, _)) if tok == closing => break,
            Some((tok, position)) => {
                return Err(unexpected(&format!("',' or {closing}"), tok, *position));
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: closing.to_string(),
                                                              position: Position::default(), });
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`. Keywords and `_` are separate
/// tokens and are therefore rejected here.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, position)) => Err(unexpected("identifier", tok, *position)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "identifier".to_string(),
                                                       position: Position::default(), }),
    }
}
