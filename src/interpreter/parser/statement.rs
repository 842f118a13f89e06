use std::iter::Peekable;

use crate::{
    ast::{AssignTarget, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            binary::compound_assignment_operator,
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a function definition (`name(params) = body`),
/// - an assignment or compound assignment to a variable or `_`,
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. The statement's source line is taken from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some(statement) = parse_function_definition(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let line = tokens.peek().map_or(0, |(_, position)| position.line);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, line })
}

/// Parses an assignment or compound-assignment statement.
///
/// Supported forms, where `target` is an identifier or `_`:
///
/// - `target = <expression>`
/// - `target += <expression>` (likewise `-=`, `*=`, `/=`, `%=`)
///
/// Only two tokens of lookahead are used; if they do not match, nothing is
/// consumed and `Ok(None)` is returned.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut lookahead = tokens.clone();
    let (target, line) = match lookahead.next() {
        Some((Token::Identifier(name), position)) => {
            (AssignTarget::Variable(name.clone()), position.line)
        },
        Some((Token::Underscore, position)) => (AssignTarget::Accumulator, position.line),
        _ => return Ok(None),
    };

    let Some((operator, _)) = lookahead.next() else {
        return Ok(None);
    };

    if *operator == Token::Equals {
        *tokens = lookahead;
        let value = parse_expression(tokens)?;
        return Ok(Some(Statement::Assignment { target, value, line }));
    }

    if let Some(op) = compound_assignment_operator(operator) {
        *tokens = lookahead;
        let value = parse_expression(tokens)?;
        return Ok(Some(Statement::CompoundAssignment { target,
                                                       op,
                                                       value,
                                                       line }));
    }

    Ok(None)
}

/// Parses a function definition of the form `<name>(param1, param2, ...) =
/// <expression>`.
///
/// This function identifies a definition by checking:
/// 1. The next token is an identifier.
/// 2. It is immediately followed by `(`.
/// 3. A matching `)` exists (nested parentheses are skipped).
/// 4. The token after the closing `)` is `=`.
///
/// When these conditions are met, the function name, parameter list, and body
/// expression are parsed and returned as a `Statement::Function`. Otherwise
/// nothing is consumed and `Ok(None)` is returned, so `f(x) == 1` or a plain
/// call `f(x)` fall through to expression parsing.
///
/// # Errors
/// Returns `ParseError::InvalidFunctionDefinition` if a parameter is not a
/// plain identifier or a parameter name repeats; errors from the body are
/// passed through.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut lookahead = tokens.clone();
    let Some((Token::Identifier(name), position)) = lookahead.next() else {
        return Ok(None);
    };
    let Some((Token::LParen, _)) = lookahead.next() else {
        return Ok(None);
    };

    let mut depth = 1usize;
    while depth > 0 {
        match lookahead.next() {
            Some((Token::LParen, _)) => depth += 1,
            Some((Token::RParen, _)) => depth -= 1,
            Some((Token::EndOfInput, _)) | None => return Ok(None),
            Some(_) => {},
        }
    }
    let Some((Token::Equals, _)) = lookahead.peek() else {
        return Ok(None);
    };

    let position = *position;
    tokens.next();
    tokens.next();

    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen).map_err(|_| {
        ParseError::InvalidFunctionDefinition { details: format!("parameters of '{name}' must be plain names"),
                                                position }
    })?;

    for (i, param) in params.iter().enumerate() {
        if params[..i].contains(param) {
            return Err(ParseError::InvalidFunctionDefinition { details: format!("parameter '{param}' appears more than once"),
                                                               position });
        }
    }

    tokens.next();
    let body = parse_expression(tokens)?;

    Ok(Some(Statement::Function(FunctionDef { name: name.clone(),
                                              params,
                                              body,
                                              line: position.line })))
}
