use std::iter::Peekable;

use crate::{
    ast::{Expr, IndexItem, LiteralValue, LoopBinding, Method, SpecialForm, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Position, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{
                expect, parse_comma_separated, parse_identifier, skip_newlines, unexpected,
            },
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `~`  (conversion to integer)
/// - `!`  (logical not)
/// - `-`  (numeric negation)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies any postfix operators via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := ("~" | "!" | "-") unary
///            | primary postfix*
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Tilde, _)) => Some(UnaryOperator::ToInteger),
        Some((Token::Bang, _)) => Some(UnaryOperator::Not),
        Some((Token::Minus, _)) => Some(UnaryOperator::Negate),
        _ => None,
    };

    if let Some(op) = op
       && let Some((_, position)) = tokens.next()
    {
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           line: position.line })
    } else {
        let primary = parse_primary(tokens)?;
        parse_postfix(tokens, primary)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer, text and boolean literals
/// - identifiers and named calls
/// - the accumulator `_` and the `input` grid
/// - the special forms `if(...)`, `for(...)` and `len(...)`
/// - parenthesized expressions
/// - blocks (`{ ... }`)
/// - list and range literals (`[ ... ]`)
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier ( "(" arguments ")" )?
///              | "_" | "input"
///              | ("if" | "for" | "len") "(" arguments ")"
///              | "(" expression ")"
///              | "{" statement* "}"
///              | "[" expression ".." expression "]"
///              | "[" elements "]"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let Some((token, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "expression".to_string(),
                                                      position: Position::default(), });
    };
    let line = position.line;

    match token {
        Token::Integer(n) => Ok(Expr::Literal { value: (*n).into(),
                                                line }),
        Token::Text(s) => Ok(Expr::Literal { value: LiteralValue::Text(s.clone()),
                                             line }),
        Token::Bool(b) => Ok(Expr::Literal { value: (*b).into(),
                                             line }),
        Token::Identifier(name) => parse_identifier_or_call(tokens, name, line),
        Token::Underscore => Ok(Expr::Accumulator { line }),
        Token::Input => Ok(Expr::Input { line }),
        Token::If => parse_special_call(tokens, SpecialForm::If, line),
        Token::Len => parse_special_call(tokens, SpecialForm::Len, line),
        Token::For => parse_for(tokens, line),
        Token::LParen => parse_grouping(tokens),
        Token::LBrace => parse_block(tokens, line),
        Token::LBracket => parse_bracket(tokens, *position),
        tok => Err(unexpected("expression", tok, *position)),
    }
}

/// Parses postfix operators applied to an expression.
///
/// This function is called after parsing a primary expression and handles
/// three kinds of postfix constructs, in any order and any number of times:
///
/// 1. **Indexing and slicing** `expr[i]`, `expr[a..b]`, `expr[r, c]`
/// 2. **Method calls** `expr.rows()`
/// 3. **Calls of computed functions** `expr(args)`
///
/// Grammar:
/// ```text
///     postfix := primary
///              | postfix "[" index_item ("," index_item)? "]"
///              | postfix "." identifier "(" ")"
///              | postfix "(" arguments ")"
/// ```
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    loop {
        match tokens.peek() {
            Some((Token::LBracket, position)) => {
                let position = *position;
                tokens.next();
                let indices = parse_comma_separated(tokens, parse_index_item, &Token::RBracket)?;
                if indices.is_empty() || indices.len() > 2 {
                    return Err(ParseError::MalformedBracket { details: format!("an index takes one or two items, found {}",
                                                                               indices.len()),
                                                              position });
                }
                node = Expr::Index { target: Box::new(node),
                                     indices,
                                     line: position.line };
            },
            Some((Token::Dot, position)) => {
                let line = position.line;
                tokens.next();
                let method = parse_method(tokens)?;
                node = Expr::MethodCall { target: Box::new(node),
                                          method,
                                          line };
            },
            Some((Token::LParen, position)) => {
                let line = position.line;
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                node = Expr::Apply { callee: Box::new(node),
                                     arguments,
                                     line };
            },
            _ => break,
        }
    }
    Ok(node)
}

/// Parses a method name and its empty argument list after a `.`.
fn parse_method<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Method>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let position = tokens.peek().map_or_else(Position::default, |(_, p)| *p);
    let name = parse_identifier(tokens)?;
    let method = match name.as_str() {
        "rows" => Method::Rows,
        _ => return Err(ParseError::UnknownMethod { name, position }),
    };
    expect(tokens, &Token::LParen)?;
    expect(tokens, &Token::RParen)?;
    Ok(method)
}

/// Parses one item of an index bracket.
///
/// Grammar:
/// ```text
///     index_item := expression
///                 | expression? ".." expression?
/// ```
fn parse_index_item<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<IndexItem>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let start = match tokens.peek() {
        Some((Token::DotDot, _)) => None,
        _ => {
            let expr = parse_expression(tokens)?;
            let Some((Token::DotDot, _)) = tokens.peek() else {
                return Ok(IndexItem::Single(expr));
            };
            Some(expr)
        },
    };

    tokens.next();
    let end = match tokens.peek() {
        Some((Token::RBracket | Token::Comma | Token::NewLine, _)) => None,
        _ => Some(parse_expression(tokens)?),
    };

    Ok(IndexItem::Range { start, end })
}

/// Parses a `[`-introduced literal in primary position.
///
/// The first element is parsed once and the token after it decides the form:
/// `..` makes the bracket a range `[a..b]`, while `,` or `]` makes it a list
/// literal whose first element is already known.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `[`.
/// - `position`: Position of the `[` token.
fn parse_bracket<'a, I>(tokens: &mut Peekable<I>, position: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let line = position.line;
    skip_newlines(tokens);
    if let Some((Token::RBracket, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::List { elements: Vec::new(),
                               line });
    }

    let first = parse_expression(tokens)?;
    skip_newlines(tokens);

    match tokens.next() {
        Some((Token::DotDot, _)) => {
            let end = parse_expression(tokens)?;
            skip_newlines(tokens);
            match tokens.next() {
                Some((Token::RBracket, _)) => Ok(Expr::Range { start: Box::new(first),
                                                               end: Box::new(end),
                                                               line }),
                Some((tok, _)) => Err(ParseError::MalformedBracket { details: format!("expected ']' after range, found {tok}"),
                                                                     position }),
                None => Err(ParseError::MalformedBracket { details: "unterminated range".to_string(),
                                                           position }),
            }
        },
        Some((Token::RBracket, _)) => Ok(Expr::List { elements: vec![first],
                                                      line }),
        Some((Token::Comma, _)) => {
            skip_newlines(tokens);
            if let Some((tok @ Token::RBracket, position)) = tokens.peek() {
                return Err(unexpected("expression", tok, *position));
            }
            let mut elements = vec![first];
            elements.extend(parse_comma_separated(tokens, parse_expression, &Token::RBracket)?);
            Ok(Expr::List { elements, line })
        },
        Some((tok, position)) => Err(unexpected("',', '..' or ']'", tok, *position)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "']'".to_string(),
                                                       position }),
    }
}

/// Parses an identifier reference or a named call.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   name: &str,
                                   line: usize)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments,
                                       line });
    }

    Ok(Expr::Variable { name: name.to_string(),
                        line })
}

/// Parses the argument list of `if(...)` or `len(...)`.
///
/// Arguments are kept unevaluated and their count is not checked here.
fn parse_special_call<'a, I>(tokens: &mut Peekable<I>,
                             form: SpecialForm,
                             line: usize)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

    Ok(Expr::SpecialCall { form,
                           arguments,
                           line })
}

/// Parses `for(var of sequence, body, init?)`.
///
/// The `var of sequence` header is required; the remaining arguments are
/// collected like any other call and counted during evaluation.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect(tokens, &Token::LParen)?;
    skip_newlines(tokens);
    let var = parse_identifier(tokens)?;
    expect(tokens, &Token::Of)?;
    let sequence = parse_expression(tokens)?;
    skip_newlines(tokens);

    let arguments = match tokens.next() {
        Some((Token::RParen, _)) => Vec::new(),
        Some((Token::Comma, _)) => {
            parse_comma_separated(tokens, parse_expression, &Token::RParen)?
        },
        Some((tok, position)) => return Err(unexpected("',' or ')'", tok, *position)),
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "')'".to_string(),
                                                          position: Position::default(), });
        },
    };

    Ok(Expr::SpecialCall { form: SpecialForm::For(LoopBinding { var,
                                                                sequence:
                                                                    Box::new(sequence) }),
                           arguments,
                           line })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`. The inner expression is returned as-is.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    skip_newlines(tokens);
    let expr = parse_expression(tokens)?;
    skip_newlines(tokens);
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}
