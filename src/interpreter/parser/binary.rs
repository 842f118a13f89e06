use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Position, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses pipe composition, the lowest precedence level.
///
/// The rule is: `pipe := or ("|>" or)*`
///
/// `f |> g |> h` groups as `(f |> g) |> h`, which composes left to right.
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// An `Expr::BinaryOp` tree of `Pipe` nodes, or the operand itself.
pub fn parse_pipe<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_level(tokens, &[BinaryOperator::Pipe], parse_logical_or)
}

/// Parses `||` chains.
///
/// The rule is: `or := and ("||" and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_level(tokens, &[BinaryOperator::Or], parse_logical_and)
}

/// Parses `&&` chains.
///
/// The rule is: `and := comparison ("&&" comparison)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_level(tokens, &[BinaryOperator::And], parse_comparison)
}

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators: `<`, `>`, `<=`, `>=`, `==`.
/// They are left-associative, so `5 < 10 == true` compares the boolean result
/// of `5 < 10` with `true`.
///
/// The rule is: `comparison := additive (("<" | ">" | "<=" | ">=" | "==")
/// additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual};

    parse_level(tokens,
                &[Less, Greater, LessEqual, GreaterEqual, Equal],
                parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_level(tokens,
                &[BinaryOperator::Add, BinaryOperator::Sub],
                parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_level(tokens,
                &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod],
                parse_unary)
}

/// Parses one left-associative precedence level.
///
/// Operands are parsed with `next_level`; every operator in `operators`
/// folds the expression so far with the following operand.
fn parse_level<'a, I>(tokens: &mut Peekable<I>,
                      operators: &[BinaryOperator],
                      next_level: fn(&mut Peekable<I>) -> ParseResult<Expr>)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut left = next_level(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && operators.contains(&op)
        {
            let line = position.line;
            tokens.next();
            let right = next_level(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// and `None` for all other tokens. Compound assignment tokens are not
/// operators at expression level.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Example
/// ```
/// use xmas::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::PipeForward),
///            Some(BinaryOperator::Pipe));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, Or, Pipe, Sub,
    };

    match token {
        Token::Plus => Some(Add),
        Token::Minus => Some(Sub),
        Token::Star => Some(Mul),
        Token::Slash => Some(Div),
        Token::Percent => Some(Mod),
        Token::Less => Some(Less),
        Token::Greater => Some(Greater),
        Token::LessEqual => Some(LessEqual),
        Token::GreaterEqual => Some(GreaterEqual),
        Token::EqualEqual => Some(Equal),
        Token::AndAnd => Some(And),
        Token::OrOr => Some(Or),
        Token::PipeForward => Some(Pipe),
        _ => None,
    }
}

/// Maps a compound assignment token to the operator it applies.
///
/// # Example
/// ```
/// use xmas::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::compound_assignment_operator},
/// };
///
/// assert_eq!(compound_assignment_operator(&Token::ModAssign),
///            Some(BinaryOperator::Mod));
/// assert_eq!(compound_assignment_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn compound_assignment_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::PlusAssign => Some(BinaryOperator::Add),
        Token::MinusAssign => Some(BinaryOperator::Sub),
        Token::MulAssign => Some(BinaryOperator::Mul),
        Token::DivAssign => Some(BinaryOperator::Div),
        Token::ModAssign => Some(BinaryOperator::Mod),
        _ => None,
    }
}
