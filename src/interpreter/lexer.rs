use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Text literal tokens, such as `"abc"`, with escapes resolved.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, parse_text)]
    Text(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `if`
    #[token("if")]
    If,
    /// `for`
    #[token("for")]
    For,
    /// `of`
    #[token("of")]
    Of,
    /// `len`
    #[token("len")]
    Len,
    /// `input`
    #[token("input")]
    Input,
    /// `_`, the accumulator.
    #[token("_", priority = 3)]
    Underscore,
    /// Identifier tokens; variable or function names such as `x` or `addOne`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `%=`
    #[token("%=")]
    ModAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!`
    #[token("!")]
    Bang,
    /// `|>`
    #[token("|>")]
    PipeForward,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `..`
    #[token("..")]
    DotDot,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`, a statement separator like a newline.
    #[token(";")]
    Semicolon,
    /// Line breaks separate statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Marks the end of the token stream. Never produced by logos itself.
    EndOfInput,
}

impl Token {
    /// Returns `true` for tokens that end a statement.
    #[must_use]
    pub const fn is_separator(&self) -> bool {
        matches!(self, Self::NewLine | Self::Semicolon)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Integer(n) => return write!(f, "integer {n}"),
            Self::Text(s) => return write!(f, "text {s:?}"),
            Self::Bool(b) => return write!(f, "'{b}'"),
            Self::Identifier(name) => return write!(f, "identifier '{name}'"),
            Self::NewLine => return write!(f, "newline"),
            Self::EndOfInput => return write!(f, "end of input"),
            Self::Comment | Self::Ignored => return write!(f, "whitespace"),
            Self::If => "if",
            Self::For => "for",
            Self::Of => "of",
            Self::Len => "len",
            Self::Input => "input",
            Self::Underscore => "_",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::PipeForward => "|>",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
            Self::EqualEqual => "==",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equals => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::DotDot => "..",
            Self::Dot => ".",
            Self::Semicolon => ";",
        };
        write!(f, "'{symbol}'")
    }
}

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// The line, starting at 1.
    pub line:   usize,
    /// The column in characters, starting at 1.
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so token
/// positions can be reported as line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

impl LexerExtras {
    /// Computes the position of the byte `offset` in `source`.
    ///
    /// A newline token has already advanced `line` when it is reported, so
    /// offsets before the current line start belong to the previous line.
    fn locate(&self, source: &str, offset: usize) -> Position {
        let start_of_line = source[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line = if offset < self.line_start {
            self.line - 1
        } else {
            self.line
        };

        Position { line,
                   column: source[start_of_line..offset].chars().count() + 1 }
    }
}

/// Failure reported by a token rule; turned into a [`LexError`] with its
/// position by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexFailure {
    /// No rule matched.
    #[default]
    UnrecognizedInput,
    /// A text literal contained `\` followed by this character.
    InvalidEscape(char),
    /// An integer literal overflowed `i64`.
    IntegerTooLarge,
}

/// Converts source text into a list of positioned tokens.
///
/// Whitespace and `//` comments are dropped; newlines are kept because they
/// separate statements. The list always ends with [`Token::EndOfInput`].
///
/// # Errors
/// Returns a [`LexError`] at the first character or literal no rule accepts.
///
/// # Example
/// ```
/// use xmas::{Position, Token, tokenize};
///
/// let tokens = tokenize("x = [1..3] // range").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".into()),
///                 Token::Equals,
///                 Token::LBracket,
///                 Token::Integer(1),
///                 Token::DotDot,
///                 Token::Integer(3),
///                 Token::RBracket,
///                 Token::EndOfInput]);
///
/// let err = tokenize("a = 1\nb = 2 $ 3").unwrap_err();
/// assert_eq!(err.position(), Position { line: 2, column: 7 });
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        let position = lexer.extras.locate(source, lexer.span().start);
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(failure) => return Err(lex_error(failure, lexer.slice(), position)),
        }
    }

    let end = lexer.extras.locate(source, source.len());
    tokens.push((Token::EndOfInput, end));

    Ok(tokens)
}

/// Attaches the position and offending text to a rule failure.
fn lex_error(failure: LexFailure, slice: &str, position: Position) -> LexError {
    match failure {
        LexFailure::UnrecognizedInput => {
            LexError::UnexpectedCharacter { character: slice.chars().next().unwrap_or('\0'),
                                            position }
        },
        LexFailure::InvalidEscape(escape) => LexError::InvalidEscape { escape, position },
        LexFailure::IntegerTooLarge => LexError::IntegerTooLarge { literal: slice.to_string(),
                                                                   position },
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(i64)`: The parsed integer value if it fits.
/// - `Err(LexFailure::IntegerTooLarge)`: Otherwise.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexFailure> {
    lex.slice().parse().map_err(|_| LexFailure::IntegerTooLarge)
}

/// Parses a text literal, stripping the quotes and resolving escapes.
///
/// Supported escapes are `\"`, `\\`, `\n` and `\t`.
fn parse_text(lex: &logos::Lexer<Token>) -> Result<String, LexFailure> {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];
    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('\\') => text.push('\\'),
            Some('"') => text.push('"'),
            Some(other) => return Err(LexFailure::InvalidEscape(other)),
            None => return Err(LexFailure::UnrecognizedInput),
        }
    }

    Ok(text)
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
