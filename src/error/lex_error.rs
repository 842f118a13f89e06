use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character matched no token rule.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character starts.
        position:  Position,
    },
    /// A text literal used an escape other than `\"`, `\\`, `\n` or `\t`.
    InvalidEscape {
        /// The character following the backslash.
        escape:   char,
        /// Where the text literal starts.
        position: Position,
    },
    /// An integer literal does not fit into 64 bits.
    IntegerTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Returns where in the source the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::InvalidEscape { position, .. }
            | Self::IntegerTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error on {position}: Unexpected character {character:?}.")
            },
            Self::InvalidEscape { escape, position } => {
                write!(f, "Error on {position}: Invalid escape sequence '\\{escape}' in text.")
            },
            Self::IntegerTooLarge { literal, position } => {
                write!(f, "Error on {position}: Integer literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
