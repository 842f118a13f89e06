use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token other than the one the grammar required.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// Position of the end of input.
        position: Position,
    },
    /// A bracket held neither a list, a range nor a valid index.
    MalformedBracket {
        /// Details about what went wrong.
        details:  String,
        /// Where the bracket opens.
        position: Position,
    },
    /// The function definition syntax was invalid.
    InvalidFunctionDefinition {
        /// Details about what went wrong.
        details:  String,
        /// Where the definition starts.
        position: Position,
    },
    /// A `.name()` call named a method that does not exist.
    UnknownMethod {
        /// The method name.
        name:     String,
        /// Where the method name starts.
        position: Position,
    },
}

impl ParseError {
    /// Returns where in the source the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::MalformedBracket { position, .. }
            | Self::InvalidFunctionDefinition { position, .. }
            | Self::UnknownMethod { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Error on {position}: Expected {expected}, found {found}.")
            },

            Self::UnexpectedEndOfInput { expected, position } => {
                write!(f, "Error on {position}: Expected {expected}, found end of input.")
            },

            Self::MalformedBracket { details, position } => {
                write!(f, "Error on {position}: Malformed bracket expression: {details}.")
            },

            Self::InvalidFunctionDefinition { details, position } => write!(f,
                                                                            "Error on {position}: Invalid function definition: {details}. Example: addOne(x) = x + 1"),

            Self::UnknownMethod { name, position } => {
                write!(f, "Error on {position}: Unknown method '{name}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
