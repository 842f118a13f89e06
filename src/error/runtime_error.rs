#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable or function that was never bound.
    UndefinedName {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator or form received a value of the wrong kind.
    TypeMismatch {
        /// Details about the operator and operands involved.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to access a position outside a list, text or grid.
    IndexOutOfRange {
        /// The index that was actually requested.
        index:  i64,
        /// Length of the indexed value.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `~` was applied to text that is not a decimal integer.
    ConversionFailure {
        /// The text that failed to convert.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a call.
    ArityMismatch {
        /// Name of the function or form being called.
        name:     String,
        /// The accepted argument counts, e.g. `2 or 3`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Integer arithmetic overflowed 64 bits.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedName { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::IndexOutOfRange { line, .. }
            | Self::DivisionByZero { line }
            | Self::ConversionFailure { line, .. }
            | Self::ArityMismatch { line, .. }
            | Self::Overflow { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedName { name, line } => {
                write!(f, "Error on line {line}: Undefined name '{name}'.")
            },
            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },
            Self::IndexOutOfRange { index, length, line } => write!(f,
                                                                    "Error on line {line}: Index {index} is out of range for length {length}."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ConversionFailure { text, line } => write!(f,
                                                             "Error on line {line}: Cannot convert {text:?} to an integer."),
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: '{name}' expects {expected} arguments, but got {found}."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
