#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character that cannot start any token.
    BadToken {
        /// The offending character.
        token: char,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The tokens did not match the grammar.
    Syntax {
        /// What was expected, e.g. `')' expected`.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reached the end of input in the middle of a statement.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Shorthand for a [`ParseError::Syntax`] error.
    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::Syntax { message: message.into(),
                       line }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadToken { token, line } => {
                write!(f, "Error on line {line}: Bad token '{}'.", token.escape_debug())
            },
            Self::Syntax { message, line } => write!(f, "Error on line {line}: {message}."),
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
