/// Parsing errors.
///
/// Defines all error types that can occur while reading tokens and matching
/// them against the grammar. Parse errors include unrecognized characters,
/// missing parentheses or `=` and running out of input mid-statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing a value, such
/// as division by zero or touching a variable that was never declared.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type used throughout the calculator.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug)]
/// Every failure a statement can end with.
///
/// `Parse` and `Runtime` are caused by user input. `Usage` is an internal
/// contract violation (pushing a token back into an occupied buffer) and
/// should never be seen. `Io` means the character source or an output sink
/// failed and the session cannot continue.
pub enum CalcError {
    /// The input did not match the grammar.
    Parse(ParseError),
    /// The input parsed but could not be evaluated.
    Runtime(RuntimeError),
    /// An internal contract was violated.
    Usage(&'static str),
    /// Reading input or writing output failed.
    Io(std::io::Error),
}

impl CalcError {
    /// Returns `true` if the driver can report this error and carry on with
    /// the next statement.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Usage(message) => write!(f, "internal error: {message}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Usage(_) => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<std::io::Error> for CalcError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
