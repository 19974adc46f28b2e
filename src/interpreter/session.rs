use std::io::BufRead;

use crate::interpreter::{lexer::TokenStream, variables::VariableTable};

/// Stores the state of one calculator session.
///
/// A session owns its token stream and its variables. The evaluator, the
/// statement layer and the REPL driver are all implemented as methods on
/// `Session`, so independent sessions never share state.
///
/// ## Usage
///
/// ```
/// use deskcalc::interpreter::{session::Session, variables::VariableTable};
///
/// let mut session = Session::new("2 + 3 * 4;".as_bytes(), VariableTable::new());
/// assert_eq!(session.statement().unwrap(), 14.0);
/// ```
pub struct Session<R> {
    pub tokens:    TokenStream<R>,
    pub variables: VariableTable,
}

impl<R: BufRead> Session<R> {
    /// Creates a session reading statements from `reader` and resolving names
    /// against `variables`.
    pub const fn new(reader: R, variables: VariableTable) -> Self {
        Self { tokens: TokenStream::new(reader),
               variables }
    }
}
