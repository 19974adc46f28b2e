/// The character source the lexer reads from.
///
/// Wraps any buffered reader and hands out characters one at a time, with a
/// single character of pushback, while keeping track of line numbers for
/// error reporting.
pub mod source;
/// The lexer module turns characters into tokens.
///
/// Declares the [`lexer::Token`] type and the token stream that produces
/// tokens on demand with one token of lookahead. The token stream also
/// resynchronizes the input after an error.
pub mod lexer;
/// The variable table.
///
/// Stores named values in declaration order and rejects duplicate
/// declarations.
pub mod variables;
/// The state of one calculator session.
///
/// Ties a token stream to a variable table. Parsing, evaluation and the
/// REPL are implemented on top of it.
pub mod session;
/// Recursive-descent evaluation of expressions.
///
/// Implements the `primary`, `term` and `expression` grammar rules, computing
/// values directly while parsing. Reports division by zero and unknown
/// variables.
pub mod evaluator;
/// Statement evaluation.
///
/// Distinguishes `let` declarations from expression statements.
pub mod statement;
/// The read-eval-print loop.
///
/// Prompts, evaluates one statement at a time, prints results and recovers
/// from errors by skipping to the next `;`.
pub mod repl;
