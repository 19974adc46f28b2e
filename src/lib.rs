//! # deskcalc
//!
//! deskcalc is an interactive desk calculator written in Rust.
//! It reads arithmetic expressions and variable declarations from a
//! character stream, evaluates them with a recursive-descent evaluator and
//! prints the results, recovering from malformed input without ending the
//! session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{config::Config, error::CalcError, interpreter::session::Session};

/// Session configuration.
///
/// Holds the settings that can be changed from the command line: whether
/// prompts are printed and which extra variables exist at startup.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing
/// or evaluating a statement, and the I/O failures that end a session. Every
/// user-facing error carries the line it was detected on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Tells recoverable errors apart from fatal ones.
pub mod error;
/// Orchestrates the whole evaluation pipeline.
///
/// This module ties together the character source, the lexer, the variable
/// table, the evaluator and the REPL driver.
///
/// # Responsibilities
/// - Turns characters into tokens with one token of lookahead.
/// - Evaluates statements while parsing them.
/// - Drives the interactive loop and its error recovery.
pub mod interpreter;

/// Runs a complete calculator session.
///
/// Declares `pi`, `e` and the configured definitions, then reads statements
/// from `input` until `q` or end of input. Results go to `out`, error
/// messages go to `diagnostics`.
///
/// # Errors
/// Returns an error if a startup definition is rejected or if reading input
/// or writing output fails. Errors in statements are reported on
/// `diagnostics` and do not end the session.
///
/// # Examples
/// ```
/// use deskcalc::{config::Config, run};
///
/// let config = Config { prompt: false, ..Config::default() };
/// let mut out = Vec::new();
/// let mut diagnostics = Vec::new();
///
/// run("let r = 2; pi * r * r;".as_bytes(), &mut out, &mut diagnostics, &config).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "= 2\n= 12.566370614\n");
/// assert!(diagnostics.is_empty());
/// ```
pub fn run<R, W, E>(input: R,
                    out: &mut W,
                    diagnostics: &mut E,
                    config: &Config)
                    -> Result<(), CalcError>
    where R: BufRead,
          W: Write,
          E: Write
{
    let variables = config.variables()?;
    let mut session = Session::new(input, variables);
    session.run(out, diagnostics, config.prompt)
}
