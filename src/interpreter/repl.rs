use std::io::{BufRead, Write};

use crate::{
    error::{CalcError, CalcResult},
    interpreter::{lexer::Token, session::Session, variables::VariableTable},
};

/// Printed before each statement is read.
pub const PROMPT: &str = "> ";
/// Printed before each result.
pub const RESULT: &str = "= ";

/// What the driver does after reading the start of a statement.
enum Step {
    Evaluate,
    Stop,
}

impl<R: BufRead> Session<R> {
    /// Runs the read-eval-print loop until `q` or end of input.
    ///
    /// Each round prints the prompt (if `prompt` is set), skips any number of
    /// `;`, then evaluates one statement and prints `= <value>` to `out`. A
    /// failed statement is reported on `diagnostics` and the rest of it is
    /// discarded up to the next `;`. The loop only stops on a recoverable
    /// error if the input has run out.
    ///
    /// # Errors
    /// `CalcError::Io` if reading input or writing to either sink fails.
    pub fn run<W: Write, E: Write>(&mut self,
                                   out: &mut W,
                                   diagnostics: &mut E,
                                   prompt: bool)
                                   -> CalcResult<()> {
        while !self.tokens.is_exhausted() {
            if prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }

            let outcome = match self.read_statement() {
                Ok(Step::Evaluate) => self.statement().map(Some),
                Ok(Step::Stop) => Ok(None),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(Some(value)) => writeln!(out, "{RESULT}{value}")?,
                Ok(None) => break,
                Err(e) if e.is_recoverable() => {
                    writeln!(diagnostics, "{e}")?;
                    self.tokens.skip_to(';')?;
                },
                Err(e) => return Err(e),
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Skips empty statements and decides whether there is anything left to
    /// evaluate.
    fn read_statement(&mut self) -> CalcResult<Step> {
        let mut token = self.tokens.get()?;
        while token == Token::Print {
            token = self.tokens.get()?;
        }

        match token {
            Token::Quit | Token::End => Ok(Step::Stop),
            token => {
                self.tokens.putback(token)?;
                Ok(Step::Evaluate)
            },
        }
    }
}

/// Evaluates every statement in `source` and collects the results.
///
/// This is a non-interactive convenience around [`Session::run`]: no prompts
/// are printed and the first failing statement aborts the evaluation.
///
/// # Errors
/// The error of the first statement that fails.
///
/// # Examples
/// ```
/// use deskcalc::interpreter::{repl::evaluate_all, variables::VariableTable};
///
/// let results = evaluate_all("let x = 2; x * 21;", VariableTable::new()).unwrap();
/// assert_eq!(results, vec![2.0, 42.0]);
/// ```
pub fn evaluate_all(source: &str,
                    variables: VariableTable)
                    -> Result<Vec<f64>, CalcError> {
    let mut session = Session::new(source.as_bytes(), variables);
    let mut results = Vec::new();

    while let Step::Evaluate = session.read_statement()? {
        results.push(session.statement()?);
    }

    Ok(results)
}
