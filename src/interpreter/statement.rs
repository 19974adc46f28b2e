use std::io::BufRead;

use crate::{
    error::{CalcResult, ParseError},
    interpreter::{lexer::Token, session::Session},
};

impl<R: BufRead> Session<R> {
    /// Parses a declaration once its `let` keyword has been read.
    ///
    /// A declaration has the form `let <name> = <expression>`.
    ///
    /// # Returns
    /// The value the new variable was initialized with.
    ///
    /// # Errors
    /// - `ParseError::Syntax` if the name or the `=` is missing.
    /// - `RuntimeError::DuplicateDeclaration` if the name already exists.
    pub fn declaration(&mut self) -> CalcResult<f64> {
        let Token::Name(name) = self.tokens.get()? else {
            return Err(ParseError::syntax("name expected in declaration", self.tokens.line()).into());
        };

        if self.tokens.get()? != Token::Equals {
            return Err(ParseError::syntax(format!("'=' missing in declaration of {name}"),
                                          self.tokens.line()).into());
        }

        let value = self.expression()?;
        Ok(self.variables.define(&name, value, self.tokens.line())?)
    }

    /// Parses and evaluates a single statement: a declaration or a bare
    /// expression.
    pub fn statement(&mut self) -> CalcResult<f64> {
        match self.tokens.get()? {
            Token::Let => self.declaration(),
            token => {
                self.tokens.putback(token)?;
                self.expression()
            },
        }
    }
}
