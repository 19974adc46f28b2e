use std::io::BufRead;

use crate::{
    error::{CalcResult, ParseError, RuntimeError},
    interpreter::{lexer::Token, session::Session},
};

impl<R: BufRead> Session<R> {
    /// Parses and evaluates a primary expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | "(" expression ")"
    ///              | "-" primary
    ///              | "+" primary
    ///              | NAME [ "=" expression ]
    /// ```
    /// Unary operators nest to any depth, so `---3` is `-3`. A name followed
    /// by `=` is an assignment; it evaluates to the assigned value and is
    /// right-associative, so `a = b = 3` sets both variables.
    ///
    /// # Errors
    /// - `ParseError::Syntax` if a `)` is missing or the leading token cannot
    ///   start a primary.
    /// - `ParseError::UnexpectedEndOfInput` if the input ends here.
    /// - `RuntimeError::UndefinedVariable` for an unknown name.
    pub fn primary(&mut self) -> CalcResult<f64> {
        match self.tokens.get()? {
            Token::LParen => {
                let value = self.expression()?;
                match self.tokens.get()? {
                    Token::RParen => Ok(value),
                    _ => Err(ParseError::syntax("')' expected", self.tokens.line()).into()),
                }
            },
            Token::Number(value) => Ok(value),
            Token::Minus => Ok(-self.primary()?),
            Token::Plus => self.primary(),
            Token::Name(name) => {
                let next = self.tokens.get()?;
                if next == Token::Equals {
                    let value = self.expression()?;
                    self.variables.assign(&name, value, self.tokens.line())?;
                    Ok(value)
                } else {
                    self.tokens.putback(next)?;
                    Ok(self.variables.lookup(&name, self.tokens.line())?)
                }
            },
            Token::End => {
                Err(ParseError::UnexpectedEndOfInput { line: self.tokens.line() }.into())
            },
            _ => Err(ParseError::syntax("primary expected", self.tokens.line()).into()),
        }
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative `*`, `/` and `%`. `%` is the floating-point
    /// remainder, with the sign of the dividend.
    ///
    /// The rule is: `term := primary (("*" | "/" | "%") primary)*`
    ///
    /// # Errors
    /// `RuntimeError::DivisionByZero` if the right operand of `/` or `%` is
    /// zero, plus anything [`Session::primary`] can fail with.
    pub fn term(&mut self) -> CalcResult<f64> {
        let mut left = self.primary()?;
        loop {
            match self.tokens.get()? {
                Token::Star => left *= self.primary()?,
                Token::Slash => left /= self.divisor('/')?,
                Token::Percent => left %= self.divisor('%')?,
                token => {
                    self.tokens.putback(token)?;
                    return Ok(left);
                },
            }
        }
    }

    /// Evaluates the right operand of `/` or `%`, rejecting zero.
    fn divisor(&mut self, op: char) -> CalcResult<f64> {
        let d = self.primary()?;
        if d == 0.0 {
            return Err(RuntimeError::DivisionByZero { op,
                                                      line: self.tokens.line() }.into());
        }
        Ok(d)
    }

    /// Parses a full expression: addition and subtraction of terms.
    ///
    /// This is the entry point for expression evaluation. It stops at the
    /// first token that is neither `+` nor `-` and leaves it in the token
    /// stream.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub fn expression(&mut self) -> CalcResult<f64> {
        let mut left = self.term()?;
        loop {
            match self.tokens.get()? {
                Token::Plus => left += self.term()?,
                Token::Minus => left -= self.term()?,
                token => {
                    self.tokens.putback(token)?;
                    return Ok(left);
                },
            }
        }
    }
}
