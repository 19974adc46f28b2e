use std::io::BufRead;

use logos::Logos;

use crate::{
    error::{CalcError, CalcResult, ParseError},
    interpreter::source::Input,
};

/// Represents a lexical token in the source input.
///
/// Every punctuation token stands for exactly one character, see
/// [`Token::symbol`]. Tokens are matched against the remainder of the
/// current input line, one at a time, by [`TokenStream::get`].
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// `let`
    #[token("let")]
    Let,
    /// Variable names such as `x` or `rate2`. A lowercase `q` always lexes
    /// as [`Token::Quit`], so names never start with it.
    #[regex(r"[a-pr-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `;`
    #[token(";")]
    Print,
    /// `q`
    #[token("q")]
    Quit,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// End of input. Never matched by the lexer itself; produced by
    /// [`TokenStream::get`] when the character source runs dry.
    End,
}

impl Token {
    /// The character a punctuation token stands for.
    ///
    /// # Returns
    /// `None` for numbers, names, `let` and end of input.
    #[must_use]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Print => Some(';'),
            Self::Quit => Some('q'),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Percent => Some('%'),
            Self::Equals => Some('='),
            Self::Number(_) | Self::Let | Self::Name(_) | Self::End => None,
        }
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which turns the match into a
///   lexer error.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Produces [`Token`]s from a character source, with one token of pushback.
///
/// The grammar never needs more than one token of lookahead, so the buffer
/// is a single `Option<Token>`. Putting a second token back is a contract
/// violation and fails with [`CalcError::Usage`].
pub struct TokenStream<R> {
    input:  Input<R>,
    buffer: Option<Token>,
}

impl<R: BufRead> TokenStream<R> {
    /// Creates a token stream reading from `reader`.
    pub const fn new(reader: R) -> Self {
        Self { input:  Input::new(reader),
               buffer: None, }
    }

    /// Returns the next token.
    ///
    /// A buffered token is handed out first. Otherwise whitespace is skipped
    /// and the longest token starting at the next character is read.
    ///
    /// # Errors
    /// - `ParseError::BadToken` if the next character starts no token. The
    ///   character is consumed.
    /// - `CalcError::Io` if the character source fails.
    pub fn get(&mut self) -> CalcResult<Token> {
        if let Some(token) = self.buffer.take() {
            return Ok(token);
        }

        let Some(ch) = self.input.read_skipping_space()? else {
            return Ok(Token::End);
        };
        self.input.putback(ch);

        let (token, consumed) = {
            let mut lexer = Token::lexer(self.input.rest());
            let token = lexer.next();
            (token, lexer.span().end)
        };

        if let Some(Ok(token)) = token {
            self.input.advance(consumed);
            Ok(token)
        } else {
            self.input.advance(ch.len_utf8());
            Err(ParseError::BadToken { token: ch,
                                       line:  self.input.line(), }.into())
        }
    }

    /// Puts `token` back so that the next [`TokenStream::get`] returns it.
    ///
    /// # Errors
    /// `CalcError::Usage` if a token is already buffered.
    pub fn putback(&mut self, token: Token) -> CalcResult<()> {
        if self.buffer.is_some() {
            return Err(CalcError::Usage("putback() into a full buffer"));
        }
        self.buffer = Some(token);
        Ok(())
    }

    /// Discards input up to and including the next `marker` character.
    ///
    /// If the buffered token is `marker` itself, only the buffer is cleared.
    /// Otherwise any buffered token is dropped and raw characters are read
    /// until `marker` is consumed or the input ends.
    pub fn skip_to(&mut self, marker: char) -> CalcResult<()> {
        if let Some(token) = self.buffer.take()
           && token.symbol() == Some(marker)
        {
            return Ok(());
        }

        while let Some(ch) = self.input.read_raw()? {
            if ch == marker {
                break;
            }
        }
        Ok(())
    }

    /// The line number of the most recently read character.
    pub const fn line(&self) -> usize {
        self.input.line()
    }

    /// Returns `true` once every character of the input has been consumed
    /// and no token other than [`Token::End`] is buffered.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.buffer, None | Some(Token::End)) && self.input.is_exhausted()
    }
}
