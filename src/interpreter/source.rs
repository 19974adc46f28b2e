use std::io::{self, BufRead};

/// A line-buffered character source over any [`BufRead`].
///
/// The source hands out one character at a time and can take back the
/// character it handed out last. It keeps the current line in memory so
/// that the lexer can match a whole token against the remainder of the line
/// (see [`Input::rest`] and [`Input::advance`]).
///
/// Lines are read lazily: nothing is pulled from the reader until a
/// character is requested and the buffered line is exhausted. This keeps an
/// interactive session from blocking on the next line before the current
/// statement has been answered.
pub struct Input<R> {
    reader: R,
    /// Raw bytes of the last line read, before decoding.
    bytes:  Vec<u8>,
    /// The line currently being consumed, including its terminator. Bytes
    /// that are not valid UTF-8 are replaced with `U+FFFD`, which the lexer
    /// reports as a bad token.
    line:   String,
    /// Byte offset of the next unread character in `line`.
    pos:    usize,
    /// 1-based number of the buffered line, 0 before the first read.
    lineno: usize,
    eof:    bool,
}

impl<R: BufRead> Input<R> {
    /// Wraps `reader`. Nothing is read until the first character is needed.
    pub const fn new(reader: R) -> Self {
        Self { reader,
               bytes: Vec::new(),
               line: String::new(),
               pos: 0,
               lineno: 0,
               eof: false }
    }

    /// Makes sure at least one unread character is buffered, pulling the next
    /// line from the reader if needed.
    ///
    /// # Returns
    /// `false` once the reader is exhausted.
    fn fill(&mut self) -> io::Result<bool> {
        while self.pos >= self.line.len() {
            if self.eof {
                return Ok(false);
            }
            self.bytes.clear();
            self.pos = 0;
            if self.reader.read_until(b'\n', &mut self.bytes)? == 0 {
                self.line.clear();
                self.eof = true;
                return Ok(false);
            }
            self.line = String::from_utf8_lossy(&self.bytes).into_owned();
            self.lineno += 1;
        }
        Ok(true)
    }

    /// Reads the next character, whitespace included.
    ///
    /// # Returns
    /// `None` at end of input.
    pub fn read_raw(&mut self) -> io::Result<Option<char>> {
        if !self.fill()? {
            return Ok(None);
        }
        let ch = self.line[self.pos..].chars().next();
        if let Some(ch) = ch {
            self.pos += ch.len_utf8();
        }
        Ok(ch)
    }

    /// Reads the next character that is not whitespace. Line breaks count as
    /// whitespace, so a statement may span several lines.
    pub fn read_skipping_space(&mut self) -> io::Result<Option<char>> {
        while let Some(ch) = self.read_raw()? {
            if !ch.is_whitespace() {
                return Ok(Some(ch));
            }
        }
        Ok(None)
    }

    /// Returns `ch` to the source so the next read sees it again.
    ///
    /// Only the character returned by the most recent read may be put back.
    /// The buffered line is kept until the next read past its end, so this
    /// never has to reach into a previous line.
    pub fn putback(&mut self, ch: char) {
        debug_assert!(self.line[..self.pos].ends_with(ch));
        self.pos = self.pos.saturating_sub(ch.len_utf8());
    }

    /// The unread remainder of the current line.
    pub fn rest(&self) -> &str {
        &self.line[self.pos..]
    }

    /// Marks `bytes` bytes of [`Input::rest`] as consumed.
    pub fn advance(&mut self, bytes: usize) {
        self.pos = (self.pos + bytes).min(self.line.len());
    }

    /// The line number of the character most recently read.
    pub const fn line(&self) -> usize {
        self.lineno
    }

    /// Returns `true` once the reader has reported end of input and every
    /// buffered character has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.eof && self.pos >= self.line.len()
    }
}
