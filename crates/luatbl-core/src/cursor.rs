//! Scan position over the input text.
//!
//! The cursor borrows the input string and tracks a byte offset into it; it
//! never copies the buffer. Lexemes and long-bracket bodies are returned as
//! slices of the original input. Quoted strings are the one exception: escape
//! sequences are decoded while scanning, so they produce owned strings.

use crate::error::{ParseError, Result};

pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Cursor { text, pos: 0 }
    }

    /// The unread remainder of the input.
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Current character, or `None` at end of input. Never advances.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Move past a character already obtained from `peek`.
    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Advance one character. Advancing past the end is a parser bug, not a
    /// property of the input.
    pub fn advance(&mut self) -> Result<()> {
        match self.peek() {
            Some(c) => {
                self.bump(c);
                Ok(())
            }
            None => Err(ParseError::OutOfBounds),
        }
    }

    pub fn advance_by(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.advance()?;
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => self.bump(c),
                _ => break,
            }
        }
    }

    /// Skip whitespace and comments. A comment starts at `--`; if a
    /// long-bracket opener follows immediately, the comment runs to the
    /// matching closer of the same level, otherwise to end-of-line.
    pub fn skip_insignificant(&mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            if !self.rest().starts_with("--") {
                return Ok(());
            }
            self.advance_by(2)?;
            if self.try_read_long_bracketed_string()?.is_some() {
                continue;
            }
            while let Some(c) = self.peek() {
                self.bump(c);
                if c == '\n' {
                    break;
                }
            }
        }
    }

    /// Maximal run of non-whitespace characters from the current position.
    /// Used as fallback token text in error messages; empty at end of input.
    pub fn read_raw_lexeme(&mut self) -> &'a str {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(c) if !c.is_whitespace() => self.bump(c),
                _ => break,
            }
        }
        &self.text[start..self.pos]
    }

    /// Maximal run of characters that are not whitespace, not a comment
    /// start, and not in `stop`. The stop character itself is not consumed.
    pub fn read_delimited_lexeme(&mut self, stop: &[char]) -> Result<&'a str> {
        let start = self.pos;
        loop {
            let Some(c) = self.peek() else {
                return Err(ParseError::UnexpectedEnd);
            };
            if c.is_whitespace() || stop.contains(&c) || self.rest().starts_with("--") {
                break;
            }
            self.bump(c);
        }
        Ok(&self.text[start..self.pos])
    }

    /// Read a `'` or `"` delimited string, decoding escapes as it scans.
    /// The current character must be the opening quote.
    pub fn read_quoted_string(&mut self) -> Result<String> {
        let quote = self.peek().ok_or(ParseError::UnexpectedEnd)?;
        self.bump(quote);
        let mut out = String::new();
        loop {
            let c = self.peek().ok_or(ParseError::UnterminatedString)?;
            self.bump(c);
            if c == quote {
                return Ok(out);
            }
            if c != '\\' {
                out.push(c);
                continue;
            }
            let esc = self.peek().ok_or(ParseError::UnterminatedString)?;
            self.bump(esc);
            match esc {
                'a' => out.push('\u{7}'),
                'b' => out.push('\u{8}'),
                'f' => out.push('\u{c}'),
                'n' | '\n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'v' => out.push('\u{b}'),
                // `\z` swallows all following whitespace, newlines included
                'z' => loop {
                    match self.peek() {
                        Some(w) if w.is_whitespace() => self.bump(w),
                        _ => break,
                    }
                },
                'x' => {
                    let hi = self.read_hex_digit()?;
                    let lo = self.read_hex_digit()?;
                    out.push(char::from((hi * 16 + lo) as u8));
                }
                d if d.is_ascii_digit() => {
                    // one to three decimal digits, greedy
                    let mut code = d.to_digit(10).unwrap_or(0);
                    let mut count = 1;
                    while count < 3 {
                        match self.peek() {
                            Some(n) if n.is_ascii_digit() => {
                                code = code * 10 + n.to_digit(10).unwrap_or(0);
                                self.bump(n);
                                count += 1;
                            }
                            _ => break,
                        }
                    }
                    match char::from_u32(code) {
                        Some(ch) => out.push(ch),
                        None => return Err(ParseError::InvalidEscape(format!("\\{code}"))),
                    }
                }
                other => out.push(other),
            }
        }
    }

    fn read_hex_digit(&mut self) -> Result<u32> {
        let c = self
            .peek()
            .ok_or_else(|| ParseError::InvalidEscape("\\x".to_string()))?;
        let d = c
            .to_digit(16)
            .ok_or_else(|| ParseError::InvalidEscape(format!("\\x{c}")))?;
        self.bump(c);
        Ok(d)
    }

    /// Attempt `[` `=`* `[` ... `]` `=`* `]` with equal `=`-counts. If the
    /// opening form doesn't match, the position is restored and `None` is
    /// returned so callers can fall back to ordinary delimiter handling.
    /// The enclosed text is returned raw; long strings decode no escapes.
    pub fn try_read_long_bracketed_string(&mut self) -> Result<Option<&'a str>> {
        let saved = self.pos;
        if self.peek() != Some('[') {
            return Ok(None);
        }
        self.bump('[');
        let mut level = 0usize;
        loop {
            match self.peek() {
                Some('=') => {
                    self.bump('=');
                    level += 1;
                }
                Some('[') => {
                    self.bump('[');
                    break;
                }
                _ => {
                    self.pos = saved;
                    return Ok(None);
                }
            }
        }
        let body_start = self.pos;
        loop {
            match self.peek() {
                None => return Err(ParseError::UnterminatedLongString),
                Some(']') => {
                    let close_start = self.pos;
                    self.bump(']');
                    let mut close_level = 0usize;
                    while self.peek() == Some('=') {
                        self.bump('=');
                        close_level += 1;
                    }
                    if close_level == level && self.peek() == Some(']') {
                        self.bump(']');
                        return Ok(Some(&self.text[body_start..close_start]));
                    }
                    // not our closer; rescan from just past the ']'
                    self.pos = close_start;
                    self.bump(']');
                }
                Some(c) => self.bump(c),
            }
        }
    }
}
