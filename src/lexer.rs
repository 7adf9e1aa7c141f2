//! Tokenizer for configuration-style text.
//!
//! This module provides the [`Lexer`], which scans a borrowed text buffer
//! one token at a time while tracking the current source line. The grammar
//! is deliberately small:
//!
//! - whitespace separates tokens and is never part of one
//! - `// ...` line comments and `/* ... */` block comments are skipped
//! - `"quoted strings"` form a single token, copied verbatim
//! - anything else is a bare word
//!
//! A second, separator-aware grammar additionally treats `\n ; = { }` as
//! word terminators that can be emitted as standalone one-byte tokens; see
//! [`Lexer::next_token_sep`].
//!
//! ## Usage
//!
//! ```rust
//! use infolex::Lexer;
//!
//! let mut lexer = Lexer::new("// header\nname \"Jay Z\" 42", "users.cfg");
//!
//! assert_eq!(lexer.token(), "name");
//! assert_eq!(lexer.token(), "Jay Z");
//! assert_eq!(lexer.token(), "42");
//! assert_eq!(lexer.current_line(), 2);
//! assert!(lexer.token().is_empty());
//! assert!(lexer.is_exhausted());
//! ```
//!
//! ## Failure behavior
//!
//! Malformed input degrades: an unterminated quote yields everything up to
//! end of input, an unterminated block comment swallows the rest of the
//! buffer, and end of input simply produces empty tokens. The only fallible
//! operation is [`Lexer::match_token`], which returns
//! [`Error::GrammarMismatch`] when the next token is not the expected
//! literal.

use crate::error::{Error, Result};
use crate::tables;
use std::fmt;

/// Maximum token capacity in bytes, terminator included.
///
/// A token never carries more than `MAX_TOKEN_CHARS - 1` content bytes;
/// excess input is discarded while the cursor still advances past it.
pub const MAX_TOKEN_CHARS: usize = 1024;

/// One lexical unit plus the line it started on.
///
/// Produced by [`Lexer::next_token`] and friends. An empty token signals
/// either "nothing before the next line break" or end of input; use
/// [`Lexer::is_exhausted`] to tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    line: u32,
}

impl Token {
    fn new(text: String, line: u32) -> Self {
        Token { text, line }
    }

    fn empty(line: u32) -> Self {
        Token {
            text: String::new(),
            line,
        }
    }

    /// The token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The line the token started on.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns `true` for the empty token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// A parse session over one text buffer.
///
/// The lexer owns both the cursor and the session state (origin label, line
/// counters), so concurrent parses over different buffers cannot interfere
/// with each other.
///
/// # Examples
///
/// ```rust
/// use infolex::Lexer;
///
/// let mut lexer = Lexer::new("alpha beta", "inline");
/// assert_eq!(lexer.token(), "alpha");
/// assert_eq!(lexer.token(), "beta");
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    origin: String,
    line: u32,
    token_line: u32,
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Begins a parse session over `input`, tagged with an origin label
    /// (typically a file or slot name) used in grammar-mismatch errors.
    pub fn new(input: &'a str, origin: impl Into<String>) -> Self {
        Lexer {
            input,
            pos: 0,
            origin: origin.into(),
            line: 1,
            token_line: 0,
            exhausted: false,
        }
    }

    /// The origin label this session was created with.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The current source line for diagnostics.
    ///
    /// Reports the line the last token started on if one has been read,
    /// otherwise the line the cursor sits on.
    #[must_use]
    pub fn current_line(&self) -> u32 {
        if self.token_line != 0 {
            self.token_line
        } else {
            self.line
        }
    }

    /// Returns `true` once the cursor has run off the end of the input.
    ///
    /// Distinguishes "empty token at end of input" from "empty token
    /// because a line break intervened".
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The unconsumed remainder of the input.
    #[must_use]
    pub fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Reads the next token, allowing line breaks. The common entry point.
    pub fn token(&mut self) -> Token {
        self.next_token(true)
    }

    /// Reads the next token in the plain grammar.
    ///
    /// With `allow_line_breaks` false, an empty token is returned if a line
    /// break separates the cursor from the next token; the whitespace up to
    /// that token stays consumed.
    pub fn next_token(&mut self, allow_line_breaks: bool) -> Token {
        self.parse_token(allow_line_breaks, false)
    }

    /// Reads the next token in the separator-aware grammar.
    ///
    /// Separator bytes (`\n ; = { }`) terminate bare words, and a separator
    /// at the cursor is emitted alone as a one-byte token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infolex::Lexer;
    ///
    /// let mut lexer = Lexer::new("set rate=25000;", "console");
    /// assert_eq!(lexer.next_token_sep(true), "set");
    /// assert_eq!(lexer.next_token_sep(true), "rate");
    /// assert_eq!(lexer.next_token_sep(true), "=");
    /// assert_eq!(lexer.next_token_sep(true), "25000");
    /// assert_eq!(lexer.next_token_sep(true), ";");
    /// ```
    pub fn next_token_sep(&mut self, allow_line_breaks: bool) -> Token {
        self.parse_token(allow_line_breaks, true)
    }

    /// Reads the next token and requires it to equal `expected` byte for
    /// byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GrammarMismatch`] carrying the origin label, the
    /// current line, and both strings.
    pub fn match_token(&mut self, expected: &str) -> Result<()> {
        let token = self.token();
        if token != expected {
            return Err(Error::grammar_mismatch(
                &self.origin,
                self.current_line(),
                expected,
                token.as_str(),
            ));
        }
        Ok(())
    }

    /// Skips a `{ ... }` section, including nested braces.
    ///
    /// The next token is expected to be the opening brace. Unbalanced input
    /// stops silently at end of input; callers that need stricter checking
    /// can inspect [`Lexer::is_exhausted`] afterwards.
    pub fn skip_braced_section(&mut self) {
        let mut depth: i32 = 0;
        loop {
            let token = self.next_token(true);
            if token.text.len() == 1 {
                match token.text.as_bytes()[0] {
                    b'{' => depth += 1,
                    b'}' => depth -= 1,
                    _ => {}
                }
            }
            if depth == 0 || self.exhausted {
                break;
            }
        }
    }

    /// Advances the cursor just past the next newline. No-op at end of
    /// input.
    pub fn skip_rest_of_line(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let c = bytes[self.pos];
            self.pos += 1;
            if c == b'\n' {
                self.line += 1;
                break;
            }
        }
    }

    /// Advances the cursor just past the next separator byte, counting any
    /// newline crossed. No-op at end of input.
    pub fn skip_to_separator(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let c = bytes[self.pos];
            self.pos += 1;
            if tables::is_separator(c) {
                if c == b'\n' {
                    self.line += 1;
                }
                break;
            }
        }
    }

    /// Reads a `( f f f ... )` row of `x` floats.
    ///
    /// Tokens that fail to parse as a number read as `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GrammarMismatch`] if either parenthesis is missing.
    pub fn parse_matrix1(&mut self, x: usize) -> Result<Vec<f32>> {
        self.match_token("(")?;
        let mut m = Vec::with_capacity(x);
        for _ in 0..x {
            let token = self.token();
            m.push(token.as_str().parse().unwrap_or(0.0));
        }
        self.match_token(")")?;
        Ok(m)
    }

    /// Reads a parenthesized matrix of `y` rows of `x` floats, flattened
    /// row-major.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GrammarMismatch`] if any parenthesis is missing.
    pub fn parse_matrix2(&mut self, y: usize, x: usize) -> Result<Vec<f32>> {
        self.match_token("(")?;
        let mut m = Vec::with_capacity(y * x);
        for _ in 0..y {
            m.extend(self.parse_matrix1(x)?);
        }
        self.match_token(")")?;
        Ok(m)
    }

    /// Reads a parenthesized matrix of `z` planes of `y` rows of `x`
    /// floats, flattened.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GrammarMismatch`] if any parenthesis is missing.
    pub fn parse_matrix3(&mut self, z: usize, y: usize, x: usize) -> Result<Vec<f32>> {
        self.match_token("(")?;
        let mut m = Vec::with_capacity(z * y * x);
        for _ in 0..z {
            m.extend(self.parse_matrix2(y, x)?);
        }
        self.match_token(")")?;
        Ok(m)
    }

    fn parse_token(&mut self, allow_line_breaks: bool, separators: bool) -> Token {
        self.token_line = 0;
        let bytes = self.input.as_bytes();

        if self.exhausted {
            return Token::empty(self.line);
        }

        // Newline crossings accumulate across whitespace and comment runs.
        let mut crossed_newline = false;
        loop {
            while self.pos < bytes.len() && bytes[self.pos] <= b' ' {
                if bytes[self.pos] == b'\n' {
                    self.line += 1;
                    crossed_newline = true;
                }
                self.pos += 1;
            }
            if self.pos >= bytes.len() {
                self.exhausted = true;
                return Token::empty(self.line);
            }
            if crossed_newline && !allow_line_breaks {
                return Token::empty(self.line);
            }

            let c = bytes[self.pos];
            if c == b'/' && self.pos + 1 < bytes.len() && bytes[self.pos + 1] == b'/' {
                // line comment: stop before the newline so it counts above
                self.pos += 2;
                while self.pos < bytes.len() && bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else if c == b'/' && self.pos + 1 < bytes.len() && bytes[self.pos + 1] == b'*' {
                self.pos += 2;
                while self.pos < bytes.len()
                    && !(bytes[self.pos] == b'*'
                        && self.pos + 1 < bytes.len()
                        && bytes[self.pos + 1] == b'/')
                {
                    if bytes[self.pos] == b'\n' {
                        self.line += 1;
                    }
                    self.pos += 1;
                }
                if self.pos < bytes.len() {
                    self.pos += 2;
                }
            } else {
                break;
            }
        }

        self.token_line = self.line;
        let c = bytes[self.pos];

        // quoted token: verbatim, terminator optional
        if c == b'"' {
            self.pos += 1;
            let start = self.pos;
            while self.pos < bytes.len() && bytes[self.pos] != b'"' {
                if bytes[self.pos] == b'\n' {
                    self.line += 1;
                }
                self.pos += 1;
            }
            let end = self.pos;
            if self.pos < bytes.len() {
                self.pos += 1;
            }
            return self.make_token(start, end);
        }

        // a separator at the cursor is its own one-byte token
        if separators && tables::is_separator(c) {
            let start = self.pos;
            self.pos += 1;
            return self.make_token(start, self.pos);
        }

        // bare word
        let start = self.pos;
        loop {
            self.pos += 1;
            if self.pos >= bytes.len() {
                break;
            }
            let c = bytes[self.pos];
            if c <= b' ' || (separators && tables::is_separator(c)) {
                break;
            }
        }
        self.make_token(start, self.pos)
    }

    fn make_token(&self, start: usize, end: usize) -> Token {
        let mut end = end.min(start + MAX_TOKEN_CHARS - 1);
        while !self.input.is_char_boundary(end) {
            end -= 1;
        }
        Token::new(self.input[start..end].to_string(), self.token_line)
    }
}
