//! Error types for tokenizing and info-string editing.
//!
//! The original severities map onto Rust results as follows:
//!
//! - **Recoverable-empty**: malformed or absent tokens/values produce an
//!   empty token or `None`; no error value is involved.
//! - **Warning**: invalid key/value content and oversize appends fail the
//!   call with [`Error::InvalidKey`], [`Error::InvalidValue`], or
//!   [`Error::Overflow`]; the buffer stays usable.
//! - **Fatal**: a grammar mismatch from `match_token`, or an info string
//!   already over its ceiling on entry; the caller decides whether to
//!   abort or recover.
//!
//! ## Examples
//!
//! ```rust
//! use infolex::{Lexer, Error};
//!
//! let mut lexer = Lexer::new("wrong", "test.cfg");
//! match lexer.match_token("expected") {
//!     Err(Error::GrammarMismatch { line, .. }) => assert_eq!(line, 1),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// All errors produced by the lexer and the info-string codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token did not match the literal the grammar requires.
    #[error("{origin}, line {line}: expected '{expected}', found '{found}'")]
    GrammarMismatch {
        origin: String,
        line: u32,
        expected: String,
        found: String,
    },

    /// The info string was already at or over its size ceiling on entry.
    #[error("oversize info string: {len} bytes, limit {limit}")]
    Oversize { len: usize, limit: usize },

    /// The key is empty or contains a byte illegal in info strings.
    #[error("invalid info key: '{key}'")]
    InvalidKey { key: String },

    /// The value contains a byte illegal in info strings.
    #[error("invalid info value: '{value}'")]
    InvalidValue { value: String },

    /// Appending the pair would reach or exceed the size ceiling.
    #[error("info string length exceeded: {needed} bytes needed, limit {limit}")]
    Overflow { needed: usize, limit: usize },
}

impl Error {
    /// Creates a grammar-mismatch error tagged with the parse origin and line.
    pub fn grammar_mismatch(origin: &str, line: u32, expected: &str, found: &str) -> Self {
        Error::GrammarMismatch {
            origin: origin.to_string(),
            line,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an oversize-on-entry error.
    pub fn oversize(len: usize, limit: usize) -> Self {
        Error::Oversize { len, limit }
    }

    /// Creates an invalid-key error.
    pub fn invalid_key(key: &str) -> Self {
        Error::InvalidKey {
            key: key.to_string(),
        }
    }

    /// Creates an invalid-value error.
    pub fn invalid_value(value: &str) -> Self {
        Error::InvalidValue {
            value: value.to_string(),
        }
    }

    /// Creates an append-overflow error.
    pub fn overflow(needed: usize, limit: usize) -> Self {
        Error::Overflow { needed, limit }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
