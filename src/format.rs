//! Grammar and Wire Format Reference
//!
//! This module documents the configuration-text grammar read by the
//! tokenizer and the info-string wire format produced by the codec, as
//! implemented by this library.
//!
//! # Configuration Text Grammar
//!
//! The grammar is byte-oriented. Bytes at or below space are whitespace;
//! everything else is token material. There is no escaping.
//!
//! ## Tokens
//!
//! | Rule | Shape | Notes |
//! |------|-------|-------|
//! | Bare word | maximal run of bytes `> ' '` | stops early at separators in the separator-aware grammar |
//! | Quoted string | `"` ... `"` | interior copied verbatim, quotes stripped; an unterminated quote runs to end of input |
//! | Separator | one of `\n ; = { }` | one-byte token, separator-aware grammar only |
//!
//! ## Comments
//!
//! ```text
//! // to end of line
//! /* possibly
//!    spanning lines */
//! ```
//!
//! Comments never nest. An unterminated block comment swallows the rest of
//! the input. Comment syntax inside a quoted string is ordinary text.
//!
//! ## Line counting
//!
//! The lexer counts every `\n` it consumes, including newlines inside
//! block comments and quoted strings. A `//` comment does not itself cross
//! a line; the newline that ends it is counted as whitespace before the
//! next token.
//!
//! ## Token capacity
//!
//! A token carries at most [`MAX_TOKEN_CHARS`](crate::MAX_TOKEN_CHARS)` - 1`
//! bytes of content. Longer input is consumed but the excess is discarded.
//!
//! # Info-String Wire Format
//!
//! ```text
//! \key1\value1\key2\value2
//! ```
//!
//! - ASCII text; the leading `\` is optional on input, canonical on output.
//! - Keys compare case-insensitively (ASCII fold).
//! - Keys and values must not contain `\`, `"`, or `;`.
//! - Total length stays strictly below the tier ceiling:
//!   [`MAX_INFO_STRING`](crate::MAX_INFO_STRING) bytes for the standard
//!   tier, [`BIG_INFO_STRING`](crate::BIG_INFO_STRING) for the big tier.
//!
//! Both ceilings are wire-level contracts. A component encoding at the big
//! tier must not hand the result to one decoding at the standard tier.
//!
//! ## Malformed input
//!
//! Lookup and removal only consider complete `\key\value` pairs; a
//! trailing key with no value separator is ignored. Pair iteration yields
//! a trailing dangling key with an empty value and stops at an empty key.

// This module contains only documentation; no implementation code
