//! Info-string codec.
//!
//! An info string packs key/value pairs into one compact ASCII buffer:
//!
//! ```text
//! \name\Dave\score\10\model\ranger
//! ```
//!
//! The leading backslash is optional on input and canonical on output. Keys
//! compare case-insensitively; neither keys nor values may contain `\`,
//! `"`, or `;`. Total length is bounded by one of two tiers, and both
//! ceilings are wire-level contracts: two components exchanging info
//! strings must agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use infolex::info;
//!
//! let mut s = String::new();
//! info::set_value(&mut s, "name", "Dave").unwrap();
//! info::set_value(&mut s, "score", "10").unwrap();
//!
//! assert_eq!(s, "\\name\\Dave\\score\\10");
//! assert_eq!(info::value_for_key(&s, "Score"), Some("10"));
//! assert_eq!(info::value_for_key(&s, "missing"), None);
//!
//! // empty value deletes
//! info::set_value(&mut s, "score", "").unwrap();
//! assert_eq!(s, "\\name\\Dave");
//! ```

use crate::error::{Error, Result};
use crate::tables::eq_fold;
use std::ops::Range;

/// Size ceiling for the standard tier, in bytes.
pub const MAX_INFO_STRING: usize = 1024;

/// Size ceiling for the big tier, in bytes.
pub const BIG_INFO_STRING: usize = 8192;

/// The two info-string size tiers.
///
/// Behavior is identical across tiers; only the ceiling differs. The
/// standard tier carries per-entity state, the big tier aggregate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoLimit {
    #[default]
    Standard,
    Big,
}

impl InfoLimit {
    /// The byte ceiling for this tier.
    #[must_use]
    pub const fn max_len(self) -> usize {
        match self {
            InfoLimit::Standard => MAX_INFO_STRING,
            InfoLimit::Big => BIG_INFO_STRING,
        }
    }
}

/// Byte spans of one complete `\key\value` pair, including the span of the
/// whole pair for removal.
struct PairSpan {
    full: Range<usize>,
    key: Range<usize>,
    value: Range<usize>,
}

/// Walks complete pairs only; a trailing key with no value separator is
/// not visited, matching the original lookup and removal scans.
struct PairSpans<'a> {
    info: &'a str,
    pos: usize,
}

impl<'a> PairSpans<'a> {
    fn new(info: &'a str) -> Self {
        PairSpans { info, pos: 0 }
    }
}

impl Iterator for PairSpans<'_> {
    type Item = PairSpan;

    fn next(&mut self) -> Option<PairSpan> {
        let bytes = self.info.as_bytes();
        let start = self.pos;
        let mut s = self.pos;
        if s < bytes.len() && bytes[s] == b'\\' {
            s += 1;
        }
        let key_start = s;
        while s < bytes.len() && bytes[s] != b'\\' {
            s += 1;
        }
        if s >= bytes.len() {
            return None;
        }
        let key_end = s;
        s += 1;
        let value_start = s;
        while s < bytes.len() && bytes[s] != b'\\' {
            s += 1;
        }
        self.pos = s;
        Some(PairSpan {
            full: start..s,
            key: key_start..key_end,
            value: value_start..s,
        })
    }
}

/// Looks up `key` case-insensitively and returns its value.
///
/// The first matching pair wins. Returns `None` when the key is absent or
/// either input is empty.
///
/// # Examples
///
/// ```rust
/// use infolex::info::value_for_key;
///
/// let s = "\\name\\Dave\\score\\10";
/// assert_eq!(value_for_key(s, "NAME"), Some("Dave"));
/// assert_eq!(value_for_key(s, "model"), None);
/// ```
#[must_use]
pub fn value_for_key<'a>(info: &'a str, key: &str) -> Option<&'a str> {
    if info.is_empty() || key.is_empty() {
        return None;
    }
    for span in PairSpans::new(info) {
        if eq_fold(&info[span.key], key) {
            return Some(&info[span.value]);
        }
    }
    None
}

/// Iterator over the `(key, value)` pairs of an info string, in order.
///
/// Created by [`pairs`].
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<(&'a str, &'a str)> {
        let s = self.rest.strip_prefix('\\').unwrap_or(self.rest);
        self.rest = "";
        if s.is_empty() {
            return None;
        }
        match s.split_once('\\') {
            // dangling key at the end of the string: empty value
            None => Some((s, "")),
            Some((key, tail)) => {
                if key.is_empty() {
                    return None;
                }
                match tail.find('\\') {
                    Some(i) => {
                        self.rest = &tail[i..];
                        Some((key, &tail[..i]))
                    }
                    None => Some((key, tail)),
                }
            }
        }
    }
}

/// Iterates the key/value pairs of `info` left to right.
///
/// Terminates on an empty key; a trailing key with no value yields an
/// empty value.
///
/// # Examples
///
/// ```rust
/// use infolex::info::pairs;
///
/// let all: Vec<_> = pairs("\\a\\1\\b\\2").collect();
/// assert_eq!(all, vec![("a", "1"), ("b", "2")]);
/// ```
pub fn pairs(info: &str) -> Pairs<'_> {
    Pairs { rest: info }
}

/// Removes the first pair matching `key` (case-insensitively), shifting
/// the tail left in place.
///
/// Returns the number of bytes removed, or 0 if the key is absent (the
/// buffer is left byte-identical).
///
/// # Examples
///
/// ```rust
/// use infolex::info::remove_key;
///
/// let mut s = String::from("\\a\\1\\b\\2");
/// assert_eq!(remove_key(&mut s, "a"), 4);
/// assert_eq!(s, "\\b\\2");
/// assert_eq!(remove_key(&mut s, "a"), 0);
/// ```
pub fn remove_key(info: &mut String, key: &str) -> usize {
    let span = {
        let s: &str = info;
        PairSpans::new(s).find(|span| eq_fold(&s[span.key.clone()], key))
    };
    match span {
        Some(span) => {
            let removed = span.full.len();
            info.replace_range(span.full, "");
            removed
        }
        None => 0,
    }
}

/// Returns `true` if `s` is legal info-string content: no `"`, no `;`.
///
/// Used for whole info strings, where `\` is structure.
#[must_use]
pub fn validate(s: &str) -> bool {
    !s.bytes().any(|b| b == b'"' || b == b';')
}

/// Returns `true` if `s` is a legal key or value: no `"`, `;`, or `\`.
#[must_use]
pub fn validate_key_value(s: &str) -> bool {
    !s.bytes().any(|b| b == b'"' || b == b';' || b == b'\\')
}

/// Changes or adds a key/value pair under the given size tier.
///
/// An empty `value` deletes the key. On success the pair is appended at
/// the end as `\key\value` (any previous pair for the key removed first).
///
/// # Errors
///
/// - [`Error::Oversize`] if the buffer is already at or over the ceiling
///   on entry (a violated precondition in the original; the buffer is
///   untouched).
/// - [`Error::InvalidKey`] / [`Error::InvalidValue`] for illegal content
///   (buffer untouched).
/// - [`Error::Overflow`] if the appended pair would reach or exceed the
///   ceiling; the old pair for the key is already removed at that point
///   and nothing is appended.
pub fn set_value_for_key(
    info: &mut String,
    key: &str,
    value: &str,
    limit: InfoLimit,
) -> Result<()> {
    let max = limit.max_len();
    if info.len() >= max {
        return Err(Error::oversize(info.len(), max));
    }
    if key.is_empty() || !validate_key_value(key) {
        log::warn!("invalid info key: '{key}'");
        return Err(Error::invalid_key(key));
    }
    if !validate_key_value(value) {
        log::warn!("invalid info value: '{value}'");
        return Err(Error::invalid_value(value));
    }

    remove_key(info, key);
    if value.is_empty() {
        return Ok(());
    }

    let needed = info.len() + key.len() + value.len() + 2;
    if needed >= max {
        log::warn!("info string length exceeded ({needed} >= {max})");
        return Err(Error::overflow(needed, max));
    }

    info.push('\\');
    info.push_str(key);
    info.push('\\');
    info.push_str(value);
    Ok(())
}

/// [`set_value_for_key`] fixed to the standard tier.
///
/// # Errors
///
/// See [`set_value_for_key`].
pub fn set_value(info: &mut String, key: &str, value: &str) -> Result<()> {
    set_value_for_key(info, key, value, InfoLimit::Standard)
}

/// [`set_value_for_key`] fixed to the big tier.
///
/// # Errors
///
/// See [`set_value_for_key`].
pub fn set_value_big(info: &mut String, key: &str, value: &str) -> Result<()> {
    set_value_for_key(info, key, value, InfoLimit::Big)
}
