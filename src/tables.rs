//! Byte classification tables.
//!
//! Two process-wide, read-only lookup tables drive the rest of the crate:
//!
//! - a 256-entry case-fold table used for key comparison in info strings
//! - a 256-entry separator-membership table used by the separator-aware
//!   tokenizer grammar
//!
//! Both are built at compile time and give O(1) lookups. Folding is ASCII
//! only: `A..=Z` map to `a..=z`, every other byte (including the Latin-1
//! high range) maps to itself.

/// Case-fold table: identity except for ASCII uppercase letters.
static FOLD: [u8; 256] = build_fold();

const fn build_fold() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as u8;
        i += 1;
    }
    let mut c = b'A';
    while c <= b'Z' {
        table[c as usize] = c + (b'a' - b'A');
        c += 1;
    }
    table
}

/// Separator membership: newline, `;`, `=`, `{`, `}`.
static SEPARATOR: [bool; 256] = build_separators();

const fn build_separators() -> [bool; 256] {
    let mut table = [false; 256];
    table[b'\n' as usize] = true;
    table[b';' as usize] = true;
    table[b'=' as usize] = true;
    table[b'{' as usize] = true;
    table[b'}' as usize] = true;
    table
}

/// Folds a single byte to its lowercase form.
///
/// # Examples
///
/// ```rust
/// use infolex::tables::fold;
///
/// assert_eq!(fold(b'A'), b'a');
/// assert_eq!(fold(b'z'), b'z');
/// assert_eq!(fold(b'7'), b'7');
/// ```
#[inline]
#[must_use]
pub fn fold(b: u8) -> u8 {
    FOLD[b as usize]
}

/// Returns `true` if `b` is one of the tokenizer's separator bytes.
///
/// # Examples
///
/// ```rust
/// use infolex::tables::is_separator;
///
/// assert!(is_separator(b';'));
/// assert!(is_separator(b'\n'));
/// assert!(!is_separator(b'a'));
/// ```
#[inline]
#[must_use]
pub fn is_separator(b: u8) -> bool {
    SEPARATOR[b as usize]
}

/// Case-insensitive byte-wise comparison via the fold table.
///
/// Unlike a prefix match, the two strings must have equal length.
///
/// # Examples
///
/// ```rust
/// use infolex::tables::eq_fold;
///
/// assert!(eq_fold("Name", "name"));
/// assert!(!eq_fold("name", "names"));
/// ```
#[must_use]
pub fn eq_fold(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| fold(x) == fold(y))
}
