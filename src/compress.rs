//! Whitespace and comment canonicalization.
//!
//! [`compress`] runs a single pass over the same grammar the lexer reads:
//! comments are deleted, whitespace runs collapse, and quoted sections pass
//! through untouched. The output is a canonical form, so compressing twice
//! changes nothing.
//!
//! ## Examples
//!
//! ```rust
//! use infolex::compress;
//!
//! assert_eq!(compress("a   b\n\nc"), "a b\nc");
//! assert_eq!(compress("x // comment\ny"), "x\ny");
//! assert_eq!(compress("keep \"  spaced  \" text"), "keep \"  spaced  \" text");
//! ```

/// Canonicalizes `input` in a single pass.
///
/// - `// ...` and `/* ... */` comments are removed entirely; newlines
///   inside a block comment are removed with it.
/// - A run of spaces/tabs collapses to a single space, emitted lazily
///   before the next real byte, so trailing whitespace vanishes.
/// - A run containing a newline (or carriage return) collapses to a single
///   `\n`, which wins over a pending space.
/// - Quoted sections are copied byte for byte, quotes included; comment
///   syntax inside quotes is plain text.
#[must_use]
pub fn compress(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    let mut newline = false;
    let mut whitespace = false;

    while i < bytes.len() {
        let c = bytes[i];
        if c == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
            while i < bytes.len() && bytes[i] != b'\n' {
                i += 1;
            }
        } else if c == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'*' {
            while i < bytes.len()
                && !(bytes[i] == b'*' && i + 1 < bytes.len() && bytes[i + 1] == b'/')
            {
                i += 1;
            }
            if i < bytes.len() {
                i += 2;
            }
        } else if c == b'\n' || c == b'\r' {
            newline = true;
            i += 1;
        } else if c == b' ' || c == b'\t' {
            whitespace = true;
            i += 1;
        } else {
            // a real byte follows: settle any pending gap first
            if newline {
                out.push('\n');
                newline = false;
                whitespace = false;
            } else if whitespace {
                out.push(' ');
                whitespace = false;
            }

            if c == b'"' {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += 1;
                }
                if i < bytes.len() {
                    i += 1;
                }
                out.push_str(&input[start..i]);
            } else {
                let start = i;
                while i < bytes.len() {
                    let c = bytes[i];
                    if c == b'\n' || c == b'\r' || c == b' ' || c == b'\t' || c == b'"' {
                        break;
                    }
                    if c == b'/'
                        && i + 1 < bytes.len()
                        && (bytes[i + 1] == b'/' || bytes[i + 1] == b'*')
                    {
                        break;
                    }
                    i += 1;
                }
                out.push_str(&input[start..i]);
            }
        }
    }

    out
}

/// In-place variant of [`compress`]; returns the new length.
///
/// # Examples
///
/// ```rust
/// use infolex::compress_in_place;
///
/// let mut buf = String::from("a   b");
/// assert_eq!(compress_in_place(&mut buf), 3);
/// assert_eq!(buf, "a b");
/// ```
pub fn compress_in_place(buf: &mut String) -> usize {
    let out = compress(buf);
    let len = out.len();
    *buf = out;
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse() {
        assert_eq!(compress("a   b\n\nc"), "a b\nc");
        assert_eq!(compress("a\t\tb"), "a b");
    }

    #[test]
    fn test_leading_gap_is_kept_trailing_dropped() {
        // a pending space is settled before the first real byte too;
        // only a trailing run has no byte to attach to
        assert_eq!(compress("  lead and trail  "), " lead and trail");
        assert_eq!(compress("\nx"), "\nx");
        assert_eq!(compress("x  "), "x");
    }

    #[test]
    fn test_newline_beats_space() {
        assert_eq!(compress("a \n b"), "a\nb");
        assert_eq!(compress("a\r\nb"), "a\nb");
    }

    #[test]
    fn test_comments_removed() {
        assert_eq!(compress("a // gone\nb"), "a\nb");
        assert_eq!(compress("a/*\ngone\n*/b"), "ab");
        assert_eq!(compress("/* unterminated"), "");
    }

    #[test]
    fn test_quotes_preserved() {
        assert_eq!(compress("\"a   b // not a comment\""), "\"a   b // not a comment\"");
        assert_eq!(compress("\"unterminated   "), "\"unterminated   ");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["a   b\n\nc", "x//c\ny", "\"q  q\"  w", "", "\n\n\n"];
        for input in inputs {
            let once = compress(input);
            assert_eq!(compress(&once), once);
        }
    }
}
