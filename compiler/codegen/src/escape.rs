//! Escaping of text for C++ string literals.
//!
//! `escape` turns text into the body of a string literal and `unescape`
//! reads such a body back. For every input, `unescape(&escape(s))` is
//! `Ok(s)`.
use std::fmt::Write;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UnescapeError {
    #[error("escape sequence at byte {0} is not complete")]
    Incomplete(usize),
    #[error("unknown escape sequence '\\{1}' at byte {0}")]
    Unknown(usize, char),
    #[error("octal escape at byte {0} is not a character")]
    InvalidOctal(usize),
}

/// Returns the text escaped for use between the quotes of a C++ string
/// literal.
///
/// Quotation marks, backslashes and control characters are escaped. A
/// question mark that follows another question mark is escaped so that the
/// result never contains a trigraph.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let mut previous = None;
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '?' if previous == Some('?') => out.push_str("\\?"),
            c if c.is_ascii_control() => {
                // Three digits so that a following digit is not absorbed.
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
        previous = Some(ch);
    }
    out
}

/// Reads the body of a C++ string literal back into text.
pub fn unescape(literal: &str) -> Result<String, UnescapeError> {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let (_, code) = chars.next().ok_or(UnescapeError::Incomplete(pos))?;
        match code {
            '"' | '\\' | '\'' | '?' => out.push(code),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            '0'..='7' => {
                let mut value = code.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|(_, c)| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).ok_or(UnescapeError::InvalidOctal(pos))?);
            }
            other => return Err(UnescapeError::Unknown(pos, other)),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("\"quoted\"", "\\\"quoted\\\"")]
    #[case("two\nlines", "two\\nlines")]
    #[case("back\\slash", "back\\\\slash")]
    #[case("bell\u{07}1", "bell\\0071")]
    #[case("what??!", "what?\\?!")]
    #[case("tab\there", "tab\\there")]
    fn escape_when_text_then_literal_body(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(escape(text), expected);
    }

    #[test]
    fn unescape_when_dangling_backslash_then_err() {
        assert_eq!(unescape("abc\\"), Err(UnescapeError::Incomplete(3)));
    }

    #[test]
    fn unescape_when_unknown_escape_then_err() {
        assert_eq!(unescape("\\q"), Err(UnescapeError::Unknown(0, 'q')));
    }

    #[test]
    fn unescape_when_short_octal_then_reads_digits_present() {
        assert_eq!(unescape("\\0"), Ok("\0".to_string()));
        assert_eq!(unescape("\\12x"), Ok("\nx".to_string()));
    }

    proptest! {
        #[test]
        fn unescape_when_escaped_then_original_text(text in any::<String>()) {
            prop_assert_eq!(unescape(&escape(&text)), Ok(text));
        }

        #[test]
        fn escape_when_any_text_then_no_raw_quote_or_newline(text in any::<String>()) {
            let escaped = escape(&text);
            prop_assert!(!escaped.contains('\n'));
            let unescaped_quotes = escaped
                .char_indices()
                .filter(|(idx, c)| *c == '"' && !escaped[..*idx].ends_with('\\'))
                .count();
            prop_assert_eq!(unescaped_quotes, 0);
        }
    }
}
