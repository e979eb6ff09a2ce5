//! String literal un-quoting.
//!
//! Accepts the three quoting forms of the elz grammar:
//! - `"..."` with backslash escapes
//! - `'.'` holding exactly one character
//! - `` `...` `` raw strings, where carriage returns are dropped
//!
//! Supported escapes are `\a \b \f \n \r \t \v \\`, the enclosing quote,
//! `\xHH`, `\uHHHH`, `\UHHHHHHHH` and three-digit octal `\ooo`. `\x` and
//! octal escapes denote single bytes. String values are UTF-8, so a
//! correctly quoted literal whose bytes do not decode is rejected with
//! [`LiteralError::InvalidUtf8`], the one error that is not about quoting.

use std::str::Chars;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("literal is too short to be quoted")]
    TooShort,

    #[error("`{0}` is not a quote character")]
    UnknownQuote(char),

    #[error("opening and closing quotes differ")]
    MismatchedQuotes,

    #[error("unescaped quote inside literal")]
    UnescapedQuote,

    #[error("newline inside quoted literal")]
    NewlineInLiteral,

    #[error("literal ends with a lone backslash")]
    TrailingBackslash,

    #[error("unknown escape sequence `\\{0}`")]
    UnknownEscape(char),

    #[error("malformed hexadecimal escape")]
    InvalidHexEscape,

    #[error("malformed octal escape")]
    InvalidOctalEscape,

    #[error("escape denotes invalid code point {0:#x}")]
    InvalidCodePoint(u32),

    /// Quoting is fine but the escaped bytes are not UTF-8.
    #[error("escaped bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("character literal must hold exactly one character")]
    NotSingleChar,
}

/// Remove the quoting from a literal token exactly as written in source.
pub fn unquote(literal: &str) -> Result<String, LiteralError> {
    let quote = literal.chars().next().ok_or(LiteralError::TooShort)?;
    if !matches!(quote, '"' | '\'' | '`') {
        return Err(LiteralError::UnknownQuote(quote));
    }
    if literal.len() < 2 {
        return Err(LiteralError::TooShort);
    }
    if !literal.ends_with(quote) {
        return Err(LiteralError::MismatchedQuotes);
    }
    // Quotes are all single-byte.
    let body = &literal[1..literal.len() - 1];

    match quote {
        '`' => {
            if body.contains('`') {
                return Err(LiteralError::UnescapedQuote);
            }
            Ok(body.replace('\r', ""))
        }
        _ => {
            let decoded = decode_escaped(body, quote)?;
            if quote == '\'' && decoded.chars().count() != 1 {
                return Err(LiteralError::NotSingleChar);
            }
            Ok(decoded)
        }
    }
}

fn decode_escaped(body: &str, quote: char) -> Result<String, LiteralError> {
    if !body.contains(['\\', '\n', quote]) {
        return Ok(body.to_string());
    }
    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => decode_escape(&mut chars, quote, &mut out)?,
            '\n' => return Err(LiteralError::NewlineInLiteral),
            c if c == quote => return Err(LiteralError::UnescapedQuote),
            c => push_char(&mut out, c),
        }
    }
    String::from_utf8(out).map_err(|_| LiteralError::InvalidUtf8)
}

fn decode_escape(chars: &mut Chars<'_>, quote: char, out: &mut Vec<u8>) -> Result<(), LiteralError> {
    let c = chars.next().ok_or(LiteralError::TrailingBackslash)?;
    match c {
        'a' => out.push(0x07),
        'b' => out.push(0x08),
        'f' => out.push(0x0c),
        'n' => out.push(b'\n'),
        'r' => out.push(b'\r'),
        't' => out.push(b'\t'),
        'v' => out.push(0x0b),
        '\\' => out.push(b'\\'),
        '\'' | '"' if c == quote => push_char(out, c),
        'x' => {
            let value = read_hex(chars, 2)?;
            out.push(value as u8);
        }
        'u' | 'U' => {
            let digits = if c == 'u' { 4 } else { 8 };
            let value = read_hex(chars, digits)?;
            let ch = char::from_u32(value).ok_or(LiteralError::InvalidCodePoint(value))?;
            push_char(out, ch);
        }
        '0'..='7' => {
            let mut value = c as u32 - '0' as u32;
            for _ in 0..2 {
                let digit = chars
                    .next()
                    .and_then(|d| d.to_digit(8))
                    .ok_or(LiteralError::InvalidOctalEscape)?;
                value = value * 8 + digit;
            }
            if value > 0xff {
                return Err(LiteralError::InvalidOctalEscape);
            }
            out.push(value as u8);
        }
        other => return Err(LiteralError::UnknownEscape(other)),
    }
    Ok(())
}

fn read_hex(chars: &mut Chars<'_>, digits: usize) -> Result<u32, LiteralError> {
    let mut value = 0u32;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|d| d.to_digit(16))
            .ok_or(LiteralError::InvalidHexEscape)?;
        value = value * 16 + digit;
    }
    Ok(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_escaped() {
        assert_eq!(unquote(r#""hello""#).unwrap(), "hello");
        assert_eq!(unquote(r#""""#).unwrap(), "");
        assert_eq!(unquote(r#""a\"b""#).unwrap(), "a\"b");
        assert_eq!(unquote(r#""tab\there\n""#).unwrap(), "tab\there\n");
        assert_eq!(unquote(r#""back\\slash""#).unwrap(), "back\\slash");
        assert_eq!(unquote(r#""\a\b\f\v\r""#).unwrap(), "\u{7}\u{8}\u{c}\u{b}\r");
    }

    #[test]
    fn test_numeric_escapes() {
        assert_eq!(unquote(r#""\x41\102""#).unwrap(), "AB");
        assert_eq!(unquote(r#""é""#).unwrap(), "é");
        assert_eq!(unquote(r#""\U0001F600""#).unwrap(), "😀");
        // UTF-8 for é spelled as two byte escapes
        assert_eq!(unquote(r#""\xc3\xa9""#).unwrap(), "é");
        assert_eq!(unquote("\"héllo\"").unwrap(), "héllo");
    }

    #[test]
    fn test_raw_and_char_literals() {
        assert_eq!(unquote("`raw \\n`").unwrap(), "raw \\n");
        assert_eq!(unquote("`a\r\nb`").unwrap(), "a\nb");
        assert_eq!(unquote("'x'").unwrap(), "x");
        assert_eq!(unquote(r"'\''").unwrap(), "'");
        assert_eq!(unquote(r"'\n'").unwrap(), "\n");
    }

    #[test]
    fn test_malformed() {
        assert_eq!(unquote(""), Err(LiteralError::TooShort));
        assert_eq!(unquote("\""), Err(LiteralError::TooShort));
        assert_eq!(unquote("abc"), Err(LiteralError::UnknownQuote('a')));
        assert_eq!(unquote("\"abc'"), Err(LiteralError::MismatchedQuotes));
        assert_eq!(unquote(r#""a"b""#), Err(LiteralError::UnescapedQuote));
        assert_eq!(unquote("\"a\nb\""), Err(LiteralError::NewlineInLiteral));
        assert_eq!(unquote(r#""\q""#), Err(LiteralError::UnknownEscape('q')));
        assert_eq!(unquote(r#""\'""#), Err(LiteralError::UnknownEscape('\'')));
        assert_eq!(unquote(r#""\x4""#), Err(LiteralError::InvalidHexEscape));
        assert_eq!(unquote(r#""\400""#), Err(LiteralError::InvalidOctalEscape));
        assert_eq!(unquote(r#""\ud800""#), Err(LiteralError::InvalidCodePoint(0xd800)));
        assert_eq!(unquote("'ab'"), Err(LiteralError::NotSingleChar));
        assert_eq!(unquote("``"), Ok(String::new()));
        assert_eq!(unquote("`a`b`"), Err(LiteralError::UnescapedQuote));
    }

    #[test]
    fn test_byte_escapes_outside_utf8() {
        assert_eq!(unquote(r#""\xff""#), Err(LiteralError::InvalidUtf8));
        assert_eq!(unquote(r#""\377""#), Err(LiteralError::InvalidUtf8));
        assert_eq!(unquote(r#""a\xc3""#), Err(LiteralError::InvalidUtf8));
    }

    #[test]
    fn test_trailing_backslash() {
        // `"\"` is an unterminated literal whose closing quote got escaped.
        assert_eq!(unquote(r#""abc\""#), Err(LiteralError::TrailingBackslash));
    }
}
