/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
enum EscapeErrorKind {
    ExpectedSurrogatePair(String),
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    InvalidUtf8,
    UnexpectedEndOfString,
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct EscapeError {
    kind: EscapeErrorKind,
}

impl std::error::Error for EscapeError {}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EscapeErrorKind::*;
        match &self.kind {
            ExpectedSurrogatePair(low) => write!(
                f,
                "expected a UTF-16 surrogate pair, but got {} as the low word",
                low
            ),
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{}", chr),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{:04X}\\u{:04X}", high, low)
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON Unicode escape: \\u{}", escape),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON string"),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl From<EscapeErrorKind> for EscapeError {
    fn from(kind: EscapeErrorKind) -> Self {
        Self { kind }
    }
}

/// Escapes a string for embedding in a JSON string value.
pub(crate) fn escape_string(value: &str) -> Cow<'_, str> {
    match value
        .bytes()
        .position(|byte| matches!(byte, 0..=0x1F | b'"' | b'\\'))
    {
        Some(first) => {
            let mut escaped = String::with_capacity(value.len() + 8);
            escaped.push_str(&value[..first]);
            for chr in value[first..].chars() {
                match chr {
                    '"' => escaped.push_str("\\\""),
                    '\\' => escaped.push_str("\\\\"),
                    '\u{08}' => escaped.push_str("\\b"),
                    '\u{0C}' => escaped.push_str("\\f"),
                    '\n' => escaped.push_str("\\n"),
                    '\r' => escaped.push_str("\\r"),
                    '\t' => escaped.push_str("\\t"),
                    '\u{00}'..='\u{1F}' => escaped.push_str(&format!("\\u{:04x}", chr as u32)),
                    _ => escaped.push(chr),
                }
            }
            Cow::Owned(escaped)
        }
        None => Cow::Borrowed(value),
    }
}

/// Unescapes a JSON-escaped string.
/// If there are no escape sequences, it directly returns the reference.
pub(crate) fn unescape_string(value: &str) -> Result<Cow<'_, str>, EscapeError> {
    let first = match value.bytes().position(|byte| byte == b'\\') {
        Some(first) => first,
        None => return Ok(Cow::Borrowed(value)),
    };

    let bytes = value.as_bytes();
    let mut unescaped: Vec<u8> = Vec::with_capacity(bytes.len());
    unescaped.extend_from_slice(&bytes[..first]);

    let mut index = first;
    while index < bytes.len() {
        if bytes[index] != b'\\' {
            unescaped.push(bytes[index]);
            index += 1;
            continue;
        }
        let escape = *bytes
            .get(index + 1)
            .ok_or(EscapeErrorKind::UnexpectedEndOfString)?;
        match escape {
            b'u' => {
                let (chr, read) = read_unicode_escape(&bytes[index..])?;
                let mut buffer = [0; 4];
                unescaped.extend_from_slice(chr.encode_utf8(&mut buffer).as_bytes());
                index += read;
                continue;
            }
            b'\\' => unescaped.push(b'\\'),
            b'/' => unescaped.push(b'/'),
            b'"' => unescaped.push(b'"'),
            b'b' => unescaped.push(0x08),
            b'f' => unescaped.push(0x0C),
            b'n' => unescaped.push(b'\n'),
            b'r' => unescaped.push(b'\r'),
            b't' => unescaped.push(b'\t'),
            other => return Err(EscapeErrorKind::InvalidEscapeCharacter(other.into()).into()),
        }
        index += 2;
    }

    String::from_utf8(unescaped)
        .map(Cow::Owned)
        .map_err(|_| EscapeErrorKind::InvalidUtf8.into())
}

/// Reads a `\uXXXX` escape (plus its low half when it starts a surrogate pair).
/// Returns the decoded character and the number of bytes consumed.
fn read_unicode_escape(bytes: &[u8]) -> Result<(char, usize), EscapeError> {
    let high = read_codepoint(bytes)?;
    if high & 0xFC00 != 0xD800 {
        let chr = std::char::from_u32(high as u32)
            .ok_or_else(|| EscapeErrorKind::InvalidUnicodeEscape(format!("{:04X}", high)))?;
        return Ok((chr, 6));
    }

    let rest = &bytes[6..];
    if rest.len() < 6 || &rest[0..2] != b"\\u" {
        let shown = String::from_utf8_lossy(&rest[..rest.len().min(6)]).into_owned();
        return Err(EscapeErrorKind::ExpectedSurrogatePair(shown).into());
    }
    let low = read_codepoint(rest)?;
    if low & 0xFC00 != 0xDC00 {
        return Err(EscapeErrorKind::InvalidSurrogatePair(high, low).into());
    }
    let codepoint = 0x10000 + (high as u32 - 0xD800) * 0x400 + (low as u32 - 0xDC00);
    let chr = std::char::from_u32(codepoint)
        .ok_or(EscapeErrorKind::InvalidSurrogatePair(high, low))?;
    Ok((chr, 12))
}

fn read_codepoint(bytes: &[u8]) -> Result<u16, EscapeError> {
    if bytes.len() < 6 {
        return Err(EscapeErrorKind::UnexpectedEndOfString.into());
    }
    let digits = std::str::from_utf8(&bytes[2..6]).map_err(|_| EscapeErrorKind::InvalidUtf8)?;
    // from_str_radix would otherwise accept a leading `+`
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(EscapeErrorKind::InvalidUnicodeEscape(digits.into()).into());
    }
    u16::from_str_radix(digits, 16)
        .map_err(|_| EscapeErrorKind::InvalidUnicodeEscape(digits.into()).into())
}
