/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::escape::EscapeError;
use smithy_types::date_time::DateTimeError;
use smithy_types::TryFromNumberError;
use std::borrow::Cow;
use std::fmt;
use std::str::Utf8Error;

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub(crate) enum ErrorKind {
    Custom(Cow<'static, str>),
    ExpectedLiteral(String),
    InvalidNumber,
    InvalidUtf8,
    InvalidTimestamp(DateTimeError),
    NumberOutOfRange(TryFromNumberError),
    UnescapeFailed(EscapeError),
    UnexpectedControlCharacter(u8),
    UnexpectedEos,
    UnexpectedToken(char, &'static str),
}

/// Error from the tokenizer, the cursor, or one of the unmarshallers.
///
/// Stream errors are surfaced to the caller as-is: the unmarshallers never wrap them.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct DeserializeError {
    kind: ErrorKind,
    offset: Option<usize>,
}

impl DeserializeError {
    pub(crate) fn new(kind: ErrorKind, offset: Option<usize>) -> Self {
        Self { kind, offset }
    }

    /// Returns a custom error without an offset.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Custom(message.into()), None)
    }

    /// Byte offset into the input where the error was detected, when known.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub(crate) fn with_offset(mut self, offset: usize) -> Self {
        self.offset.get_or_insert(offset);
        self
    }
}

impl std::error::Error for DeserializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use ErrorKind::*;
        match &self.kind {
            UnescapeFailed(source) => Some(source),
            InvalidTimestamp(source) => Some(source),
            NumberOutOfRange(source) => Some(source),
            Custom(_)
            | ExpectedLiteral(_)
            | InvalidNumber
            | InvalidUtf8
            | UnexpectedControlCharacter(_)
            | UnexpectedToken(..)
            | UnexpectedEos => None,
        }
    }
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;
        if let Some(offset) = self.offset {
            write!(f, "Error at offset {}: ", offset)?;
        }
        match &self.kind {
            Custom(msg) => write!(f, "failed to parse JSON: {}", msg),
            ExpectedLiteral(literal) => write!(f, "expected literal: {}", literal),
            InvalidNumber => write!(f, "invalid number"),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON stream"),
            InvalidTimestamp(_) => write!(f, "invalid timestamp"),
            NumberOutOfRange(_) => write!(f, "number does not fit the target type"),
            UnescapeFailed(_) => write!(f, "failed to unescape JSON string"),
            UnexpectedControlCharacter(value) => write!(
                f,
                "encountered unescaped control character in string: 0x{:X}",
                value
            ),
            UnexpectedToken(token, expected) => {
                write!(f, "unexpected token '{}'. Expected one of {}", token, expected)
            }
            UnexpectedEos => write!(f, "unexpected end of stream"),
        }
    }
}

impl From<Utf8Error> for ErrorKind {
    fn from(_: Utf8Error) -> Self {
        ErrorKind::InvalidUtf8
    }
}

impl From<EscapeError> for DeserializeError {
    fn from(err: EscapeError) -> Self {
        Self::new(ErrorKind::UnescapeFailed(err), None)
    }
}

impl From<TryFromNumberError> for DeserializeError {
    fn from(err: TryFromNumberError) -> Self {
        Self::new(ErrorKind::NumberOutOfRange(err), None)
    }
}

impl From<DateTimeError> for DeserializeError {
    fn from(err: DateTimeError) -> Self {
        Self::new(ErrorKind::InvalidTimestamp(err), None)
    }
}
