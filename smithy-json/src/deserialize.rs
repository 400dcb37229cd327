/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Forward-only JSON tokenizer.
//!
//! [`json_token_iter`] walks the input once and yields one [`Token`] per structural element,
//! key, or scalar. Strings are not unescaped until a caller asks for them.

pub mod error;
pub mod token;

use crate::deserialize::error::{DeserializeError, ErrorKind};
use smithy_types::Number;

pub use token::{EscapedStr, Offset, Token};

/// JSON token parser as a Rust iterator
///
/// This parser will parse and yield exactly one [`Token`] per iterator `next()` call.
/// Validation is done on the fly, so it is possible for it to parse an invalid JSON document
/// until it gets to the first [`DeserializeError`].
///
/// JSON string values are left escaped in the [`Token::ValueString`] as an [`EscapedStr`],
/// which is a new type around a slice of original `input` bytes so that the caller can decide
/// when to unescape and allocate into a [`String`].
///
/// After an error is returned, the iterator is fused and will only yield `None`.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: vec![State::Initial],
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Initial,
    Done,
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
}

impl<'a> JsonTokenIterator<'a> {
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn next_byte(&mut self) -> Option<u8> {
        let next = self.peek_byte();
        self.advance();
        next
    }

    fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += 1;
        }
    }

    fn error_at(&self, offset: usize, kind: ErrorKind) -> DeserializeError {
        DeserializeError::new(kind, Some(offset))
    }

    fn error(&self, kind: ErrorKind) -> DeserializeError {
        self.error_at(self.index, kind)
    }

    fn unexpected(&self, expected: &'static str) -> DeserializeError {
        match self.peek_byte() {
            Some(byte) => self.error(ErrorKind::UnexpectedToken(byte as char, expected)),
            None => self.error(ErrorKind::UnexpectedEos),
        }
    }

    fn discard_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek_byte() {
            self.advance();
        }
    }

    fn replace_state(&mut self, state: State) {
        if let Some(top) = self.state_stack.last_mut() {
            *top = state;
        }
    }

    fn read_value(&mut self) -> Result<Token<'a>, DeserializeError> {
        self.discard_whitespace();
        let offset = Offset(self.index);
        match self.peek_byte() {
            Some(b'{') => {
                self.advance();
                self.state_stack.push(State::ObjectFirstKeyOrEnd);
                Ok(Token::StartObject { offset })
            }
            Some(b'[') => {
                self.advance();
                self.state_stack.push(State::ArrayFirstValueOrEnd);
                Ok(Token::StartArray { offset })
            }
            Some(b'"') => self
                .read_string()
                .map(|value| Token::ValueString { offset, value }),
            Some(b't') => self
                .expect_literal("true")
                .map(|_| Token::ValueBool { offset, value: true }),
            Some(b'f') => self
                .expect_literal("false")
                .map(|_| Token::ValueBool { offset, value: false }),
            Some(b'n') => self
                .expect_literal("null")
                .map(|_| Token::ValueNull { offset }),
            Some(b'-' | b'0'..=b'9') => self
                .read_number()
                .map(|value| Token::ValueNumber { offset, value }),
            _ => Err(self.unexpected("'{', '[', '\"', 'true', 'false', 'null', number")),
        }
    }

    fn expect_literal(&mut self, literal: &'static str) -> Result<(), DeserializeError> {
        if self.input[self.index..].starts_with(literal.as_bytes()) {
            self.index += literal.len();
            Ok(())
        } else {
            Err(self.error(ErrorKind::ExpectedLiteral(literal.into())))
        }
    }

    /// Reads a quoted string starting at the opening quote, leaving the escapes in place.
    fn read_string(&mut self) -> Result<EscapedStr<'a>, DeserializeError> {
        let quote = self.next_byte();
        debug_assert_eq!(Some(b'"'), quote);
        let start = self.index;
        loop {
            match self.peek_byte() {
                Some(b'"') => {
                    let end = self.index;
                    self.advance();
                    let value = std::str::from_utf8(&self.input[start..end])
                        .map_err(|err| self.error_at(start, err.into()))?;
                    return Ok(EscapedStr::new(value));
                }
                Some(b'\\') => {
                    self.advance();
                    if self.next_byte().is_none() {
                        return Err(self.error(ErrorKind::UnexpectedEos));
                    }
                }
                Some(byte @ 0x00..=0x1F) => {
                    return Err(self.error(ErrorKind::UnexpectedControlCharacter(byte)))
                }
                Some(_) => self.advance(),
                None => return Err(self.error(ErrorKind::UnexpectedEos)),
            }
        }
    }

    fn read_number(&mut self) -> Result<Number, DeserializeError> {
        let start = self.index;
        while let Some(b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E') = self.peek_byte() {
            self.advance();
        }
        let text = std::str::from_utf8(&self.input[start..self.index])
            .map_err(|err| self.error_at(start, err.into()))?;
        parse_number(text).ok_or_else(|| self.error_at(start, ErrorKind::InvalidNumber))
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, DeserializeError> {
        self.discard_whitespace();
        let offset = Offset(self.index);
        match self.peek_byte() {
            Some(b'"') => self.read_string().map(|key| Token::ObjectKey { offset, key }),
            _ => Err(self.unexpected("'\"'")),
        }
    }

    fn state_initial(&mut self) -> Option<Result<Token<'a>, DeserializeError>> {
        self.discard_whitespace();
        if self.peek_byte().is_none() {
            return None;
        }
        self.replace_state(State::Done);
        Some(self.read_value())
    }

    fn state_done(&mut self) -> Option<Result<Token<'a>, DeserializeError>> {
        self.discard_whitespace();
        self.peek_byte()
            .map(|_| Err(self.unexpected("<end of stream>")))
    }

    fn state_array_value_or_end(&mut self, first: bool) -> Result<Token<'a>, DeserializeError> {
        self.discard_whitespace();
        let offset = Offset(self.index);
        match self.peek_byte() {
            Some(b']') => {
                self.advance();
                self.state_stack.pop();
                Ok(Token::EndArray { offset })
            }
            Some(b',') if !first => {
                self.advance();
                self.read_value()
            }
            _ if first => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
            _ => Err(self.unexpected("']', ','")),
        }
    }

    fn state_object_key_or_end(&mut self, first: bool) -> Result<Token<'a>, DeserializeError> {
        self.discard_whitespace();
        let offset = Offset(self.index);
        match self.peek_byte() {
            Some(b'}') => {
                self.advance();
                self.state_stack.pop();
                Ok(Token::EndObject { offset })
            }
            Some(b',') if !first => {
                self.advance();
                self.replace_state(State::ObjectFieldValue);
                self.read_object_key()
            }
            _ if first => {
                self.replace_state(State::ObjectFieldValue);
                self.read_object_key()
            }
            _ => Err(self.unexpected("'}', ','")),
        }
    }

    fn state_object_field_value(&mut self) -> Result<Token<'a>, DeserializeError> {
        self.discard_whitespace();
        match self.peek_byte() {
            Some(b':') => {
                self.advance();
                self.replace_state(State::ObjectNextKeyOrEnd);
                self.read_value()
            }
            _ => Err(self.unexpected("':'")),
        }
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, DeserializeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = match *self.state_stack.last()? {
            State::Initial => self.state_initial()?,
            State::Done => self.state_done()?,
            State::ArrayFirstValueOrEnd => self.state_array_value_or_end(true),
            State::ArrayNextValueOrEnd => self.state_array_value_or_end(false),
            State::ObjectFirstKeyOrEnd => self.state_object_key_or_end(true),
            State::ObjectNextKeyOrEnd => self.state_object_key_or_end(false),
            State::ObjectFieldValue => self.state_object_field_value(),
        };
        if result.is_err() {
            self.state_stack.clear();
        }
        Some(result)
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    if text.contains(|c| c == '.' || c == 'e' || c == 'E') {
        return text.parse::<f64>().ok().map(Number::Float);
    }
    if text.starts_with('-') {
        match text.parse::<i64>() {
            Ok(0) => Some(Number::PosInt(0)),
            Ok(value) => Some(Number::NegInt(value)),
            Err(_) => text.parse::<f64>().ok().map(Number::Float),
        }
    } else {
        match text.parse::<u64>() {
            Ok(value) => Some(Number::PosInt(value)),
            Err(_) => text.parse::<f64>().ok().map(Number::Float),
        }
    }
}
