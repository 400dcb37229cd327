/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{expect_token, Unmarshaller};
use crate::cursor::JsonCursor;
use crate::deserialize::error::DeserializeError;
use crate::deserialize::Token;
use smithy_types::date_time::Format;
use smithy_types::{DateTime, Number};
use std::convert::TryFrom;

#[derive(Debug, Clone, Copy, Default)]
pub struct StringUnmarshaller;

impl Unmarshaller for StringUnmarshaller {
    type Output = String;

    fn unmarshall(&self, cursor: &mut JsonCursor<'_>) -> Result<Option<String>, DeserializeError> {
        match expect_token(cursor)? {
            Token::ValueNull { .. } => Ok(None),
            Token::ValueString { value, offset } => value
                .to_unescaped()
                .map(|value| Some(value.into_owned()))
                .map_err(|err| DeserializeError::from(err).with_offset(offset.0)),
            token => Err(token.error("expected string value".into())),
        }
    }
}

macro_rules! integer_unmarshaller {
    ($name:ident, $typ:ty) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Unmarshaller for $name {
            type Output = $typ;

            fn unmarshall(
                &self,
                cursor: &mut JsonCursor<'_>,
            ) -> Result<Option<$typ>, DeserializeError> {
                match expect_token(cursor)? {
                    Token::ValueNull { .. } => Ok(None),
                    Token::ValueNumber { value, offset } => <$typ>::try_from(*value)
                        .map(Some)
                        .map_err(|err| DeserializeError::from(err).with_offset(offset.0)),
                    token => Err(token.error(concat!("expected ", stringify!($typ)).into())),
                }
            }
        }
    };
}

integer_unmarshaller!(IntegerUnmarshaller, i32);
integer_unmarshaller!(LongUnmarshaller, i64);

/// Accepts JSON numbers, plus the strings `NaN`, `Infinity` and `-Infinity`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleUnmarshaller;

impl Unmarshaller for DoubleUnmarshaller {
    type Output = f64;

    fn unmarshall(&self, cursor: &mut JsonCursor<'_>) -> Result<Option<f64>, DeserializeError> {
        match expect_token(cursor)? {
            Token::ValueNull { .. } => Ok(None),
            Token::ValueNumber { value, .. } => Ok(Some(value.to_f64_lossy())),
            Token::ValueString { value, offset } => match value.as_escaped_str() {
                "NaN" => Ok(Some(f64::NAN)),
                "Infinity" => Ok(Some(f64::INFINITY)),
                "-Infinity" => Ok(Some(f64::NEG_INFINITY)),
                other => Err(offset.error(
                    format!("`{}` is not a valid floating point value", other).into(),
                )),
            },
            token => Err(token.error("expected number".into())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanUnmarshaller;

impl Unmarshaller for BooleanUnmarshaller {
    type Output = bool;

    fn unmarshall(&self, cursor: &mut JsonCursor<'_>) -> Result<Option<bool>, DeserializeError> {
        match expect_token(cursor)? {
            Token::ValueNull { .. } => Ok(None),
            Token::ValueBool { value, .. } => Ok(Some(*value)),
            token => Err(token.error("expected boolean".into())),
        }
    }
}

/// Timestamps arrive as epoch seconds. Some services send them as strings, either holding the
/// epoch seconds or an RFC 3339 date-time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateUnmarshaller;

impl Unmarshaller for DateUnmarshaller {
    type Output = DateTime;

    fn unmarshall(
        &self,
        cursor: &mut JsonCursor<'_>,
    ) -> Result<Option<DateTime>, DeserializeError> {
        match expect_token(cursor)? {
            Token::ValueNull { .. } => Ok(None),
            Token::ValueNumber { value, offset } => match *value {
                Number::Float(seconds) => {
                    if seconds.is_finite()
                        && seconds >= i64::MIN as f64
                        && seconds < i64::MAX as f64
                    {
                        Ok(Some(DateTime::from_secs_f64(seconds)))
                    } else {
                        Err(offset.error("timestamp is out of range".into()))
                    }
                }
                seconds => i64::try_from(seconds)
                    .map(|seconds| Some(DateTime::from_secs(seconds)))
                    .map_err(|err| DeserializeError::from(err).with_offset(offset.0)),
            },
            Token::ValueString { value, offset } => {
                let value = value.as_escaped_str();
                DateTime::from_str(value, Format::EpochSeconds)
                    .or_else(|_| DateTime::from_str(value, Format::DateTime))
                    .map(Some)
                    .map_err(|err| DeserializeError::from(err).with_offset(offset.0))
            }
            token => Err(token.error("expected timestamp".into())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unmarshall<U: Unmarshaller>(
        unmarshaller: U,
        input: &str,
    ) -> Result<Option<U::Output>, DeserializeError> {
        let mut cursor = JsonCursor::new(input.as_bytes()).unwrap();
        let value = unmarshaller.unmarshall(&mut cursor);
        if value.is_ok() {
            // scalars stay on their own token
            assert!(cursor.current_token().is_some());
        }
        value
    }

    #[test]
    fn strings() {
        assert_eq!(
            Some("a\nb".to_string()),
            unmarshall(StringUnmarshaller, r#""a\nb""#).unwrap()
        );
        assert_eq!(None, unmarshall(StringUnmarshaller, "null").unwrap());
        assert!(unmarshall(StringUnmarshaller, "5").is_err());
    }

    #[test]
    fn zero_and_false_are_not_absent() {
        assert_eq!(Some(0), unmarshall(IntegerUnmarshaller, "0").unwrap());
        assert_eq!(Some(0), unmarshall(LongUnmarshaller, "-0").unwrap());
        assert_eq!(Some(false), unmarshall(BooleanUnmarshaller, "false").unwrap());
        assert_eq!(Some(0.0), unmarshall(DoubleUnmarshaller, "0").unwrap());
    }

    #[test]
    fn integers_are_range_checked() {
        assert_eq!(
            Some(-2147483648),
            unmarshall(IntegerUnmarshaller, "-2147483648").unwrap()
        );
        let err = unmarshall(IntegerUnmarshaller, "2147483648").unwrap_err();
        assert_eq!(Some(0), err.offset());
        assert_eq!(
            Some(9007199254740993),
            unmarshall(LongUnmarshaller, "9007199254740993").unwrap()
        );
        assert!(unmarshall(LongUnmarshaller, "1.5").is_err());
        assert!(unmarshall(IntegerUnmarshaller, "\"5\"").is_err());
    }

    #[test]
    fn doubles() {
        assert_eq!(Some(1.5), unmarshall(DoubleUnmarshaller, "1.5").unwrap());
        assert_eq!(Some(-3.0), unmarshall(DoubleUnmarshaller, "-3").unwrap());
        assert!(unmarshall(DoubleUnmarshaller, "\"NaN\"")
            .unwrap()
            .unwrap()
            .is_nan());
        assert_eq!(
            Some(f64::INFINITY),
            unmarshall(DoubleUnmarshaller, "\"Infinity\"").unwrap()
        );
        assert_eq!(
            Some(f64::NEG_INFINITY),
            unmarshall(DoubleUnmarshaller, "\"-Infinity\"").unwrap()
        );
        assert!(unmarshall(DoubleUnmarshaller, "\"nan\"").is_err());
    }

    #[test]
    fn dates() {
        let expected = DateTime::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(
            Some(expected),
            unmarshall(DateUnmarshaller, "1576540098.52").unwrap()
        );
        assert_eq!(
            Some(expected),
            unmarshall(DateUnmarshaller, "\"1576540098.52\"").unwrap()
        );
        assert_eq!(
            Some(expected),
            unmarshall(DateUnmarshaller, "\"2019-12-16T23:48:18.52Z\"").unwrap()
        );
        assert_eq!(
            Some(DateTime::from_secs(-10)),
            unmarshall(DateUnmarshaller, "-10").unwrap()
        );
        assert!(unmarshall(DateUnmarshaller, "\"last week\"").is_err());
        assert!(unmarshall(DateUnmarshaller, "true").is_err());
    }

    #[test]
    fn dates_out_of_range() {
        let err = unmarshall(DateUnmarshaller, "18446744073709551615").unwrap_err();
        assert_eq!(Some(0), err.offset());
        assert!(unmarshall(DateUnmarshaller, "1e300").is_err());
        assert_eq!(
            Some(DateTime::from_secs(i64::MAX)),
            unmarshall(DateUnmarshaller, "9223372036854775807").unwrap()
        );
    }

    #[test]
    fn end_of_stream_is_an_error() {
        assert!(unmarshall(StringUnmarshaller, "").is_err());
    }
}
