/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::escape::escape_string;
use smithy_types::date_time::{DateTimeError, Format};
use smithy_types::{DateTime, Number};
use std::fmt;

/// Failure to write a value into a JSON document.
#[derive(Debug)]
pub struct SerializeError {
    kind: SerializeErrorKind,
}

#[derive(Debug)]
enum SerializeErrorKind {
    InvalidTimestamp(DateTimeError),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SerializeErrorKind::InvalidTimestamp(_) => write!(f, "timestamp cannot be serialized"),
        }
    }
}

impl std::error::Error for SerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            SerializeErrorKind::InvalidTimestamp(source) => Some(source),
        }
    }
}

impl From<DateTimeError> for SerializeError {
    fn from(err: DateTimeError) -> Self {
        SerializeError {
            kind: SerializeErrorKind::InvalidTimestamp(err),
        }
    }
}

/// Writes exactly one JSON value into the output.
pub struct JsonValueWriter<'a> {
    output: &'a mut String,
}

impl<'a> JsonValueWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        JsonValueWriter { output }
    }

    /// Writes a null value.
    pub fn null(self) {
        self.output.push_str("null");
    }

    /// Writes the boolean `value`.
    pub fn boolean(self, value: bool) {
        self.output.push_str(match value {
            true => "true",
            _ => "false",
        });
    }

    /// Writes a string `value`.
    pub fn string(self, value: &str) {
        append_string(self.output, value);
    }

    /// Writes a number `value`.
    pub fn number(self, value: Number) {
        append_number(self.output, value);
    }

    /// Writes a timestamp in the given `format`. Epoch seconds are written as a JSON number,
    /// every other format as a string.
    pub fn date_time(self, value: &DateTime, format: Format) -> Result<(), DateTimeError> {
        let formatted = value.fmt(format)?;
        match format {
            Format::EpochSeconds => self.output.push_str(&formatted),
            _ => append_string(self.output, &formatted),
        }
        Ok(())
    }

    /// Starts an array.
    pub fn start_array(self) -> JsonArrayWriter<'a> {
        JsonArrayWriter::new(self.output)
    }

    /// Starts an object.
    pub fn start_object(self) -> JsonObjectWriter<'a> {
        JsonObjectWriter::new(self.output)
    }
}

pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Starts a value with the given `key`.
    pub fn key(&mut self, key: &str) -> JsonValueWriter<'_> {
        if self.started {
            self.json.push(',');
        }
        self.started = true;

        self.json.push('"');
        self.json.push_str(&escape_string(key));
        self.json.push_str("\":");

        JsonValueWriter::new(self.json)
    }

    /// Finishes the object.
    pub fn finish(self) {
        self.json.push('}');
    }
}

pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    /// Starts a new value in the array.
    pub fn value(&mut self) -> JsonValueWriter<'_> {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        JsonValueWriter::new(self.json)
    }

    /// Finishes the array.
    pub fn finish(self) {
        self.json.push(']');
    }
}

fn append_string(json: &mut String, value: &str) {
    append_string_unchecked(json, &escape_string(value));
}

fn append_string_unchecked(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(value);
    json.push('"');
}

fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::NegInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::Float(value) => {
            if value.is_nan() {
                json.push_str("\"NaN\"");
            } else if value.is_infinite() {
                json.push_str(if value.is_sign_positive() {
                    "\"Infinity\""
                } else {
                    "\"-Infinity\""
                });
            } else {
                json.push_str(ryu::Buffer::new().format_finite(value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonArrayWriter, JsonObjectWriter, JsonValueWriter};
    use proptest::proptest;
    use smithy_types::date_time::Format;
    use smithy_types::{DateTime, Number};

    #[test]
    fn empty() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", &output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", &output);
    }

    #[test]
    fn object_inside_array() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        array.value().start_object().finish();
        array.value().start_object().finish();
        array.value().start_object().finish();
        array.finish();
        assert_eq!("[{},{},{}]", &output);
    }

    #[test]
    fn object_inside_object() {
        let mut output = String::new();
        let mut obj_1 = JsonObjectWriter::new(&mut output);

        let mut obj_2 = obj_1.key("nested").start_object();
        obj_2.key("test").string("test");
        obj_2.finish();

        obj_1.finish();
        assert_eq!(r#"{"nested":{"test":"test"}}"#, &output);
    }

    #[test]
    fn array_inside_object() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("foo").start_array().finish();
        object.key("ba\nr").start_array().finish();
        object.finish();
        assert_eq!(r#"{"foo":[],"ba\nr":[]}"#, &output);
    }

    #[test]
    fn object_scalars() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.key("a").null();
        object.key("b").boolean(false);
        object.key("c").string("q\"uote");
        object.key("d").number(Number::NegInt(-5));
        object.key("e").number(Number::Float(0.5));
        object.finish();
        assert_eq!(
            r#"{"a":null,"b":false,"c":"q\"uote","d":-5,"e":0.5}"#,
            &output
        );
    }

    #[test]
    fn non_finite_floats_are_strings() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        array.value().number(Number::Float(f64::NAN));
        array.value().number(Number::Float(f64::INFINITY));
        array.value().number(Number::Float(f64::NEG_INFINITY));
        array.finish();
        assert_eq!(r#"["NaN","Infinity","-Infinity"]"#, &output);
    }

    #[test]
    fn date_times() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        let date_time = DateTime::from_secs_and_nanos(1576540098, 520_000_000);
        array
            .value()
            .date_time(&date_time, Format::EpochSeconds)
            .unwrap();
        array.value().date_time(&date_time, Format::DateTime).unwrap();
        array.finish();
        assert_eq!(r#"[1576540098.52,"2019-12-16T23:48:18.52Z"]"#, &output);
    }

    fn format_number(number: Number) -> String {
        let mut output = String::new();
        JsonValueWriter::new(&mut output).number(number);
        output
    }

    proptest! {
        #[test]
        fn matches_serde_json_pos_int(value: u64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_number(Number::PosInt(value)),
            )
        }

        #[test]
        fn matches_serde_json_neg_int(value: i64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_number(Number::NegInt(value)),
            )
        }

        #[test]
        fn finite_floats_parse_back(value in proptest::num::f64::NORMAL) {
            let formatted = format_number(Number::Float(value));
            let parsed: f64 = serde_json::from_str(&formatted).unwrap();
            assert_eq!(value, parsed);
        }
    }
}
