/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Timestamp type with the wire formats used by AWS protocols.

use chrono::{SecondsFormat, TimeZone, Utc};
use std::fmt;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Point in time, stored as seconds since the Unix epoch plus a sub-second nanosecond component.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

/// Wire representations for [`DateTime`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// Seconds since the epoch with an optional fraction, e.g. `1576540098.52`
    EpochSeconds,
}

#[derive(Debug, PartialEq, Eq)]
enum DateTimeErrorKind {
    Invalid(String),
    OutOfRange,
}

/// Failure to parse or format a [`DateTime`].
#[derive(Debug, PartialEq, Eq)]
pub struct DateTimeError {
    kind: DateTimeErrorKind,
}

impl DateTimeError {
    fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: DateTimeErrorKind::Invalid(message.into()),
        }
    }

    fn out_of_range() -> Self {
        Self {
            kind: DateTimeErrorKind::OutOfRange,
        }
    }
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DateTimeErrorKind::Invalid(message) => write!(f, "invalid timestamp: {}", message),
            DateTimeErrorKind::OutOfRange => write!(f, "timestamp is out of the supported range"),
        }
    }
}

impl std::error::Error for DateTimeError {}

impl DateTime {
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        DateTime {
            seconds: seconds + (subsecond_nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    /// Builds a `DateTime` from fractional epoch seconds, rounding to the nearest microsecond
    /// so that values like `1576540098.52` survive the trip through `f64`.
    pub fn from_secs_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        let micros = ((epoch_seconds - seconds) * 1_000_000_f64).round() as u32;
        DateTime::from_secs_and_nanos(seconds as i64, micros * 1_000)
    }

    pub fn secs(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Parses `value` according to `format`.
    pub fn from_str(value: &str, format: Format) -> Result<Self, DateTimeError> {
        match format {
            Format::EpochSeconds => parse_epoch_seconds(value),
            Format::DateTime => chrono::DateTime::parse_from_rfc3339(value)
                .map(|parsed| {
                    DateTime::from_secs_and_nanos(
                        parsed.timestamp(),
                        parsed.timestamp_subsec_nanos(),
                    )
                })
                .map_err(|err| DateTimeError::invalid(err.to_string())),
        }
    }

    /// Formats the timestamp according to `format`.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeError> {
        match format {
            Format::EpochSeconds => Ok(if self.subsecond_nanos == 0 {
                format!("{}", self.seconds)
            } else if self.seconds < 0 {
                let fraction = format!("{:0>9}", NANOS_PER_SECOND - self.subsecond_nanos);
                format!("-{}.{}", -(self.seconds + 1), fraction.trim_end_matches('0'))
            } else {
                let fraction = format!("{:0>9}", self.subsecond_nanos);
                format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
            }),
            Format::DateTime => {
                let rfc3339 = self
                    .to_chrono()?
                    .to_rfc3339_opts(SecondsFormat::AutoSi, true);
                // AutoSi pads the fraction to 3, 6 or 9 digits
                match rfc3339.find('.') {
                    Some(_) => {
                        let mut trimmed = rfc3339
                            .trim_end_matches('Z')
                            .trim_end_matches('0')
                            .to_owned();
                        trimmed.push('Z');
                        Ok(trimmed)
                    }
                    None => Ok(rfc3339),
                }
            }
        }
    }

    fn to_chrono(&self) -> Result<chrono::DateTime<Utc>, DateTimeError> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos)
            .single()
            .ok_or_else(DateTimeError::out_of_range)
    }
}

fn parse_epoch_seconds(value: &str) -> Result<DateTime, DateTimeError> {
    let (whole, fraction) = match value.find('.') {
        Some(idx) => (&value[..idx], &value[idx + 1..]),
        None => (value, ""),
    };
    let seconds: i64 = whole
        .parse()
        .map_err(|_| DateTimeError::invalid(format!("`{}` is not epoch seconds", value)))?;
    if fraction.is_empty() {
        return Ok(DateTime::from_secs(seconds));
    }
    if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateTimeError::invalid(format!(
            "`{}` has an invalid fractional part",
            value
        )));
    }
    let mut nanos: u32 = fraction
        .parse()
        .map_err(|_| DateTimeError::invalid(format!("`{}` is not epoch seconds", value)))?;
    for _ in fraction.len()..9 {
        nanos *= 10;
    }
    if whole.starts_with('-') {
        // -1.5 is one and a half seconds before the epoch
        if nanos == 0 {
            return Ok(DateTime::from_secs(seconds));
        }
        return Ok(DateTime::from_secs_and_nanos(
            seconds - 1,
            NANOS_PER_SECOND - nanos,
        ));
    }
    Ok(DateTime::from_secs_and_nanos(seconds, nanos))
}

#[cfg(test)]
mod test {
    use super::{DateTime, Format};
    use proptest::proptest;

    #[test]
    fn format_timestamps() {
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540098");

        let date_time = DateTime::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(
            date_time.fmt(Format::EpochSeconds).unwrap(),
            "1576540098.52"
        );
    }

    #[test]
    fn parse_timestamps() {
        let expected = DateTime::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(
            Ok(expected),
            DateTime::from_str("1576540098.52", Format::EpochSeconds)
        );
        assert_eq!(
            Ok(expected),
            DateTime::from_str("2019-12-16T23:48:18.52Z", Format::DateTime)
        );
        assert_eq!(
            Ok(DateTime::from_secs_and_nanos(-2, 500_000_000)),
            DateTime::from_str("-1.5", Format::EpochSeconds)
        );
        assert_eq!(
            "-1.5",
            DateTime::from_secs_and_nanos(-2, 500_000_000)
                .fmt(Format::EpochSeconds)
                .unwrap()
        );
        assert!(DateTime::from_str("12a", Format::EpochSeconds).is_err());
        assert!(DateTime::from_str("1.1234567891", Format::EpochSeconds).is_err());
        assert!(DateTime::from_str("yesterday", Format::DateTime).is_err());
    }

    #[test]
    fn fractional_seconds_round_to_micros() {
        let date_time = DateTime::from_secs_f64(1576540098.52);
        assert_eq!(1576540098, date_time.secs());
        assert_eq!(520_000_000, date_time.subsec_nanos());
    }

    proptest! {
        #[test]
        fn epoch_seconds_round_trip(seconds in 0i64..253402300799, nanos in 0u32..1_000_000_000) {
            let date_time = DateTime::from_secs_and_nanos(seconds, nanos);
            let formatted = date_time.fmt(Format::EpochSeconds).unwrap();
            assert_eq!(Ok(date_time), DateTime::from_str(&formatted, Format::EpochSeconds));
        }
    }
}
