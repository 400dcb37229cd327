/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::convert::TryFrom;
use std::fmt;

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Converts to an `f64`. Large integers may lose precision.
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum TryFromNumberErrorKind {
    OutsideIntegerRange,
    FloatToIntegerLossyConversion,
}

/// The error returned when a [`Number`] doesn't fit the requested integer type without loss.
#[derive(Debug, PartialEq)]
pub struct TryFromNumberError {
    kind: TryFromNumberErrorKind,
    value: Number,
}

impl fmt::Display for TryFromNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TryFromNumberErrorKind::OutsideIntegerRange => {
                write!(f, "{:?} is outside the range of the target integer", self.value)
            }
            TryFromNumberErrorKind::FloatToIntegerLossyConversion => write!(
                f,
                "cannot convert floating point number {:?} into an integer",
                self.value
            ),
        }
    }
}

impl std::error::Error for TryFromNumberError {}

macro_rules! to_int {
    ($typ:ident) => {
        impl TryFrom<Number> for $typ {
            type Error = TryFromNumberError;

            fn try_from(value: Number) -> Result<Self, Self::Error> {
                let out_of_range = || TryFromNumberError {
                    kind: TryFromNumberErrorKind::OutsideIntegerRange,
                    value,
                };
                match value {
                    Number::PosInt(v) => $typ::try_from(v).map_err(|_| out_of_range()),
                    Number::NegInt(v) => $typ::try_from(v).map_err(|_| out_of_range()),
                    Number::Float(_) => Err(TryFromNumberError {
                        kind: TryFromNumberErrorKind::FloatToIntegerLossyConversion,
                        value,
                    }),
                }
            }
        }
    };
}

to_int!(i32);
to_int!(i64);

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value < 0 {
            Number::NegInt(value)
        } else {
            Number::PosInt(value as u64)
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

#[cfg(test)]
mod test {
    use super::Number;
    use std::convert::TryFrom;

    #[test]
    fn integer_conversions() {
        assert_eq!(Ok(5), i32::try_from(Number::PosInt(5)));
        assert_eq!(Ok(-5), i64::try_from(Number::NegInt(-5)));
        assert!(i32::try_from(Number::PosInt(u64::from(u32::MAX))).is_err());
        assert!(i64::try_from(Number::PosInt(u64::MAX)).is_err());
        assert!(i32::try_from(Number::Float(1.5)).is_err());
    }

    #[test]
    fn signed_construction() {
        assert_eq!(Number::PosInt(0), Number::from(0_i32));
        assert_eq!(Number::NegInt(-1), Number::from(-1_i64));
        assert_eq!(Number::Float(0.5), Number::from(0.5));
    }
}
