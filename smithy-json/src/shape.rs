/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Declarative shapes: one member table per structure drives both reading and writing.

use crate::cursor::JsonCursor;
use crate::deserialize::error::DeserializeError;
use crate::serialize::{JsonObjectWriter, JsonValueWriter, SerializeError};
use crate::unmarshall::{
    BooleanUnmarshaller, DateUnmarshaller, DoubleUnmarshaller, IntegerUnmarshaller,
    ListUnmarshaller, LongUnmarshaller, MapUnmarshaller, StringUnmarshaller, Unmarshaller,
};
use indexmap::IndexMap;
use smithy_types::date_time::Format;
use smithy_types::{DateTime, Number};

/// A type with a JSON wire representation.
pub trait JsonShape: Sized {
    type Unmarshaller: Unmarshaller<Output = Self>;

    const UNMARSHALLER: Self::Unmarshaller;

    /// Writes `self` as exactly one JSON value.
    fn marshall(&self, writer: JsonValueWriter<'_>) -> Result<(), SerializeError>;
}

/// One named field of a [`Structure`].
pub struct Member<T: 'static> {
    /// Key used on the wire.
    pub name: &'static str,
    /// Reads the value under the cursor into the field. The cursor is on the value's first token.
    pub read: fn(&mut T, &mut JsonCursor<'_>) -> Result<(), DeserializeError>,
    /// Writes `name` and the field's value when the field is set.
    pub write: fn(&T, &mut JsonObjectWriter<'_>) -> Result<(), SerializeError>,
}

/// A JSON object with a fixed set of members.
///
/// Members are written in table order. Structures are usually declared with
/// [`structure!`](crate::structure).
pub trait Structure: Default + 'static {
    const MEMBERS: &'static [Member<Self>];
}

/// Reads a member value with the unmarshaller of its type.
pub fn read_member<T: JsonShape>(
    cursor: &mut JsonCursor<'_>,
) -> Result<Option<T>, DeserializeError> {
    T::UNMARSHALLER.unmarshall(cursor)
}

/// Writes `name: value` when `value` is set; unset members are left out of the object.
pub fn write_member<T: JsonShape>(
    object: &mut JsonObjectWriter<'_>,
    name: &str,
    value: Option<&T>,
) -> Result<(), SerializeError> {
    if let Some(value) = value {
        value.marshall(object.key(name))?;
    }
    Ok(())
}

pub fn marshall_structure<T: Structure>(
    value: &T,
    writer: JsonValueWriter<'_>,
) -> Result<(), SerializeError> {
    let mut object = writer.start_object();
    for member in T::MEMBERS {
        (member.write)(value, &mut object)?;
    }
    object.finish();
    Ok(())
}

/// Unmarshalls a complete document.
///
/// An empty body yields `T::default()` and `null` yields `None`. Anything after the top-level
/// value is an error.
pub fn unmarshall_document<T: JsonShape + Default>(
    input: &[u8],
) -> Result<Option<T>, DeserializeError> {
    if input.iter().all(u8::is_ascii_whitespace) {
        return Ok(Some(T::default()));
    }
    let mut cursor = JsonCursor::new(input)?;
    let value = T::UNMARSHALLER.unmarshall(&mut cursor)?;
    cursor.next_token()?;
    match cursor.current_token() {
        None => Ok(value),
        Some(token) => Err(token.error("found more JSON tokens after completing parsing".into())),
    }
}

/// Writes `value` as a standalone JSON document.
pub fn marshall_document<T: JsonShape>(value: &T) -> Result<String, SerializeError> {
    let mut output = String::new();
    value.marshall(JsonValueWriter::new(&mut output))?;
    Ok(output)
}

impl JsonShape for String {
    type Unmarshaller = StringUnmarshaller;
    const UNMARSHALLER: StringUnmarshaller = StringUnmarshaller;

    fn marshall(&self, writer: JsonValueWriter<'_>) -> Result<(), SerializeError> {
        writer.string(self);
        Ok(())
    }
}

impl JsonShape for i32 {
    type Unmarshaller = IntegerUnmarshaller;
    const UNMARSHALLER: IntegerUnmarshaller = IntegerUnmarshaller;

    fn marshall(&self, writer: JsonValueWriter<'_>) -> Result<(), SerializeError> {
        writer.number(Number::from(*self));
        Ok(())
    }
}

impl JsonShape for i64 {
    type Unmarshaller = LongUnmarshaller;
    const UNMARSHALLER: LongUnmarshaller = LongUnmarshaller;

    fn marshall(&self, writer: JsonValueWriter<'_>) -> Result<(), SerializeError> {
        writer.number(Number::from(*self));
        Ok(())
    }
}

impl JsonShape for f64 {
    type Unmarshaller = DoubleUnmarshaller;
    const UNMARSHALLER: DoubleUnmarshaller = DoubleUnmarshaller;

    fn marshall(&self, writer: JsonValueWriter<'_>) -> Result<(), SerializeError> {
        writer.number(Number::Float(*self));
        Ok(())
    }
}

impl JsonShape for bool {
    type Unmarshaller = BooleanUnmarshaller;
    const UNMARSHALLER: BooleanUnmarshaller = BooleanUnmarshaller;

    fn marshall(&self, writer: JsonValueWriter<'_>) -> Result<(), SerializeError> {
        writer.boolean(*self);
        Ok(())
    }
}

impl JsonShape for DateTime {
    type Unmarshaller = DateUnmarshaller;
    const UNMARSHALLER: DateUnmarshaller = DateUnmarshaller;

    fn marshall(&self, writer: JsonValueWriter<'_>) -> Result<(), SerializeError> {
        writer.date_time(self, Format::EpochSeconds)?;
        Ok(())
    }
}

impl<T: JsonShape> JsonShape for Vec<T> {
    type Unmarshaller = ListUnmarshaller<T::Unmarshaller>;
    const UNMARSHALLER: Self::Unmarshaller = ListUnmarshaller::new(T::UNMARSHALLER);

    fn marshall(&self, writer: JsonValueWriter<'_>) -> Result<(), SerializeError> {
        let mut array = writer.start_array();
        for element in self {
            element.marshall(array.value())?;
        }
        array.finish();
        Ok(())
    }
}

impl<T: JsonShape> JsonShape for IndexMap<String, T> {
    type Unmarshaller = MapUnmarshaller<T::Unmarshaller>;
    const UNMARSHALLER: Self::Unmarshaller = MapUnmarshaller::new(T::UNMARSHALLER);

    fn marshall(&self, writer: JsonValueWriter<'_>) -> Result<(), SerializeError> {
        let mut object = writer.start_object();
        for (key, value) in self {
            value.marshall(object.key(key))?;
        }
        object.finish();
        Ok(())
    }
}

/// Declares a model structure: a struct of optional fields, its member table, builder-style
/// setters, and its [`JsonShape`] implementation.
///
/// Each field is written as `field: Type => "WireName"`. Declaration order is wire order.
#[macro_export]
macro_rules! structure {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: ::std::option::Option<$ty>,
            )*
        }

        impl $name {
            $(
                #[allow(dead_code)]
                pub fn $field(mut self, value: impl ::std::convert::Into<$ty>) -> Self {
                    self.$field = ::std::option::Option::Some(value.into());
                    self
                }
            )*
        }

        impl $crate::shape::Structure for $name {
            const MEMBERS: &'static [$crate::shape::Member<Self>] = &[
                $(
                    $crate::shape::Member {
                        name: $wire,
                        read: |value, cursor| {
                            value.$field = $crate::shape::read_member::<$ty>(cursor)?;
                            ::std::result::Result::Ok(())
                        },
                        write: |value, object| {
                            $crate::shape::write_member::<$ty>(object, $wire, value.$field.as_ref())
                        },
                    },
                )*
            ];
        }

        impl $crate::shape::JsonShape for $name {
            type Unmarshaller = $crate::unmarshall::StructureUnmarshaller<Self>;
            const UNMARSHALLER: Self::Unmarshaller =
                $crate::unmarshall::StructureUnmarshaller::new();

            fn marshall(
                &self,
                writer: $crate::serialize::JsonValueWriter<'_>,
            ) -> ::std::result::Result<(), $crate::serialize::SerializeError> {
                $crate::shape::marshall_structure(self, writer)
            }
        }
    };
}
