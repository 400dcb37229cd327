/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Unmarshallers turn the value under a [`JsonCursor`] into a typed value.
//!
//! Every unmarshaller expects the cursor on the first token of its value and leaves it on the
//! last one: the scalar token itself, or the end token of an object or array. Callers advance
//! past that token. A JSON `null` yields `Ok(None)`.
//!
//! Unmarshallers hold no per-call state, so each is a plain value that can live in a `const`.

mod collection;
mod scalar;
mod structure;

use crate::cursor::JsonCursor;
use crate::deserialize::error::{DeserializeError, ErrorKind};
use crate::deserialize::Token;

pub use collection::{ListUnmarshaller, MapUnmarshaller};
pub use scalar::{
    BooleanUnmarshaller, DateUnmarshaller, DoubleUnmarshaller, IntegerUnmarshaller,
    LongUnmarshaller, StringUnmarshaller,
};
pub use structure::StructureUnmarshaller;

pub trait Unmarshaller {
    type Output;

    fn unmarshall(
        &self,
        cursor: &mut JsonCursor<'_>,
    ) -> Result<Option<Self::Output>, DeserializeError>;
}

impl<U: Unmarshaller + ?Sized> Unmarshaller for &U {
    type Output = U::Output;

    fn unmarshall(
        &self,
        cursor: &mut JsonCursor<'_>,
    ) -> Result<Option<Self::Output>, DeserializeError> {
        (**self).unmarshall(cursor)
    }
}

/// Returns the token under the cursor, failing at the end of the stream.
fn expect_token<'c, 'a>(cursor: &'c JsonCursor<'a>) -> Result<&'c Token<'a>, DeserializeError> {
    cursor
        .current_token()
        .ok_or_else(|| DeserializeError::new(ErrorKind::UnexpectedEos, None))
}
