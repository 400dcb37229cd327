/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{expect_token, Unmarshaller};
use crate::cursor::JsonCursor;
use crate::deserialize::error::DeserializeError;
use crate::deserialize::Token;
use crate::shape::Structure;
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

/// Unmarshalls a JSON object into `T` by matching keys against `T::MEMBERS`.
///
/// A key is admitted only when it sits directly inside the object this unmarshaller opened,
/// one level below the object's own depth. Keys that match no member are skipped along with
/// their values.
pub struct StructureUnmarshaller<T>(PhantomData<fn() -> T>);

impl<T> StructureUnmarshaller<T> {
    pub const fn new() -> Self {
        StructureUnmarshaller(PhantomData)
    }
}

impl<T> Clone for StructureUnmarshaller<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StructureUnmarshaller<T> {}

impl<T> Default for StructureUnmarshaller<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for StructureUnmarshaller<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StructureUnmarshaller")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}

impl<T: Structure> Unmarshaller for StructureUnmarshaller<T> {
    type Output = T;

    fn unmarshall(&self, cursor: &mut JsonCursor<'_>) -> Result<Option<T>, DeserializeError> {
        match expect_token(cursor)? {
            Token::ValueNull { .. } => return Ok(None),
            Token::StartObject { .. } => {}
            token => return Err(token.error("expected object".into())),
        }
        let original_depth = cursor.current_depth();
        let target_depth = original_depth + 1;
        let own_scope = cursor.opening_scope();
        cursor.next_token()?;

        let mut value = T::default();
        loop {
            match expect_token(cursor)? {
                Token::ObjectKey { .. } if cursor.innermost_scope() == own_scope => {
                    let member = T::MEMBERS
                        .iter()
                        .find(|member| cursor.test_expression(member.name, target_depth));
                    match member {
                        Some(member) => {
                            cursor.next_token()?;
                            (member.read)(&mut value, cursor)?;
                        }
                        None => trace!(path = %cursor.current_path(), "skipping unknown member"),
                    }
                }
                token if token.is_end() => {
                    if cursor.current_depth() <= original_depth
                        && cursor.closed_scope() == own_scope
                    {
                        break;
                    }
                }
                _ => {}
            }
            cursor.next_token()?;
        }
        Ok(Some(value))
    }
}
