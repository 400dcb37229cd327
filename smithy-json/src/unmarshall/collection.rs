/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{expect_token, Unmarshaller};
use crate::cursor::JsonCursor;
use crate::deserialize::error::DeserializeError;
use crate::deserialize::Token;
use indexmap::IndexMap;

/// Unmarshalls a JSON array by running `U` once per element.
///
/// `[]` yields an empty, present list. Null elements are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListUnmarshaller<U> {
    element: U,
}

impl<U> ListUnmarshaller<U> {
    pub const fn new(element: U) -> Self {
        ListUnmarshaller { element }
    }
}

impl<U: Unmarshaller> Unmarshaller for ListUnmarshaller<U> {
    type Output = Vec<U::Output>;

    fn unmarshall(
        &self,
        cursor: &mut JsonCursor<'_>,
    ) -> Result<Option<Self::Output>, DeserializeError> {
        match expect_token(cursor)? {
            Token::ValueNull { .. } => return Ok(None),
            Token::StartArray { .. } => {}
            token => return Err(token.error("expected array".into())),
        }
        let own_scope = cursor.opening_scope();
        cursor.next_token()?;

        let mut list = Vec::new();
        loop {
            match expect_token(cursor)? {
                Token::EndArray { .. } if cursor.closed_scope() == own_scope => break,
                _ => {
                    if let Some(element) = self.element.unmarshall(cursor)? {
                        list.push(element);
                    }
                }
            }
            cursor.next_token()?;
        }
        Ok(Some(list))
    }
}

/// Unmarshalls a JSON object with arbitrary keys by running `U` once per value.
///
/// Entries keep the order they appear in the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapUnmarshaller<U> {
    value: U,
}

impl<U> MapUnmarshaller<U> {
    pub const fn new(value: U) -> Self {
        MapUnmarshaller { value }
    }
}

impl<U: Unmarshaller> Unmarshaller for MapUnmarshaller<U> {
    type Output = IndexMap<String, U::Output>;

    fn unmarshall(
        &self,
        cursor: &mut JsonCursor<'_>,
    ) -> Result<Option<Self::Output>, DeserializeError> {
        match expect_token(cursor)? {
            Token::ValueNull { .. } => return Ok(None),
            Token::StartObject { .. } => {}
            token => return Err(token.error("expected object".into())),
        }
        let own_scope = cursor.opening_scope();
        cursor.next_token()?;

        let mut map = IndexMap::new();
        loop {
            match expect_token(cursor)? {
                Token::EndObject { .. } if cursor.closed_scope() == own_scope => break,
                Token::ObjectKey { .. } => {}
                token => return Err(token.error("expected object key".into())),
            }
            let key = cursor.current_key().unwrap_or_default().to_owned();
            cursor.next_token()?;
            if let Some(value) = self.value.unmarshall(cursor)? {
                map.insert(key, value);
            }
            cursor.next_token()?;
        }
        Ok(Some(map))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::unmarshall::{IntegerUnmarshaller, StringUnmarshaller};

    const STRING_LIST: ListUnmarshaller<StringUnmarshaller> =
        ListUnmarshaller::new(StringUnmarshaller);
    const NESTED_LIST: ListUnmarshaller<ListUnmarshaller<IntegerUnmarshaller>> =
        ListUnmarshaller::new(ListUnmarshaller::new(IntegerUnmarshaller));
    const INT_MAP: MapUnmarshaller<IntegerUnmarshaller> =
        MapUnmarshaller::new(IntegerUnmarshaller);

    fn unmarshall<U: Unmarshaller>(
        unmarshaller: &U,
        input: &str,
    ) -> Result<Option<U::Output>, DeserializeError> {
        let mut cursor = JsonCursor::new(input.as_bytes())?;
        let value = unmarshaller.unmarshall(&mut cursor)?;
        cursor.next_token()?;
        assert!(cursor.current_token().is_none(), "value left tokens behind");
        Ok(value)
    }

    #[test]
    fn empty_list_is_present() {
        assert_eq!(Some(vec![]), unmarshall(&STRING_LIST, "[]").unwrap());
        assert_eq!(None, unmarshall(&STRING_LIST, "null").unwrap());
    }

    #[test]
    fn list_of_strings() {
        assert_eq!(
            Some(vec!["a".to_string(), "b".to_string()]),
            unmarshall(&STRING_LIST, r#"["a", null, "b"]"#).unwrap()
        );
    }

    #[test]
    fn nested_lists() {
        assert_eq!(
            Some(vec![vec![], vec![1], vec![2, 3]]),
            unmarshall(&NESTED_LIST, "[[], [1], [2, 3]]").unwrap()
        );
    }

    #[test]
    fn map_keeps_document_order() {
        let map = unmarshall(&INT_MAP, r#"{"z": 1, "a": 2, "m": 3}"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            vec!["z", "a", "m"],
            map.keys().map(String::as_str).collect::<Vec<_>>()
        );
        assert_eq!(Some(&2), map.get("a"));
        assert_eq!(Some(IndexMap::new()), unmarshall(&INT_MAP, "{}").unwrap());
    }

    #[test]
    fn map_of_lists() {
        let unmarshaller = MapUnmarshaller::new(STRING_LIST);
        let map = unmarshall(&unmarshaller, r#"{"tags": ["x"], "empty": []}"#)
            .unwrap()
            .unwrap();
        assert_eq!(Some(&vec!["x".to_string()]), map.get("tags"));
        assert_eq!(Some(&vec![]), map.get("empty"));
    }

    #[test]
    fn wrong_container_is_an_error() {
        assert!(unmarshall(&STRING_LIST, "{}").is_err());
        assert!(unmarshall(&INT_MAP, "[]").is_err());
        assert!(unmarshall(&STRING_LIST, "[1]").is_err());
        assert!(unmarshall(&STRING_LIST, r#"["a""#).is_err());
    }
}
