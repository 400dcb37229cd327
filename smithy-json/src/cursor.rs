/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Forward-only cursor over a JSON token stream that tracks nesting depth and the
//! field names enclosing the current token.
//!
//! Every `StartObject`/`StartArray` token opens a scope. The scope becomes active once the
//! cursor moves past its start token and is closed when the cursor lands on the matching end
//! token, so start and end tokens of a value report the same depth, and the keys inside an
//! object report one more. Each scope is labelled with the field name whose value it is;
//! elements of an array share the array's label.

use crate::deserialize::error::DeserializeError;
use crate::deserialize::{json_token_iter, JsonTokenIterator, Token};
use std::borrow::Cow;

/// Identifies one scope opened by the cursor. Ids are never reused within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Debug, Clone)]
struct Scope<'a> {
    id: ScopeId,
    label: Option<Cow<'a, str>>,
    inherited: bool,
}

pub struct JsonCursor<'a> {
    tokens: JsonTokenIterator<'a>,
    current: Option<Token<'a>>,
    key: Option<Cow<'a, str>>,
    scopes: Vec<Scope<'a>>,
    opening: Option<Scope<'a>>,
    closed: Option<Scope<'a>>,
    next_id: usize,
}

impl<'a> JsonCursor<'a> {
    /// Creates a cursor positioned on the first token of `input`.
    pub fn new(input: &'a [u8]) -> Result<Self, DeserializeError> {
        let mut cursor = JsonCursor {
            tokens: json_token_iter(input),
            current: None,
            key: None,
            scopes: Vec::new(),
            opening: None,
            closed: None,
            next_id: 0,
        };
        cursor.next_token()?;
        Ok(cursor)
    }

    /// Token under the cursor, or `None` once the stream is exhausted.
    pub fn current_token(&self) -> Option<&Token<'a>> {
        self.current.as_ref()
    }

    /// Advances by exactly one token.
    pub fn next_token(&mut self) -> Result<(), DeserializeError> {
        if let Some(scope) = self.opening.take() {
            self.scopes.push(scope);
        }
        let preceding_key = self.key.take();
        self.closed = None;

        let token = self.tokens.next().transpose()?;
        match &token {
            Some(Token::StartObject { .. }) | Some(Token::StartArray { .. }) => {
                let (label, inherited) = match preceding_key {
                    Some(key) => (Some(key), false),
                    None => (self.scopes.last().and_then(|s| s.label.clone()), true),
                };
                self.opening = Some(Scope {
                    id: ScopeId(self.next_id),
                    label,
                    inherited,
                });
                self.next_id += 1;
            }
            Some(token @ Token::EndObject { .. }) | Some(token @ Token::EndArray { .. }) => {
                let scope = self
                    .scopes
                    .pop()
                    .ok_or_else(|| token.error("end token without an open scope".into()))?;
                self.closed = Some(scope);
            }
            Some(Token::ObjectKey { key, offset }) => {
                let key = key
                    .to_unescaped()
                    .map_err(|err| DeserializeError::from(err).with_offset(offset.0))?;
                self.key = Some(key);
            }
            _ => {}
        }
        self.current = token;
        Ok(())
    }

    /// Number of open scopes enclosing the current token.
    pub fn current_depth(&self) -> usize {
        self.scopes.len()
    }

    /// Field name of the innermost open scope. `None` at the root.
    pub fn current_parent_element(&self) -> Option<&str> {
        self.scopes.last().and_then(|scope| scope.label.as_deref())
    }

    /// Field name of the scope closed by the current end token.
    ///
    /// Only set while the cursor sits on an `EndObject`/`EndArray` token.
    pub fn last_parsed_parent_element(&self) -> Option<&str> {
        self.closed.as_ref().and_then(|scope| scope.label.as_deref())
    }

    /// Unescaped key when the cursor is on an `ObjectKey` token.
    pub fn current_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns true if the cursor is on the key `name` at `target_depth`.
    pub fn test_expression(&self, name: &str, target_depth: usize) -> bool {
        self.current_key() == Some(name) && self.current_depth() == target_depth
    }

    /// Scope that will open when the cursor moves past the current start token.
    pub fn opening_scope(&self) -> Option<ScopeId> {
        self.opening.as_ref().map(|scope| scope.id)
    }

    /// Innermost open scope.
    pub fn innermost_scope(&self) -> Option<ScopeId> {
        self.scopes.last().map(|scope| scope.id)
    }

    /// Scope closed by the current end token.
    pub fn closed_scope(&self) -> Option<ScopeId> {
        self.closed.as_ref().map(|scope| scope.id)
    }

    /// Dotted path of field names leading to the current token, e.g. `Stack.Attributes.Color`.
    pub fn current_path(&self) -> String {
        let mut path = String::new();
        let labels = self
            .scopes
            .iter()
            .filter(|scope| !scope.inherited)
            .filter_map(|scope| scope.label.as_deref())
            .chain(self.current_key());
        for label in labels {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(label);
        }
        path
    }
}
