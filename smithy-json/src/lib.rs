/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON support for AWS JSON protocol clients.
//!
//! The read side is a token stream ([`deserialize::json_token_iter`]) wrapped in a
//! depth-tracking [`cursor::JsonCursor`], driven by the [`unmarshall`] module. The write side
//! streams directly into a `String` through the writers in [`serialize`]. [`shape`] ties both
//! together: a structure declares its members once and gets both directions.

pub mod cursor;
pub mod deserialize;
mod escape;
pub mod serialize;
pub mod shape;
pub mod unmarshall;
