/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS JSON 1.0 / 1.1 protocol support.
//!
//! Every operation is a `POST /` whose `X-Amz-Target` header names the operation and whose body
//! is a single JSON document. Service crates describe themselves with [`operation::JsonService`]
//! and [`operation::JsonOperation`]; this crate does the rest:
//!
//! - [`marshall::JsonMarshaller`] builds the HTTP request,
//! - [`response::JsonResponseHandler`] unmarshalls results and service errors,
//! - [`Client`] runs the pipeline over a [`transport::Transport`], blocking or on Tokio's
//!   blocking pool.

pub mod client;
pub mod config;
pub mod error;
pub mod marshall;
pub mod operation;
pub mod response;
#[cfg(any(test, feature = "test-util"))]
pub mod test_connection;
pub mod transport;

pub use client::Client;
pub use config::{Config, Region};
pub use error::GenericError;
pub use smithy_http::result::{SdkError, SdkSuccess};
