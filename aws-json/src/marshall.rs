/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request marshalling.

use crate::operation::{JsonOperation, JsonService};
use http::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, Method};
use smithy_http::body::SdkBody;
use smithy_http::operation::{self, Metadata};
use smithy_json::serialize::SerializeError;
use smithy_json::shape::marshall_document;
use std::marker::PhantomData;
use tracing::trace;

pub const TARGET_HEADER: &str = "x-amz-target";

#[derive(Debug, thiserror::Error)]
pub enum MarshallError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] SerializeError),
    #[error("failed to build HTTP request: {0}")]
    Http(#[from] http::Error),
}

/// Turns the input of operation `O` into an HTTP request.
///
/// The request is a `POST /` carrying the JSON body, `X-Amz-Target`, `Content-Type` and
/// `Content-Length`. The endpoint is filled in later by the client. [`Metadata`] for the operation
/// travels with the request.
pub struct JsonMarshaller<O> {
    _operation: PhantomData<fn() -> O>,
}

impl<O> JsonMarshaller<O> {
    pub const fn new() -> Self {
        JsonMarshaller {
            _operation: PhantomData,
        }
    }
}

impl<O> Default for JsonMarshaller<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for JsonMarshaller<O> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<O> Copy for JsonMarshaller<O> {}

impl<O> std::fmt::Debug for JsonMarshaller<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonMarshaller").finish()
    }
}

impl<O: JsonOperation> JsonMarshaller<O> {
    pub fn marshall(&self, input: Option<&O::Input>) -> Result<operation::Request, MarshallError> {
        let input = input.ok_or(MarshallError::InvalidArgument("input must not be None"))?;
        let service = <O::Service as JsonService>::METADATA;
        let body = marshall_document(input)?;
        trace!(operation = O::NAME, body = %body, "marshalled request body");

        let mut builder = http::Request::builder().method(Method::POST).uri("/");
        add_headers(
            builder.headers_mut(),
            &service.target(O::NAME),
            service.json_version.content_type(),
            body.len(),
        )?;
        let request = operation::Request::new(builder.body(SdkBody::from(body))?)
            .with_metadata(Metadata::new(O::NAME, service.service_name));
        Ok(request)
    }
}

fn add_headers(
    headers: Option<&mut HeaderMap>,
    target: &str,
    content_type: &'static str,
    content_length: usize,
) -> Result<(), http::Error> {
    if let Some(headers) = headers {
        headers.insert(TARGET_HEADER, HeaderValue::from_str(target)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers.insert(CONTENT_LENGTH, HeaderValue::from(content_length));
    }
    Ok(())
}
