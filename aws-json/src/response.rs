/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::unmarshall_error;
use crate::operation::{JsonOperation, OperationError};
use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;
use smithy_json::deserialize::error::DeserializeError;
use smithy_json::shape::unmarshall_document;
use std::marker::PhantomData;
use tracing::trace;

/// Why a response did not produce an output.
#[derive(Debug)]
pub enum ResponseFailure<E> {
    /// The service returned an error response.
    Service(E),
    /// The body could not be unmarshalled.
    Unparseable(DeserializeError),
}

/// Parses the response of operation `O`.
///
/// 2xx responses are unmarshalled into `O::Output`; an empty or `null` body yields the default
/// output. Every other status is handed to the service's error unmarshallers.
pub struct JsonResponseHandler<O> {
    _operation: PhantomData<fn() -> O>,
}

impl<O> JsonResponseHandler<O> {
    pub const fn new() -> Self {
        JsonResponseHandler {
            _operation: PhantomData,
        }
    }
}

impl<O> Default for JsonResponseHandler<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for JsonResponseHandler<O> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<O> Copy for JsonResponseHandler<O> {}

impl<O> std::fmt::Debug for JsonResponseHandler<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonResponseHandler").finish()
    }
}

impl<O: JsonOperation> ParseStrictResponse for JsonResponseHandler<O> {
    type Output = Result<O::Output, ResponseFailure<OperationError<O>>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            trace!(operation = O::NAME, "unmarshalling response");
            unmarshall_document::<O::Output>(response.body())
                .map(Option::unwrap_or_default)
                .map_err(ResponseFailure::Unparseable)
        } else {
            trace!(operation = O::NAME, status = %response.status(), "unmarshalling error");
            match unmarshall_error(response) {
                Ok(err) => Err(ResponseFailure::Service(err)),
                Err(err) => Err(ResponseFailure::Unparseable(err)),
            }
        }
    }
}
