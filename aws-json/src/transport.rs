/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use smithy_http::body::SdkBody;
use smithy_http::result::BoxError;
use std::sync::Arc;

/// Sends one HTTP request and reads the whole response.
///
/// Implementations block the calling thread. [`Client::call_async`](crate::Client::call_async)
/// moves calls onto Tokio's blocking pool.
pub trait Transport: Send + Sync {
    fn send(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, BoxError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, BoxError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: http::Request<SdkBody>) -> Result<http::Response<Bytes>, BoxError> {
        (**self).send(request)
    }
}
