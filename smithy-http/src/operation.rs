/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use std::borrow::Cow;

/// Operation and service names, used for logging and error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

/// A fully marshalled HTTP request plus the operation it was built for.
#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,
    metadata: Option<Metadata>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Transforms the inner HTTP request, keeping the metadata.
    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        Ok(Request {
            inner: f(self.inner)?,
            metadata: self.metadata,
        })
    }

    /// Operation metadata, if the marshaller recorded it.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Option<Metadata>) {
        (self.inner, self.metadata)
    }
}
