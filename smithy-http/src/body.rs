/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// Request body for every dispatched operation.
///
/// AWS JSON payloads are always fully buffered, so the body is a single chunk that is handed
/// out once when polled.
#[derive(Debug, Clone)]
pub enum SdkBody {
    Once(Option<Bytes>),
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody::Once(None)
    }

    /// Buffered contents. Empty once the body has been polled.
    pub fn bytes(&self) -> &[u8] {
        match self {
            SdkBody::Once(Some(bytes)) => bytes,
            SdkBody::Once(None) => &[],
        }
    }

    pub fn content_length(&self) -> u64 {
        match self {
            SdkBody::Once(Some(bytes)) => bytes.len() as u64,
            SdkBody::Once(None) => 0,
        }
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match self {
            SdkBody::Once(ref mut opt) => Poll::Ready(opt.take().map(Ok)),
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::Once(Some(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::Once(Some(Bytes::from(s)))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        matches!(self, SdkBody::Once(None))
    }

    fn size_hint(&self) -> http_body::SizeHint {
        http_body::SizeHint::with_exact(self.content_length())
    }
}
