/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// Parses a response whose body has been read to the end.
///
/// AWS JSON responses are never streamed, so every operation handler implements this trait.
/// For request/response style operations `Output` is typically something like
/// `Result<CreateTrailOutput, CreateTrailError>`.
pub trait ParseStrictResponse {
    type Output;
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

impl<T: ParseStrictResponse + ?Sized> ParseStrictResponse for &T {
    type Output = T::Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        (**self).parse(response)
    }
}
