/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::transport::Transport;
use bytes::Bytes;
use http::header::HeaderName;
use smithy_http::body::SdkBody;
use smithy_http::result::BoxError;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

/// A request the connection received, paired with the one the test expected.
#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Asserts that the actual request carries every expected header (except `ignore_headers`),
    /// the expected URI and the expected body.
    #[track_caller]
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual.headers().get(name);
                assert_eq!(
                    Some(value),
                    actual_header,
                    "header mismatch for {:?}",
                    name
                );
            }
        }
        let actual_str = std::str::from_utf8(actual.body().bytes());
        let expected_str = std::str::from_utf8(expected.body().bytes());
        match (actual_str, expected_str) {
            (Ok(actual), Ok(expected)) => assert_eq!(expected, actual),
            _ => assert_eq!(expected.body().bytes(), actual.body().bytes()),
        };
        assert_eq!(expected.uri(), actual.uri());
    }
}

/// Test transport for use with a [`Client`](crate::Client).
///
/// It answers requests with a preloaded series of responses, in order, and records every request
/// for later examination.
/// ```rust
/// use aws_json::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = aws_json::Client::new(aws_json::Config::default(), conn);
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.requests)
    }

    /// Responses that have not been served yet.
    pub fn remaining(&self) -> usize {
        lock(&self.data).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // a test that panicked mid-call leaves the recorded data intact
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<B> Transport for TestConnection<B>
where
    B: Into<Bytes> + Send,
{
    fn send(&self, actual: http::Request<SdkBody>) -> Result<http::Response<Bytes>, BoxError> {
        let next = lock(&self.data).pop();
        match next {
            Some((expected, response)) => {
                lock(&self.requests).push(ValidateRequest { expected, actual });
                Ok(response.map(Into::into))
            }
            None => Err("no more data".into()),
        }
    }
}
