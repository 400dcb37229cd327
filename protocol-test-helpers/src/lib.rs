/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use http::Request;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("header `{forbidden}` should not be set but was set to `{found}`")]
    ForbiddenHeader { forbidden: String, found: String },
    #[error("body did not match: {hint}\n expected: {expected}\n found: {found}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },
    #[error("expected body to be valid {expected} but it was not: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Media types the body validator knows how to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Compared structurally: key order and whitespace do not matter.
    Json,
    /// Compared byte for byte.
    Other,
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(content_type: T) -> Self {
        let content_type = content_type.as_ref();
        if content_type == "application/json" || content_type.starts_with("application/x-amz-json-")
        {
            MediaType::Json
        } else {
            MediaType::Other
        }
    }
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        // Header lists are compared comma-delimited
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if let Some(value) = request.headers().get(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
                found: String::from_utf8_lossy(value.as_bytes()).into_owned(),
            });
        }
    }
    Ok(())
}

pub fn require_headers<B>(
    request: &Request<B>,
    required_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in required_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Compares a request body against the expected document.
pub fn validate_body(
    actual_body: impl AsRef<[u8]>,
    expected_body: &str,
    media_type: impl Into<MediaType>,
) -> Result<(), ProtocolTestFailure> {
    let actual_body = actual_body.as_ref();
    match media_type.into() {
        MediaType::Json => try_json_eq(actual_body, expected_body),
        MediaType::Other => {
            if actual_body == expected_body.as_bytes() {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    expected: expected_body.to_string(),
                    found: String::from_utf8_lossy(actual_body).into_owned(),
                    hint: "bodies differ".to_string(),
                })
            }
        }
    }
}

fn try_json_eq(actual: &[u8], expected: &str) -> Result<(), ProtocolTestFailure> {
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{} (expected body)", e),
        })?;
    let actual_json: serde_json::Value =
        serde_json::from_slice(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{}: {}", e, String::from_utf8_lossy(actual)),
        })?;
    assert_json_eq_no_panic(&actual_json, &expected_json).map_err(|hint| {
        ProtocolTestFailure::BodyDidNotMatch {
            expected: expected.to_string(),
            found: String::from_utf8_lossy(actual).into_owned(),
            hint,
        }
    })
}
