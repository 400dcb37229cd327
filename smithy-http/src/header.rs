/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for parsing information from headers

#[derive(Debug, thiserror::Error)]
#[error("failed to parse header `{header}`")]
pub struct ParseError {
    header: String,
}

impl ParseError {
    fn new(header: &str) -> Self {
        ParseError {
            header: header.to_string(),
        }
    }
}

/// Reads the single value of header `key` as a string. Repeated headers are an error.
pub fn one_or_none_str<'a>(
    headers: &'a http::HeaderMap,
    key: &str,
) -> Result<Option<&'a str>, ParseError> {
    let mut values = headers.get_all(key).iter();
    let value = match values.next() {
        Some(value) => value,
        None => return Ok(None),
    };
    if values.next().is_some() {
        return Err(ParseError::new(key));
    }
    value
        .to_str()
        .map(|value| Some(value.trim()))
        .map_err(|_| ParseError::new(key))
}

#[cfg(test)]
mod test {
    use super::one_or_none_str;
    use http::HeaderValue;

    #[test]
    fn single_values() {
        let mut test_request = http::Request::builder()
            .header("x-amzn-requestid", " abc-123 ")
            .header("X-Twice", "1")
            .header("X-Twice", "2")
            .body(())
            .unwrap();
        test_request.headers_mut().insert(
            "x-opaque",
            HeaderValue::from_bytes(b"\xfe\xff").unwrap(),
        );
        let headers = test_request.headers();
        assert_eq!(
            Some("abc-123"),
            one_or_none_str(headers, "X-Amzn-RequestId").unwrap()
        );
        assert_eq!(None, one_or_none_str(headers, "X-Missing").unwrap());
        let err = one_or_none_str(headers, "X-Twice").unwrap_err();
        assert_eq!("failed to parse header `X-Twice`", err.to_string());
        assert!(one_or_none_str(headers, "X-Opaque").is_err());
    }
}
