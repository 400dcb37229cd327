/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Service error unmarshalling.
//!
//! An error response is first reduced to a [`GenericError`] (code, message, request id). Each
//! service then owns a table of [`ErrorUnmarshaller`]s, declared with [`service_errors!`], that
//! turns known codes into typed exceptions. Unknown codes stay generic.

use bytes::Bytes;
use smithy_http::header::one_or_none_str;
use smithy_json::deserialize::error::DeserializeError;
use smithy_json::shape::unmarshall_document;
use smithy_json::structure;
use std::fmt;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// GenericError represents an error from a service that is not modeled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericError {
    pub message: Option<String>,
    pub code: Option<String>,
    pub request_id: Option<String>,
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GenericError")?;
        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for GenericError {}

/// Builds one typed exception when the error code matches.
pub struct ErrorUnmarshaller<E: 'static> {
    pub code: &'static str,
    pub build: fn(GenericError) -> E,
}

impl<E> ErrorUnmarshaller<E> {
    pub fn matches(&self, error: &GenericError) -> bool {
        error.code.as_deref() == Some(self.code)
    }
}

impl<E> fmt::Debug for ErrorUnmarshaller<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorUnmarshaller")
            .field("code", &self.code)
            .finish()
    }
}

/// Error type of a service: a set of modeled exceptions plus a catch-all.
pub trait ServiceError: std::error::Error + Send + Sync + Sized + 'static {
    /// Checked in order; the first match wins.
    const UNMARSHALLERS: &'static [ErrorUnmarshaller<Self>];

    fn unhandled(error: GenericError) -> Self;

    fn from_generic(error: GenericError) -> Self {
        match Self::UNMARSHALLERS.iter().find(|u| u.matches(&error)) {
            Some(unmarshaller) => (unmarshaller.build)(error),
            None => Self::unhandled(error),
        }
    }
}

/// Reduces an error code such as `aws.protocoltests#FooError:http://internal.amazon.com/` to
/// the bare exception name `FooError`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

structure! {
    pub struct ErrorBody {
        type_: String => "__type",
        code: String => "code",
        message: String => "message",
        message_upper: String => "Message",
    }
}

/// Extracts code, message and request id from an error response.
///
/// The code comes from the `x-amzn-errortype` header, then the body's `__type`, then its
/// `code`. A body that is not JSON is an error.
pub fn parse_generic_error(
    response: &http::Response<Bytes>,
) -> Result<GenericError, DeserializeError> {
    let body = unmarshall_document::<ErrorBody>(response.body())?.unwrap_or_default();
    let headers = response.headers();
    let header_code = one_or_none_str(headers, ERROR_TYPE_HEADER).ok().flatten();
    let code = header_code
        .map(str::to_owned)
        .or(body.type_)
        .or(body.code)
        .map(|code| sanitize_error_code(&code).to_owned());
    Ok(GenericError {
        code,
        message: body.message.or(body.message_upper),
        request_id: one_or_none_str(headers, REQUEST_ID_HEADER)
            .ok()
            .flatten()
            .map(str::to_owned),
    })
}

/// Unmarshalls an error response into the service's error type.
pub fn unmarshall_error<E: ServiceError>(
    response: &http::Response<Bytes>,
) -> Result<E, DeserializeError> {
    parse_generic_error(response).map(E::from_generic)
}

/// Declares a service's exceptions and its error enum.
///
/// Every entry `ExceptionName => "ErrorCode"` produces an exception struct carrying the
/// message, error code and request id, and a variant of the enum wrapping it. The enum gets an
/// `Unhandled(GenericError)` variant and implements [`ServiceError`].
#[macro_export]
macro_rules! service_errors {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $code:literal
            ),* $(,)?
        }
    ) => {
        $(
            $(#[$variant_meta])*
            #[derive(Clone, Debug, Default, PartialEq, Eq)]
            pub struct $variant {
                pub message: ::std::option::Option<::std::string::String>,
                pub code: ::std::option::Option<::std::string::String>,
                pub request_id: ::std::option::Option<::std::string::String>,
            }

            impl $variant {
                pub const CODE: &'static str = $code;

                pub fn message(&self) -> ::std::option::Option<&str> {
                    self.message.as_deref()
                }
            }

            impl ::std::convert::From<$crate::error::GenericError> for $variant {
                fn from(error: $crate::error::GenericError) -> Self {
                    $variant {
                        message: error.message,
                        code: error.code,
                        request_id: error.request_id,
                    }
                }
            }

            impl ::std::fmt::Display for $variant {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, stringify!($variant))?;
                    if let ::std::option::Option::Some(message) = &self.message {
                        write!(f, ": {}", message)?;
                    }
                    Ok(())
                }
            }

            impl ::std::error::Error for $variant {}
        )*

        $(#[$meta])*
        #[derive(Debug)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant($variant),
            )*
            /// An error code this client does not model.
            Unhandled($crate::error::GenericError),
        }

        impl $name {
            pub fn code(&self) -> ::std::option::Option<&str> {
                match self {
                    $( $name::$variant(inner) => inner.code.as_deref(), )*
                    $name::Unhandled(inner) => inner.code.as_deref(),
                }
            }

            pub fn message(&self) -> ::std::option::Option<&str> {
                match self {
                    $( $name::$variant(inner) => inner.message.as_deref(), )*
                    $name::Unhandled(inner) => inner.message.as_deref(),
                }
            }

            pub fn request_id(&self) -> ::std::option::Option<&str> {
                match self {
                    $( $name::$variant(inner) => inner.request_id.as_deref(), )*
                    $name::Unhandled(inner) => inner.request_id.as_deref(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $( $name::$variant(inner) => inner.fmt(f), )*
                    $name::Unhandled(inner) => inner.fmt(f),
                }
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    $( $name::$variant(inner) => ::std::option::Option::Some(inner), )*
                    $name::Unhandled(inner) => ::std::option::Option::Some(inner),
                }
            }
        }

        impl $crate::error::ServiceError for $name {
            const UNMARSHALLERS: &'static [$crate::error::ErrorUnmarshaller<Self>] = &[
                $(
                    $crate::error::ErrorUnmarshaller {
                        code: $code,
                        build: |error| $name::$variant($variant::from(error)),
                    },
                )*
            ];

            fn unhandled(error: $crate::error::GenericError) -> Self {
                $name::Unhandled(error)
            }
        }
    };
}
