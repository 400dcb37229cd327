/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::ServiceError;
use smithy_json::shape::JsonShape;

/// Protocol version, which only changes the `Content-Type` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonVersion {
    V1_0,
    V1_1,
}

impl JsonVersion {
    pub fn content_type(self) -> &'static str {
        match self {
            JsonVersion::V1_0 => "application/x-amz-json-1.0",
            JsonVersion::V1_1 => "application/x-amz-json-1.1",
        }
    }
}

/// Static description of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Short name used in logs, e.g. `cloudtrail`
    pub service_name: &'static str,
    /// First label of the default endpoint host
    pub endpoint_prefix: &'static str,
    /// Prefix of the `X-Amz-Target` header, e.g. `OpsWorks_20130218`
    pub target_prefix: &'static str,
    pub json_version: JsonVersion,
}

impl ServiceMetadata {
    /// `X-Amz-Target` value for `operation`.
    pub fn target(&self, operation: &str) -> String {
        format!("{}.{}", self.target_prefix, operation)
    }
}

pub trait JsonService {
    const METADATA: ServiceMetadata;

    /// Error returned for non-2xx responses.
    type Error: ServiceError;
}

/// One operation of a [`JsonService`]. Implemented on a unit struct per operation.
pub trait JsonOperation {
    type Service: JsonService;

    const NAME: &'static str;

    type Input: JsonShape;
    type Output: JsonShape + Default;
}

/// Service error type of operation `O`.
pub type OperationError<O> = <<O as JsonOperation>::Service as JsonService>::Error;

/// Declares the operations of a service, one unit struct per operation.
///
/// ```rust,ignore
/// aws_json::operations! {
///     service = crate::CloudTrail;
///     /// Creates a trail.
///     CreateTrail(CreateTrailInput) -> CreateTrailOutput;
/// }
/// ```
#[macro_export]
macro_rules! operations {
    (
        service = $service:ty;
        $(
            $(#[$meta:meta])*
            $name:ident($input:ty) -> $output:ty;
        )*
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl $crate::operation::JsonOperation for $name {
                type Service = $service;
                const NAME: &'static str = stringify!($name);
                type Input = $input;
                type Output = $output;
            }
        )*
    };
}
