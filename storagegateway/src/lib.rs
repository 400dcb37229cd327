/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Storage Gateway
//!
//! Gateway activation, inspection, tagging and volume listing.

pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

use aws_json::operation::{JsonService, JsonVersion, ServiceMetadata};

pub use aws_json::{Client, Config, Region, SdkError};
pub use error::StorageGatewayError;

/// Marker type for the Storage Gateway service.
#[derive(Clone, Copy, Debug, Default)]
pub struct StorageGateway;

impl JsonService for StorageGateway {
    const METADATA: ServiceMetadata = ServiceMetadata {
        service_name: "storagegateway",
        endpoint_prefix: "storagegateway",
        target_prefix: "StorageGateway_20130630",
        json_version: JsonVersion::V1_1,
    };
    type Error = StorageGatewayError;
}
