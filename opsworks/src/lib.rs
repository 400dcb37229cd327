/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS OpsWorks
//!
//! Stacks, layers, commands and Elastic IP addresses of OpsWorks Stacks.

pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

use aws_json::operation::{JsonService, JsonVersion, ServiceMetadata};

pub use aws_json::{Client, Config, Region, SdkError};
pub use error::OpsWorksError;

/// Marker type for the OpsWorks service.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpsWorks;

impl JsonService for OpsWorks {
    const METADATA: ServiceMetadata = ServiceMetadata {
        service_name: "opsworks",
        endpoint_prefix: "opsworks",
        target_prefix: "OpsWorks_20130218",
        json_version: JsonVersion::V1_1,
    };
    type Error = OpsWorksError;
}
