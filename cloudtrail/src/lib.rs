/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS CloudTrail
//!
//! CloudTrail records AWS API calls made on an account and delivers log files to an Amazon S3
//! bucket. This crate covers trail management and event lookup.
//!
//! ```rust,no_run
//! use cloudtrail::input::CreateTrailInput;
//! use cloudtrail::operation::CreateTrail;
//! # fn create(client: &cloudtrail::Client<impl aws_json::transport::Transport>) {
//! let output = client.call::<CreateTrail>(
//!     &CreateTrailInput::default().name("t1").s3_bucket_name("b1"),
//! );
//! # }
//! ```

pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

use aws_json::operation::{JsonService, JsonVersion, ServiceMetadata};

pub use aws_json::{Client, Config, Region, SdkError};
pub use error::CloudTrailError;

/// Marker type for the CloudTrail service.
#[derive(Clone, Copy, Debug, Default)]
pub struct CloudTrail;

impl JsonService for CloudTrail {
    const METADATA: ServiceMetadata = ServiceMetadata {
        service_name: "cloudtrail",
        endpoint_prefix: "cloudtrail",
        target_prefix: "com.amazonaws.cloudtrail.v20131101.CloudTrail_20131101",
        json_version: JsonVersion::V1_1,
    };
    type Error = CloudTrailError;
}
