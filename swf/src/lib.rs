/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Simple Workflow Service
//!
//! Domains, workflow executions and decision tasks. SWF speaks AWS JSON 1.0 and uses camel-case
//! member names on the wire.

pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

use aws_json::operation::{JsonService, JsonVersion, ServiceMetadata};

pub use aws_json::{Client, Config, Region, SdkError};
pub use error::SwfError;

/// Marker type for the Simple Workflow service.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleWorkflow;

impl JsonService for SimpleWorkflow {
    const METADATA: ServiceMetadata = ServiceMetadata {
        service_name: "swf",
        endpoint_prefix: "swf",
        target_prefix: "SimpleWorkflowService",
        json_version: JsonVersion::V1_0,
    };
    type Error = SwfError;
}
