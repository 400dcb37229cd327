/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::Tag;
use smithy_json::structure;

structure! {
    pub struct ActivateGatewayInput {
        activation_key: String => "ActivationKey",
        gateway_name: String => "GatewayName",
        /// e.g. `GMT-8:00`
        gateway_timezone: String => "GatewayTimezone",
        gateway_region: String => "GatewayRegion",
        gateway_type: String => "GatewayType",
        tape_drive_type: String => "TapeDriveType",
        medium_changer_type: String => "MediumChangerType",
        tags: Vec<Tag> => "Tags",
    }
}

structure! {
    pub struct ListGatewaysInput {
        marker: String => "Marker",
        limit: i32 => "Limit",
    }
}

structure! {
    pub struct DescribeGatewayInformationInput {
        gateway_arn: String => "GatewayARN",
    }
}

structure! {
    pub struct ListVolumesInput {
        gateway_arn: String => "GatewayARN",
        marker: String => "Marker",
        limit: i32 => "Limit",
    }
}

structure! {
    pub struct AddTagsToResourceInput {
        resource_arn: String => "ResourceARN",
        tags: Vec<Tag> => "Tags",
    }
}

structure! {
    pub struct DeleteGatewayInput {
        gateway_arn: String => "GatewayARN",
    }
}
