/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{GatewayInfo, NetworkInterface, Tag, VolumeInfo};
use smithy_json::structure;

structure! {
    pub struct ActivateGatewayOutput {
        gateway_arn: String => "GatewayARN",
    }
}

structure! {
    pub struct ListGatewaysOutput {
        gateways: Vec<GatewayInfo> => "Gateways",
        marker: String => "Marker",
    }
}

structure! {
    pub struct DescribeGatewayInformationOutput {
        gateway_arn: String => "GatewayARN",
        gateway_id: String => "GatewayId",
        gateway_name: String => "GatewayName",
        gateway_timezone: String => "GatewayTimezone",
        gateway_state: String => "GatewayState",
        gateway_network_interfaces: Vec<NetworkInterface> => "GatewayNetworkInterfaces",
        gateway_type: String => "GatewayType",
        next_update_availability_date: String => "NextUpdateAvailabilityDate",
        last_software_update: String => "LastSoftwareUpdate",
        ec2_instance_id: String => "Ec2InstanceId",
        ec2_instance_region: String => "Ec2InstanceRegion",
        tags: Vec<Tag> => "Tags",
        cloud_watch_log_group_arn: String => "CloudWatchLogGroupARN",
    }
}

structure! {
    pub struct ListVolumesOutput {
        gateway_arn: String => "GatewayARN",
        marker: String => "Marker",
        volume_infos: Vec<VolumeInfo> => "VolumeInfos",
    }
}

structure! {
    pub struct AddTagsToResourceOutput {
        resource_arn: String => "ResourceARN",
    }
}

structure! {
    pub struct DeleteGatewayOutput {
        gateway_arn: String => "GatewayARN",
    }
}
