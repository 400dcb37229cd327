/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_json::structure;

structure! {
    pub struct Tag {
        key: String => "Key",
        value: String => "Value",
    }
}

structure! {
    pub struct GatewayInfo {
        gateway_id: String => "GatewayId",
        gateway_arn: String => "GatewayARN",
        gateway_type: String => "GatewayType",
        gateway_operational_state: String => "GatewayOperationalState",
        gateway_name: String => "GatewayName",
        ec2_instance_id: String => "Ec2InstanceId",
        ec2_instance_region: String => "Ec2InstanceRegion",
    }
}

structure! {
    pub struct NetworkInterface {
        ipv4_address: String => "Ipv4Address",
        mac_address: String => "MacAddress",
        ipv6_address: String => "Ipv6Address",
    }
}

structure! {
    pub struct VolumeInfo {
        volume_arn: String => "VolumeARN",
        volume_id: String => "VolumeId",
        gateway_arn: String => "GatewayARN",
        gateway_id: String => "GatewayId",
        /// `STORED` or `CACHED`.
        volume_type: String => "VolumeType",
        volume_size_in_bytes: i64 => "VolumeSizeInBytes",
        volume_attachment_status: String => "VolumeAttachmentStatus",
    }
}
