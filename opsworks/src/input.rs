/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{ChefConfiguration, Source, StackConfigurationManager};
use indexmap::IndexMap;
use smithy_json::structure;

structure! {
    /// Exactly one of the three filters should be set.
    pub struct DescribeElasticIpsInput {
        instance_id: String => "InstanceId",
        stack_id: String => "StackId",
        ips: Vec<String> => "Ips",
    }
}

structure! {
    pub struct DescribeCommandsInput {
        deployment_id: String => "DeploymentId",
        instance_id: String => "InstanceId",
        command_ids: Vec<String> => "CommandIds",
    }
}

structure! {
    pub struct DescribeStacksInput {
        stack_ids: Vec<String> => "StackIds",
    }
}

structure! {
    pub struct DescribeLayersInput {
        stack_id: String => "StackId",
        layer_ids: Vec<String> => "LayerIds",
    }
}

structure! {
    pub struct CreateStackInput {
        name: String => "Name",
        region: String => "Region",
        vpc_id: String => "VpcId",
        attributes: IndexMap<String, String> => "Attributes",
        service_role_arn: String => "ServiceRoleArn",
        default_instance_profile_arn: String => "DefaultInstanceProfileArn",
        default_os: String => "DefaultOs",
        hostname_theme: String => "HostnameTheme",
        default_availability_zone: String => "DefaultAvailabilityZone",
        default_subnet_id: String => "DefaultSubnetId",
        custom_json: String => "CustomJson",
        configuration_manager: StackConfigurationManager => "ConfigurationManager",
        chef_configuration: ChefConfiguration => "ChefConfiguration",
        use_custom_cookbooks: bool => "UseCustomCookbooks",
        use_opsworks_security_groups: bool => "UseOpsworksSecurityGroups",
        custom_cookbooks_source: Source => "CustomCookbooksSource",
        default_ssh_key_name: String => "DefaultSshKeyName",
        default_root_device_type: String => "DefaultRootDeviceType",
        agent_version: String => "AgentVersion",
    }
}

structure! {
    pub struct DeleteStackInput {
        stack_id: String => "StackId",
    }
}
