/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use indexmap::IndexMap;
use smithy_json::structure;

structure! {
    /// An Elastic IP address registered with a stack.
    pub struct ElasticIp {
        ip: String => "Ip",
        name: String => "Name",
        /// `standard` or `vpc`.
        domain: String => "Domain",
        region: String => "Region",
        instance_id: String => "InstanceId",
    }
}

structure! {
    pub struct Command {
        command_id: String => "CommandId",
        instance_id: String => "InstanceId",
        deployment_id: String => "DeploymentId",
        created_at: String => "CreatedAt",
        acknowledged_at: String => "AcknowledgedAt",
        completed_at: String => "CompletedAt",
        status: String => "Status",
        /// Exit code of the command; `0` means success.
        exit_code: i32 => "ExitCode",
        log_url: String => "LogUrl",
        r#type: String => "Type",
    }
}

structure! {
    /// Configuration manager of a stack, e.g. Chef 12.
    pub struct StackConfigurationManager {
        name: String => "Name",
        version: String => "Version",
    }
}

structure! {
    pub struct ChefConfiguration {
        manage_berkshelf: bool => "ManageBerkshelf",
        berkshelf_version: String => "BerkshelfVersion",
    }
}

structure! {
    pub struct Source {
        r#type: String => "Type",
        url: String => "Url",
        username: String => "Username",
        revision: String => "Revision",
    }
}

structure! {
    pub struct Stack {
        stack_id: String => "StackId",
        name: String => "Name",
        arn: String => "Arn",
        region: String => "Region",
        vpc_id: String => "VpcId",
        /// Stack attributes such as `Color`.
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
        created_at: String => "CreatedAt",
        default_root_device_type: String => "DefaultRootDeviceType",
        agent_version: String => "AgentVersion",
    }
}

structure! {
    pub struct VolumeConfiguration {
        mount_point: String => "MountPoint",
        raid_level: i32 => "RaidLevel",
        number_of_disks: i32 => "NumberOfDisks",
        size: i32 => "Size",
        volume_type: String => "VolumeType",
        iops: i32 => "Iops",
        encrypted: bool => "Encrypted",
    }
}

structure! {
    /// Custom recipes, one list per lifecycle event.
    pub struct Recipes {
        setup: Vec<String> => "Setup",
        configure: Vec<String> => "Configure",
        deploy: Vec<String> => "Deploy",
        undeploy: Vec<String> => "Undeploy",
        shutdown: Vec<String> => "Shutdown",
    }
}

structure! {
    pub struct Layer {
        arn: String => "Arn",
        stack_id: String => "StackId",
        layer_id: String => "LayerId",
        r#type: String => "Type",
        name: String => "Name",
        shortname: String => "Shortname",
        attributes: IndexMap<String, String> => "Attributes",
        custom_instance_profile_arn: String => "CustomInstanceProfileArn",
        custom_json: String => "CustomJson",
        custom_security_group_ids: Vec<String> => "CustomSecurityGroupIds",
        default_security_group_names: Vec<String> => "DefaultSecurityGroupNames",
        packages: Vec<String> => "Packages",
        volume_configurations: Vec<VolumeConfiguration> => "VolumeConfigurations",
        enable_auto_healing: bool => "EnableAutoHealing",
        auto_assign_elastic_ips: bool => "AutoAssignElasticIps",
        auto_assign_public_ips: bool => "AutoAssignPublicIps",
        default_recipes: Recipes => "DefaultRecipes",
        custom_recipes: Recipes => "CustomRecipes",
        created_at: String => "CreatedAt",
        install_updates_on_boot: bool => "InstallUpdatesOnBoot",
        use_ebs_optimized_instances: bool => "UseEbsOptimizedInstances",
    }
}
