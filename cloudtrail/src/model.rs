/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_json::structure;
use smithy_types::DateTime;

structure! {
    /// A custom key-value pair associated with a trail.
    pub struct Tag {
        key: String => "Key",
        value: String => "Value",
    }
}

structure! {
    /// Settings of one trail.
    pub struct Trail {
        name: String => "Name",
        s3_bucket_name: String => "S3BucketName",
        s3_key_prefix: String => "S3KeyPrefix",
        sns_topic_name: String => "SnsTopicName",
        sns_topic_arn: String => "SnsTopicARN",
        include_global_service_events: bool => "IncludeGlobalServiceEvents",
        is_multi_region_trail: bool => "IsMultiRegionTrail",
        home_region: String => "HomeRegion",
        trail_arn: String => "TrailARN",
        log_file_validation_enabled: bool => "LogFileValidationEnabled",
        cloud_watch_logs_log_group_arn: String => "CloudWatchLogsLogGroupArn",
        cloud_watch_logs_role_arn: String => "CloudWatchLogsRoleArn",
        kms_key_id: String => "KmsKeyId",
        has_custom_event_selectors: bool => "HasCustomEventSelectors",
        is_organization_trail: bool => "IsOrganizationTrail",
    }
}

structure! {
    pub struct LookupAttribute {
        /// One of `EventId`, `EventName`, `ReadOnly`, `Username`, `ResourceType`,
        /// `ResourceName`, `EventSource` or `AccessKeyId`.
        attribute_key: String => "AttributeKey",
        attribute_value: String => "AttributeValue",
    }
}

structure! {
    /// A resource referenced by an event.
    pub struct Resource {
        resource_type: String => "ResourceType",
        resource_name: String => "ResourceName",
    }
}

structure! {
    pub struct Event {
        event_id: String => "EventId",
        event_name: String => "EventName",
        read_only: String => "ReadOnly",
        access_key_id: String => "AccessKeyId",
        event_time: DateTime => "EventTime",
        event_source: String => "EventSource",
        username: String => "Username",
        resources: Vec<Resource> => "Resources",
        /// The full event record as a JSON string.
        cloud_trail_event: String => "CloudTrailEvent",
    }
}

structure! {
    /// Tags attached to one trail.
    pub struct ResourceTag {
        resource_id: String => "ResourceId",
        tags_list: Vec<Tag> => "TagsList",
    }
}
