/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{LookupAttribute, Tag};
use smithy_json::structure;
use smithy_types::DateTime;

structure! {
    pub struct CreateTrailInput {
        name: String => "Name",
        s3_bucket_name: String => "S3BucketName",
        s3_key_prefix: String => "S3KeyPrefix",
        sns_topic_name: String => "SnsTopicName",
        include_global_service_events: bool => "IncludeGlobalServiceEvents",
        is_multi_region_trail: bool => "IsMultiRegionTrail",
        enable_log_file_validation: bool => "EnableLogFileValidation",
        cloud_watch_logs_log_group_arn: String => "CloudWatchLogsLogGroupArn",
        cloud_watch_logs_role_arn: String => "CloudWatchLogsRoleArn",
        kms_key_id: String => "KmsKeyId",
        is_organization_trail: bool => "IsOrganizationTrail",
        tags_list: Vec<Tag> => "TagsList",
    }
}

structure! {
    pub struct DeleteTrailInput {
        /// Trail name or ARN.
        name: String => "Name",
    }
}

structure! {
    pub struct DescribeTrailsInput {
        trail_name_list: Vec<String> => "trailNameList",
        include_shadow_trails: bool => "includeShadowTrails",
    }
}

structure! {
    pub struct GetTrailStatusInput {
        name: String => "Name",
    }
}

structure! {
    pub struct StartLoggingInput {
        name: String => "Name",
    }
}

structure! {
    pub struct StopLoggingInput {
        name: String => "Name",
    }
}

structure! {
    pub struct LookupEventsInput {
        lookup_attributes: Vec<LookupAttribute> => "LookupAttributes",
        start_time: DateTime => "StartTime",
        end_time: DateTime => "EndTime",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
    }
}

structure! {
    pub struct AddTagsInput {
        resource_id: String => "ResourceId",
        tags_list: Vec<Tag> => "TagsList",
    }
}

structure! {
    pub struct ListTagsInput {
        resource_id_list: Vec<String> => "ResourceIdList",
        next_token: String => "NextToken",
    }
}
