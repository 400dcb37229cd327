/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{Event, ResourceTag, Trail};
use smithy_json::structure;
use smithy_types::DateTime;

structure! {
    pub struct CreateTrailOutput {
        name: String => "Name",
        s3_bucket_name: String => "S3BucketName",
        s3_key_prefix: String => "S3KeyPrefix",
        sns_topic_name: String => "SnsTopicName",
        sns_topic_arn: String => "SnsTopicARN",
        include_global_service_events: bool => "IncludeGlobalServiceEvents",
        is_multi_region_trail: bool => "IsMultiRegionTrail",
        trail_arn: String => "TrailARN",
        log_file_validation_enabled: bool => "LogFileValidationEnabled",
        cloud_watch_logs_log_group_arn: String => "CloudWatchLogsLogGroupArn",
        cloud_watch_logs_role_arn: String => "CloudWatchLogsRoleArn",
        kms_key_id: String => "KmsKeyId",
        is_organization_trail: bool => "IsOrganizationTrail",
    }
}

structure! {
    pub struct DeleteTrailOutput {}
}

structure! {
    pub struct DescribeTrailsOutput {
        trail_list: Vec<Trail> => "trailList",
    }
}

structure! {
    pub struct GetTrailStatusOutput {
        is_logging: bool => "IsLogging",
        latest_delivery_error: String => "LatestDeliveryError",
        latest_notification_error: String => "LatestNotificationError",
        latest_delivery_time: DateTime => "LatestDeliveryTime",
        latest_notification_time: DateTime => "LatestNotificationTime",
        start_logging_time: DateTime => "StartLoggingTime",
        stop_logging_time: DateTime => "StopLoggingTime",
        latest_cloud_watch_logs_delivery_error: String => "LatestCloudWatchLogsDeliveryError",
        latest_cloud_watch_logs_delivery_time: DateTime => "LatestCloudWatchLogsDeliveryTime",
        latest_digest_delivery_time: DateTime => "LatestDigestDeliveryTime",
        latest_digest_delivery_error: String => "LatestDigestDeliveryError",
    }
}

structure! {
    pub struct StartLoggingOutput {}
}

structure! {
    pub struct StopLoggingOutput {}
}

structure! {
    pub struct LookupEventsOutput {
        events: Vec<Event> => "Events",
        next_token: String => "NextToken",
    }
}

structure! {
    pub struct AddTagsOutput {}
}

structure! {
    pub struct ListTagsOutput {
        resource_tag_list: Vec<ResourceTag> => "ResourceTagList",
        next_token: String => "NextToken",
    }
}
