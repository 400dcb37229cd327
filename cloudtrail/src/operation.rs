/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::*;
use crate::output::*;
use crate::CloudTrail;

aws_json::operations! {
    service = CloudTrail;
    /// Creates a trail that delivers log files to an S3 bucket.
    CreateTrail(CreateTrailInput) -> CreateTrailOutput;
    DeleteTrail(DeleteTrailInput) -> DeleteTrailOutput;
    /// Retrieves settings for trails in the current region. An empty name list returns every
    /// trail.
    DescribeTrails(DescribeTrailsInput) -> DescribeTrailsOutput;
    GetTrailStatus(GetTrailStatusInput) -> GetTrailStatusOutput;
    StartLogging(StartLoggingInput) -> StartLoggingOutput;
    StopLogging(StopLoggingInput) -> StopLoggingOutput;
    /// Looks up management events captured in the last 90 days.
    LookupEvents(LookupEventsInput) -> LookupEventsOutput;
    AddTags(AddTagsInput) -> AddTagsOutput;
    ListTags(ListTagsInput) -> ListTagsOutput;
}
