/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

aws_json::service_errors! {
    /// Errors returned by CloudTrail.
    pub enum CloudTrailError {
        /// The trail does not exist in this region.
        TrailNotFoundException => "TrailNotFoundException",
        TrailAlreadyExistsException => "TrailAlreadyExistsException",
        /// Trail names must start with a letter or number and contain only letters, numbers,
        /// periods, underscores and dashes.
        InvalidTrailNameException => "InvalidTrailNameException",
        S3BucketDoesNotExistException => "S3BucketDoesNotExistException",
        InsufficientS3BucketPolicyException => "InsufficientS3BucketPolicyException",
        MaximumNumberOfTrailsExceededException => "MaximumNumberOfTrailsExceededException",
        InvalidTimeRangeException => "InvalidTimeRangeException",
        InvalidLookupAttributesException => "InvalidLookupAttributesException",
        InvalidMaxResultsException => "InvalidMaxResultsException",
        InvalidNextTokenException => "InvalidNextTokenException",
        /// The tag key or value is not valid, or too many tags were supplied.
        InvalidTagParameterException => "InvalidTagParameterException",
        UnsupportedOperationException => "UnsupportedOperationException",
    }
}
