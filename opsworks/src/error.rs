/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

aws_json::service_errors! {
    pub enum OpsWorksError {
        /// A resource was not found.
        ResourceNotFoundException => "ResourceNotFoundException",
        /// A request did not pass validation.
        ValidationException => "ValidationException",
    }
}
