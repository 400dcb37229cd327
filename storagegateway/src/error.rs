/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

aws_json::service_errors! {
    pub enum StorageGatewayError {
        /// The request was malformed or referenced a gateway in the wrong state.
        InvalidGatewayRequestException => "InvalidGatewayRequestException",
        InternalServerError => "InternalServerError",
        ServiceUnavailableError => "ServiceUnavailableError",
    }
}
