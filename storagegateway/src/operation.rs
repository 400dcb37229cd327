/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::*;
use crate::output::*;
use crate::StorageGateway;

aws_json::operations! {
    service = StorageGateway;
    /// Activates a deployed gateway and associates it with the account.
    ActivateGateway(ActivateGatewayInput) -> ActivateGatewayOutput;
    ListGateways(ListGatewaysInput) -> ListGatewaysOutput;
    DescribeGatewayInformation(DescribeGatewayInformationInput) -> DescribeGatewayInformationOutput;
    ListVolumes(ListVolumesInput) -> ListVolumesOutput;
    AddTagsToResource(AddTagsToResourceInput) -> AddTagsToResourceOutput;
    DeleteGateway(DeleteGatewayInput) -> DeleteGatewayOutput;
}
