/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::*;
use crate::output::*;
use crate::OpsWorks;

aws_json::operations! {
    service = OpsWorks;
    /// Describes Elastic IP addresses by instance, stack or address.
    DescribeElasticIps(DescribeElasticIpsInput) -> DescribeElasticIpsOutput;
    /// Describes the results of specified commands.
    DescribeCommands(DescribeCommandsInput) -> DescribeCommandsOutput;
    DescribeStacks(DescribeStacksInput) -> DescribeStacksOutput;
    DescribeLayers(DescribeLayersInput) -> DescribeLayersOutput;
    CreateStack(CreateStackInput) -> CreateStackOutput;
    DeleteStack(DeleteStackInput) -> DeleteStackOutput;
}
