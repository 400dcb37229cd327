/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{Command, ElasticIp, Layer, Stack};
use smithy_json::structure;

structure! {
    pub struct DescribeElasticIpsOutput {
        elastic_ips: Vec<ElasticIp> => "ElasticIps",
    }
}

structure! {
    pub struct DescribeCommandsOutput {
        commands: Vec<Command> => "Commands",
    }
}

structure! {
    pub struct DescribeStacksOutput {
        stacks: Vec<Stack> => "Stacks",
    }
}

structure! {
    pub struct DescribeLayersOutput {
        layers: Vec<Layer> => "Layers",
    }
}

structure! {
    pub struct CreateStackOutput {
        stack_id: String => "StackId",
    }
}

structure! {
    pub struct DeleteStackOutput {}
}
