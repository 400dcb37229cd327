/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::input::*;
use crate::output::*;
use crate::SimpleWorkflow;

aws_json::operations! {
    service = SimpleWorkflow;
    RegisterDomain(RegisterDomainInput) -> RegisterDomainOutput;
    DescribeDomain(DescribeDomainInput) -> DomainDetail;
    ListDomains(ListDomainsInput) -> DomainInfos;
    StartWorkflowExecution(StartWorkflowExecutionInput) -> Run;
    /// Long-polls a task list for a decision task.
    PollForDecisionTask(PollForDecisionTaskInput) -> DecisionTask;
    RespondDecisionTaskCompleted(RespondDecisionTaskCompletedInput) -> RespondDecisionTaskCompletedOutput;
}
