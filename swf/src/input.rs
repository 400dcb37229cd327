/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{Decision, TaskList, WorkflowType};
use smithy_json::structure;

structure! {
    pub struct RegisterDomainInput {
        name: String => "name",
        description: String => "description",
        /// Number of days, or `NONE`.
        workflow_execution_retention_period_in_days: String => "workflowExecutionRetentionPeriodInDays",
    }
}

structure! {
    pub struct DescribeDomainInput {
        name: String => "name",
    }
}

structure! {
    pub struct ListDomainsInput {
        next_page_token: String => "nextPageToken",
        registration_status: String => "registrationStatus",
        maximum_page_size: i32 => "maximumPageSize",
        reverse_order: bool => "reverseOrder",
    }
}

structure! {
    pub struct StartWorkflowExecutionInput {
        domain: String => "domain",
        workflow_id: String => "workflowId",
        workflow_type: WorkflowType => "workflowType",
        task_list: TaskList => "taskList",
        task_priority: String => "taskPriority",
        input: String => "input",
        execution_start_to_close_timeout: String => "executionStartToCloseTimeout",
        tag_list: Vec<String> => "tagList",
        task_start_to_close_timeout: String => "taskStartToCloseTimeout",
        child_policy: String => "childPolicy",
        lambda_role: String => "lambdaRole",
    }
}

structure! {
    pub struct PollForDecisionTaskInput {
        domain: String => "domain",
        task_list: TaskList => "taskList",
        identity: String => "identity",
        next_page_token: String => "nextPageToken",
        maximum_page_size: i32 => "maximumPageSize",
        reverse_order: bool => "reverseOrder",
    }
}

structure! {
    pub struct RespondDecisionTaskCompletedInput {
        task_token: String => "taskToken",
        decisions: Vec<Decision> => "decisions",
        execution_context: String => "executionContext",
    }
}
