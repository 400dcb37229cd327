/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{DomainConfiguration, DomainInfo, HistoryEvent, WorkflowExecution, WorkflowType};
use smithy_json::structure;

structure! {
    pub struct RegisterDomainOutput {}
}

structure! {
    pub struct DomainDetail {
        domain_info: DomainInfo => "domainInfo",
        configuration: DomainConfiguration => "configuration",
    }
}

structure! {
    pub struct DomainInfos {
        domain_infos: Vec<DomainInfo> => "domainInfos",
        next_page_token: String => "nextPageToken",
    }
}

structure! {
    pub struct Run {
        run_id: String => "runId",
    }
}

structure! {
    /// A decision task. When no task was available within the poll window, every member is
    /// unset and `task_token` is empty or missing.
    pub struct DecisionTask {
        task_token: String => "taskToken",
        started_event_id: i64 => "startedEventId",
        workflow_execution: WorkflowExecution => "workflowExecution",
        workflow_type: WorkflowType => "workflowType",
        events: Vec<HistoryEvent> => "events",
        next_page_token: String => "nextPageToken",
        previous_started_event_id: i64 => "previousStartedEventId",
    }
}

structure! {
    pub struct RespondDecisionTaskCompletedOutput {}
}
