/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_json::structure;
use smithy_types::DateTime;

structure! {
    pub struct DomainInfo {
        name: String => "name",
        /// `REGISTERED` or `DEPRECATED`.
        status: String => "status",
        description: String => "description",
        arn: String => "arn",
    }
}

structure! {
    pub struct DomainConfiguration {
        workflow_execution_retention_period_in_days: String => "workflowExecutionRetentionPeriodInDays",
    }
}

structure! {
    pub struct WorkflowType {
        name: String => "name",
        version: String => "version",
    }
}

structure! {
    pub struct ActivityType {
        name: String => "name",
        version: String => "version",
    }
}

structure! {
    pub struct TaskList {
        name: String => "name",
    }
}

structure! {
    pub struct WorkflowExecution {
        workflow_id: String => "workflowId",
        run_id: String => "runId",
    }
}

structure! {
    pub struct WorkflowExecutionStartedEventAttributes {
        input: String => "input",
        execution_start_to_close_timeout: String => "executionStartToCloseTimeout",
        task_start_to_close_timeout: String => "taskStartToCloseTimeout",
        child_policy: String => "childPolicy",
        task_list: TaskList => "taskList",
        task_priority: String => "taskPriority",
        workflow_type: WorkflowType => "workflowType",
        tag_list: Vec<String> => "tagList",
        parent_initiated_event_id: i64 => "parentInitiatedEventId",
        lambda_role: String => "lambdaRole",
    }
}

structure! {
    pub struct DecisionTaskScheduledEventAttributes {
        task_list: TaskList => "taskList",
        task_priority: String => "taskPriority",
        start_to_close_timeout: String => "startToCloseTimeout",
    }
}

structure! {
    pub struct DecisionTaskStartedEventAttributes {
        identity: String => "identity",
        scheduled_event_id: i64 => "scheduledEventId",
    }
}

structure! {
    pub struct DecisionTaskCompletedEventAttributes {
        execution_context: String => "executionContext",
        scheduled_event_id: i64 => "scheduledEventId",
        started_event_id: i64 => "startedEventId",
    }
}

structure! {
    pub struct ActivityTaskScheduledEventAttributes {
        activity_type: ActivityType => "activityType",
        activity_id: String => "activityId",
        input: String => "input",
        task_list: TaskList => "taskList",
        decision_task_completed_event_id: i64 => "decisionTaskCompletedEventId",
    }
}

structure! {
    /// One event of a workflow execution's history. Exactly one attributes member is set,
    /// matching `event_type`.
    pub struct HistoryEvent {
        event_timestamp: DateTime => "eventTimestamp",
        event_type: String => "eventType",
        event_id: i64 => "eventId",
        workflow_execution_started_event_attributes: WorkflowExecutionStartedEventAttributes => "workflowExecutionStartedEventAttributes",
        decision_task_scheduled_event_attributes: DecisionTaskScheduledEventAttributes => "decisionTaskScheduledEventAttributes",
        decision_task_started_event_attributes: DecisionTaskStartedEventAttributes => "decisionTaskStartedEventAttributes",
        decision_task_completed_event_attributes: DecisionTaskCompletedEventAttributes => "decisionTaskCompletedEventAttributes",
        activity_task_scheduled_event_attributes: ActivityTaskScheduledEventAttributes => "activityTaskScheduledEventAttributes",
    }
}

structure! {
    pub struct ScheduleActivityTaskDecisionAttributes {
        activity_type: ActivityType => "activityType",
        activity_id: String => "activityId",
        control: String => "control",
        input: String => "input",
        schedule_to_close_timeout: String => "scheduleToCloseTimeout",
        task_list: TaskList => "taskList",
        start_to_close_timeout: String => "startToCloseTimeout",
    }
}

structure! {
    pub struct CompleteWorkflowExecutionDecisionAttributes {
        result: String => "result",
    }
}

structure! {
    pub struct FailWorkflowExecutionDecisionAttributes {
        reason: String => "reason",
        details: String => "details",
    }
}

structure! {
    pub struct Decision {
        decision_type: String => "decisionType",
        schedule_activity_task_decision_attributes: ScheduleActivityTaskDecisionAttributes => "scheduleActivityTaskDecisionAttributes",
        complete_workflow_execution_decision_attributes: CompleteWorkflowExecutionDecisionAttributes => "completeWorkflowExecutionDecisionAttributes",
        fail_workflow_execution_decision_attributes: FailWorkflowExecutionDecisionAttributes => "failWorkflowExecutionDecisionAttributes",
    }
}
