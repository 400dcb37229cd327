/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_json::test_connection::TestConnection;
use http::header::CONTENT_LENGTH;
use http::Uri;
use protocol_test_helpers::{assert_ok, validate_body};
use smithy_http::body::SdkBody;
use smithy_types::DateTime;
use swf::input::{
    DescribeDomainInput, ListDomainsInput, PollForDecisionTaskInput, RegisterDomainInput,
    RespondDecisionTaskCompletedInput, StartWorkflowExecutionInput,
};
use swf::model::{
    ActivityType, CompleteWorkflowExecutionDecisionAttributes, Decision,
    ScheduleActivityTaskDecisionAttributes, TaskList, WorkflowType,
};
use swf::operation::{
    DescribeDomain, ListDomains, PollForDecisionTask, RegisterDomain,
    RespondDecisionTaskCompleted, StartWorkflowExecution,
};
use swf::{Client, Config, Region, SwfError};

fn request(operation: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .header("content-type", "application/x-amz-json-1.0")
        .header("x-amz-target", format!("SimpleWorkflowService.{}", operation))
        .uri(Uri::from_static("https://swf.us-west-2.amazonaws.com/"))
        .body(SdkBody::from(body))
        .unwrap()
}

fn ok(body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(200).body(body).unwrap()
}

fn client(conn: &TestConnection<&'static str>) -> Client<TestConnection<&'static str>> {
    Client::new(
        Config::builder()
            .region(Region::from_static("us-west-2"))
            .build(),
        conn.clone(),
    )
}

#[test]
fn register_domain() {
    let conn = TestConnection::new(vec![(
        request(
            "RegisterDomain",
            r#"{"name":"orders","workflowExecutionRetentionPeriodInDays":"30"}"#,
        ),
        ok(""),
    )]);
    client(&conn)
        .call::<RegisterDomain>(
            &RegisterDomainInput::default()
                .name("orders")
                .workflow_execution_retention_period_in_days("30"),
        )
        .expect("call succeeds");
    conn.requests()[0].assert_matches(&[CONTENT_LENGTH]);
}

#[test]
fn domain_already_exists() {
    let conn = TestConnection::new(vec![(
        request("RegisterDomain", r#"{"name":"orders"}"#),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type":"com.amazonaws.swf.base.model#DomainAlreadyExistsFault","message":"orders"}"#)
            .unwrap(),
    )]);
    let err = client(&conn)
        .call::<RegisterDomain>(&RegisterDomainInput::default().name("orders"))
        .expect_err("domain exists");
    assert!(matches!(
        err.service_error(),
        Some(SwfError::DomainAlreadyExistsFault(_))
    ));
    assert_eq!(Some("DomainAlreadyExistsFault"), err.service_error().and_then(|e| e.code()));
}

#[test]
fn describe_domain() {
    let conn = TestConnection::new(vec![(
        request("DescribeDomain", r#"{"name":"orders"}"#),
        ok(r#"{
            "configuration": {"workflowExecutionRetentionPeriodInDays": "30"},
            "domainInfo": {"name": "orders", "status": "REGISTERED", "arn": "arn:aws:swf:us-west-2:123456789012:/domain/orders"}
        }"#),
    )]);
    let detail = client(&conn)
        .call::<DescribeDomain>(&DescribeDomainInput::default().name("orders"))
        .expect("call succeeds");
    let info = detail.domain_info.expect("info is present");
    assert_eq!(Some("orders"), info.name.as_deref());
    assert_eq!(Some("REGISTERED"), info.status.as_deref());
    assert_eq!(None, info.description);
    assert_eq!(
        Some("30"),
        detail
            .configuration
            .as_ref()
            .and_then(|c| c.workflow_execution_retention_period_in_days.as_deref())
    );
}

#[test]
fn list_domains() {
    let conn = TestConnection::new(vec![(
        request(
            "ListDomains",
            r#"{"registrationStatus":"REGISTERED","maximumPageSize":2}"#,
        ),
        ok(r#"{"domainInfos":[{"name":"a","status":"REGISTERED"},{"name":"b","status":"REGISTERED"}],"nextPageToken":"p2"}"#),
    )]);
    let page = client(&conn)
        .call::<ListDomains>(
            &ListDomainsInput::default()
                .registration_status("REGISTERED")
                .maximum_page_size(2),
        )
        .expect("call succeeds");
    let names: Vec<_> = page
        .domain_infos
        .unwrap_or_default()
        .into_iter()
        .filter_map(|d| d.name)
        .collect();
    assert_eq!(vec!["a", "b"], names);
    assert_eq!(Some("p2"), page.next_page_token.as_deref());
    conn.requests()[0].assert_matches(&[]);
}

#[test]
fn start_workflow_execution() {
    let conn = TestConnection::new(vec![(
        request(
            "StartWorkflowExecution",
            r#"{"domain":"orders","workflowId":"order-1","workflowType":{"name":"ProcessOrder","version":"1.0"},"taskList":{"name":"main"},"input":"{\"orderId\":1}","tagList":[]}"#,
        ),
        ok(r#"{"runId":"22bLlzo1W0ZZRW7fwPgjcPsRJDC/Xy3YuxlW6lB4iVzQ4="}"#),
    )]);
    let run = client(&conn)
        .call::<StartWorkflowExecution>(
            &StartWorkflowExecutionInput::default()
                .domain("orders")
                .workflow_id("order-1")
                .workflow_type(WorkflowType::default().name("ProcessOrder").version("1.0"))
                .task_list(TaskList::default().name("main"))
                .input(r#"{"orderId":1}"#)
                .tag_list(vec![]),
        )
        .expect("call succeeds");
    assert_eq!(
        Some("22bLlzo1W0ZZRW7fwPgjcPsRJDC/Xy3YuxlW6lB4iVzQ4="),
        run.run_id.as_deref()
    );
    conn.requests()[0].assert_matches(&[CONTENT_LENGTH]);
}

#[test]
fn poll_for_decision_task() {
    let conn = TestConnection::new(vec![(
        request(
            "PollForDecisionTask",
            r#"{"domain":"orders","taskList":{"name":"main"},"identity":"decider-1"}"#,
        ),
        ok(r#"{
            "events": [
                {
                    "eventId": 1,
                    "eventTimestamp": 1326592619.474,
                    "eventType": "WorkflowExecutionStarted",
                    "workflowExecutionStartedEventAttributes": {
                        "childPolicy": "TERMINATE",
                        "executionStartToCloseTimeout": "3600",
                        "input": "{\"orderId\":1}",
                        "parentInitiatedEventId": 0,
                        "tagList": ["priority"],
                        "taskList": {"name": "main"},
                        "taskStartToCloseTimeout": "600",
                        "workflowType": {"name": "ProcessOrder", "version": "1.0"}
                    }
                },
                {
                    "decisionTaskScheduledEventAttributes": {"startToCloseTimeout": "600", "taskList": {"name": "main"}},
                    "eventId": 2,
                    "eventTimestamp": 1326592619.474,
                    "eventType": "DecisionTaskScheduled"
                },
                {
                    "decisionTaskStartedEventAttributes": {"identity": "decider-1", "scheduledEventId": 2},
                    "eventId": 3,
                    "eventTimestamp": 1326592619.5,
                    "eventType": "DecisionTaskStarted"
                }
            ],
            "previousStartedEventId": 0,
            "startedEventId": 3,
            "taskToken": "AAAAKgAAAAEAAAAAAAAAATZDvCYwk",
            "workflowExecution": {"runId": "r1", "workflowId": "order-1"},
            "workflowType": {"name": "ProcessOrder", "version": "1.0"}
        }"#),
    )]);
    let task = client(&conn)
        .call::<PollForDecisionTask>(
            &PollForDecisionTaskInput::default()
                .domain("orders")
                .task_list(TaskList::default().name("main"))
                .identity("decider-1"),
        )
        .expect("call succeeds");
    assert_eq!(Some("AAAAKgAAAAEAAAAAAAAAATZDvCYwk"), task.task_token.as_deref());
    assert_eq!(Some(3), task.started_event_id);
    assert_eq!(Some(0), task.previous_started_event_id);
    assert_eq!(
        Some("ProcessOrder"),
        task.workflow_type.as_ref().and_then(|t| t.name.as_deref())
    );
    assert_eq!(
        Some("order-1"),
        task.workflow_execution
            .as_ref()
            .and_then(|e| e.workflow_id.as_deref())
    );

    let events = task.events.expect("history is present");
    assert_eq!(3, events.len());
    assert_eq!(
        Some(DateTime::from_secs_and_nanos(1326592619, 474_000_000)),
        events[0].event_timestamp
    );
    let started = events[0]
        .workflow_execution_started_event_attributes
        .as_ref()
        .expect("attributes are present");
    assert_eq!(Some(r#"{"orderId":1}"#), started.input.as_deref());
    assert_eq!(Some(vec!["priority".to_string()]), started.tag_list);
    assert_eq!(
        Some("main"),
        started.task_list.as_ref().and_then(|t| t.name.as_deref())
    );
    assert_eq!(None, events[0].decision_task_scheduled_event_attributes);

    assert_eq!(Some(2), events[1].event_id);
    assert_eq!(
        Some("600"),
        events[1]
            .decision_task_scheduled_event_attributes
            .as_ref()
            .and_then(|a| a.start_to_close_timeout.as_deref())
    );
    assert_eq!(
        Some(2),
        events[2]
            .decision_task_started_event_attributes
            .as_ref()
            .and_then(|a| a.scheduled_event_id)
    );
}

#[test]
fn empty_poll_response() {
    let conn = TestConnection::new(vec![(
        request("PollForDecisionTask", r#"{"domain":"orders"}"#),
        ok(r#"{"previousStartedEventId":0,"startedEventId":0}"#),
    )]);
    let task = client(&conn)
        .call::<PollForDecisionTask>(&PollForDecisionTaskInput::default().domain("orders"))
        .expect("call succeeds");
    assert_eq!(None, task.task_token);
    assert_eq!(None, task.events);
}

#[tokio::test]
async fn respond_decision_task_completed() {
    let conn = TestConnection::new(vec![(
        request("RespondDecisionTaskCompleted", "{}"),
        ok(""),
    )]);
    let input = RespondDecisionTaskCompletedInput::default()
        .task_token("AAAAKgAAAAEAAAAAAAAAATZDvCYwk")
        .decisions(vec![
            Decision::default()
                .decision_type("ScheduleActivityTask")
                .schedule_activity_task_decision_attributes(
                    ScheduleActivityTaskDecisionAttributes::default()
                        .activity_type(ActivityType::default().name("Charge").version("1.0"))
                        .activity_id("charge-1")
                        .input("42"),
                ),
            Decision::default()
                .decision_type("CompleteWorkflowExecution")
                .complete_workflow_execution_decision_attributes(
                    CompleteWorkflowExecutionDecisionAttributes::default().result("done"),
                ),
        ]);
    client(&conn)
        .call_async::<RespondDecisionTaskCompleted>(input)
        .await
        .expect("call succeeds");
    assert_ok(validate_body(
        conn.requests()[0].actual.body().bytes(),
        r#"{
            "taskToken": "AAAAKgAAAAEAAAAAAAAAATZDvCYwk",
            "decisions": [
                {
                    "decisionType": "ScheduleActivityTask",
                    "scheduleActivityTaskDecisionAttributes": {
                        "activityType": {"name": "Charge", "version": "1.0"},
                        "activityId": "charge-1",
                        "input": "42"
                    }
                },
                {
                    "decisionType": "CompleteWorkflowExecution",
                    "completeWorkflowExecutionDecisionAttributes": {"result": "done"}
                }
            ]
        }"#,
        "application/x-amz-json-1.0",
    ));
}
