/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_json::test_connection::TestConnection;
use http::Uri;
use indexmap::IndexMap;
use opsworks::input::{
    CreateStackInput, DescribeCommandsInput, DescribeElasticIpsInput, DescribeLayersInput,
    DescribeStacksInput,
};
use opsworks::model::StackConfigurationManager;
use opsworks::operation::{
    CreateStack, DescribeCommands, DescribeElasticIps, DescribeLayers, DescribeStacks,
};
use opsworks::{Client, Config, OpsWorksError, Region, SdkError};
use protocol_test_helpers::{assert_ok, validate_body};
use smithy_http::body::SdkBody;

fn request(operation: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", format!("OpsWorks_20130218.{}", operation))
        .uri(Uri::from_static("https://opsworks.us-east-1.amazonaws.com/"))
        .body(SdkBody::from(body))
        .unwrap()
}

fn ok(body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(200).body(body).unwrap()
}

fn client(conn: &TestConnection<&'static str>) -> Client<TestConnection<&'static str>> {
    Client::new(
        Config::builder()
            .region(Region::from_static("us-east-1"))
            .build(),
        conn.clone(),
    )
}

#[test]
fn empty_elastic_ip_list_is_present() {
    let conn = TestConnection::new(vec![(
        request("DescribeElasticIps", r#"{"StackId":"s1"}"#),
        ok(r#"{"ElasticIps":[]}"#),
    )]);
    let output = client(&conn)
        .call::<DescribeElasticIps>(&DescribeElasticIpsInput::default().stack_id("s1"))
        .expect("call succeeds");
    assert_eq!(Some(vec![]), output.elastic_ips);
    conn.requests()[0].assert_matches(&[]);
}

#[test]
fn elastic_ips() {
    let conn = TestConnection::new(vec![(
        request("DescribeElasticIps", r#"{"Ips":["192.0.2.10"]}"#),
        ok(r#"{"ElasticIps":[{"Ip":"192.0.2.10","Name":"web","Domain":"vpc","Region":"us-east-1","InstanceId":"i1"}]}"#),
    )]);
    let output = client(&conn)
        .call::<DescribeElasticIps>(
            &DescribeElasticIpsInput::default().ips(vec!["192.0.2.10".to_string()]),
        )
        .expect("call succeeds");
    let ips = output.elastic_ips.expect("list is present");
    assert_eq!(Some("vpc"), ips[0].domain.as_deref());
    assert_eq!(Some("i1"), ips[0].instance_id.as_deref());
}

#[test]
fn command_exit_code_zero() {
    let conn = TestConnection::new(vec![(
        request("DescribeCommands", r#"{"DeploymentId":"d1"}"#),
        ok(r#"{"Commands":[
            {"CommandId":"c1","Status":"successful","ExitCode":0,"Type":"deploy"},
            {"CommandId":"c2","Status":"failed","ExitCode":1,"LogUrl":"https://example.com/log"}
        ]}"#),
    )]);
    let output = client(&conn)
        .call::<DescribeCommands>(&DescribeCommandsInput::default().deployment_id("d1"))
        .expect("call succeeds");
    let commands = output.commands.expect("list is present");
    assert_eq!(Some(0), commands[0].exit_code);
    assert_eq!(Some("deploy"), commands[0].r#type.as_deref());
    assert_eq!(Some(1), commands[1].exit_code);
    assert_eq!(None, commands[1].r#type);
}

#[test]
fn nested_names_do_not_leak() {
    let conn = TestConnection::new(vec![(
        request("DescribeStacks", r#"{"StackIds":["s1"]}"#),
        ok(r#"{"Stacks":[{
            "StackId": "s1",
            "ConfigurationManager": {"Name": "Chef", "Version": "12"},
            "Name": "production",
            "Attributes": {"Color": "rgb(45, 114, 184)", "Empty": null},
            "ChefConfiguration": {"ManageBerkshelf": false},
            "CustomCookbooksSource": {"Type": "git", "Url": "https://example.com/cookbooks.git"},
            "UseCustomCookbooks": true
        }]}"#),
    )]);
    let output = client(&conn)
        .call::<DescribeStacks>(&DescribeStacksInput::default().stack_ids(vec!["s1".to_string()]))
        .expect("call succeeds");
    let stack = &output.stacks.expect("list is present")[0];
    assert_eq!(Some("production"), stack.name.as_deref());
    assert_eq!(
        Some(
            StackConfigurationManager::default()
                .name("Chef")
                .version("12")
        ),
        stack.configuration_manager
    );
    let attributes = stack.attributes.as_ref().expect("map is present");
    assert_eq!(Some("rgb(45, 114, 184)"), attributes.get("Color").map(String::as_str));
    assert!(!attributes.contains_key("Empty"));
    assert_eq!(Some(false), stack.chef_configuration.as_ref().and_then(|c| c.manage_berkshelf));
    assert_eq!(
        Some("git"),
        stack
            .custom_cookbooks_source
            .as_ref()
            .and_then(|s| s.r#type.as_deref())
    );
    assert_eq!(Some(true), stack.use_custom_cookbooks);
}

#[test]
fn layers_with_nested_lists() {
    let conn = TestConnection::new(vec![(
        request("DescribeLayers", r#"{"StackId":"s1"}"#),
        ok(r#"{"Layers":[{
            "LayerId": "l1",
            "Name": "php-app",
            "Packages": ["php", "nginx"],
            "VolumeConfigurations": [{"MountPoint": "/data", "RaidLevel": 0, "NumberOfDisks": 2, "Size": 100}],
            "DefaultRecipes": {"Setup": ["opsworks_initial_setup"], "Shutdown": []},
            "CustomRecipes": {"Deploy": ["app::deploy"]},
            "AutoAssignElasticIps": false
        }, {
            "LayerId": "l2",
            "Name": "db"
        }]}"#),
    )]);
    let output = client(&conn)
        .call::<DescribeLayers>(&DescribeLayersInput::default().stack_id("s1"))
        .expect("call succeeds");
    let layers = output.layers.expect("list is present");
    assert_eq!(2, layers.len());
    let app = &layers[0];
    assert_eq!(Some("php-app"), app.name.as_deref());
    assert_eq!(
        Some(vec!["php".to_string(), "nginx".to_string()]),
        app.packages
    );
    let volume = &app.volume_configurations.as_ref().expect("volumes are present")[0];
    assert_eq!(Some("/data"), volume.mount_point.as_deref());
    assert_eq!(Some(0), volume.raid_level);
    assert_eq!(Some(100), volume.size);
    let defaults = app.default_recipes.as_ref().expect("recipes are present");
    assert_eq!(Some(vec!["opsworks_initial_setup".to_string()]), defaults.setup);
    assert_eq!(Some(vec![]), defaults.shutdown);
    assert_eq!(None, defaults.deploy);
    assert_eq!(
        Some(vec!["app::deploy".to_string()]),
        app.custom_recipes.as_ref().and_then(|r| r.deploy.clone())
    );
    assert_eq!(Some("db"), layers[1].name.as_deref());
    assert_eq!(None, layers[1].packages);
}

#[test]
fn create_stack_body() {
    let conn = TestConnection::new(vec![(
        request("CreateStack", "{}"),
        ok(r#"{"StackId":"s2"}"#),
    )]);
    let mut attributes = IndexMap::new();
    attributes.insert("Color".to_string(), "rgb(135, 61, 98)".to_string());
    let output = client(&conn)
        .call::<CreateStack>(
            &CreateStackInput::default()
                .name("staging")
                .region("us-east-1")
                .attributes(attributes)
                .service_role_arn("arn:aws:iam::123456789012:role/aws-opsworks-service-role")
                .configuration_manager(
                    StackConfigurationManager::default()
                        .name("Chef")
                        .version("12"),
                ),
        )
        .expect("call succeeds");
    assert_eq!(Some("s2"), output.stack_id.as_deref());
    assert_ok(validate_body(
        conn.requests()[0].actual.body().bytes(),
        r#"{
            "Name": "staging",
            "Region": "us-east-1",
            "Attributes": {"Color": "rgb(135, 61, 98)"},
            "ServiceRoleArn": "arn:aws:iam::123456789012:role/aws-opsworks-service-role",
            "ConfigurationManager": {"Name": "Chef", "Version": "12"}
        }"#,
        "application/x-amz-json-1.1",
    ));
}

#[test]
fn validation_error() {
    let conn = TestConnection::new(vec![(
        request("DescribeElasticIps", "{}"),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "ValidationException:http://internal.amazon.com/coral/com.amazonaws.opsworks/")
            .body(r#"{"message":"Please provide exactly one of: InstanceId, StackId or Ips"}"#)
            .unwrap(),
    )]);
    let err = client(&conn)
        .call::<DescribeElasticIps>(&DescribeElasticIpsInput::default())
        .expect_err("request is invalid");
    match err {
        SdkError::ServiceError {
            err: OpsWorksError::ValidationException(e),
            ..
        } => assert_eq!(
            Some("Please provide exactly one of: InstanceId, StackId or Ips"),
            e.message()
        ),
        other => panic!("unexpected error: {:?}", other),
    }
}
