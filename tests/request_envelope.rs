//! Purpose: Lock the awsJson1_1 request envelope produced for typed requests.
//! Exports: Integration tests only.
//! Role: Exercise the public marshalling path end to end (record -> HttpRequest).
//! Invariants: Body bytes are exactly the set fields in declaration order.

use sagemaker_json::api::{
    CreateModel, CreateWorkteam, ErrorKind, Operation, RequestMarshaller, StartNotebookInstance,
};
use sagemaker_json::model::inference::{ContainerDefinition, CreateModelRequest};
use sagemaker_json::model::notebook::NotebookInstanceNameRequest;
use sagemaker_json::model::workteam::{
    CreateWorkteamRequest, MemberDefinition, OidcMemberDefinition,
};
use sagemaker_json::model::Tag;

#[test]
fn create_model_envelope_shape() {
    let request = CreateModelRequest {
        model_name: Some("m1".to_string()),
        execution_role_arn: Some("arn:aws:iam::123:role/x".to_string()),
        ..CreateModelRequest::default()
    };
    let http = CreateModel::marshall(&request).expect("marshal");
    assert_eq!(http.operation(), "CreateModel");
    assert_eq!(http.method(), "POST");
    assert_eq!(http.path(), "/");
    assert_eq!(http.header("X-Amz-Target"), Some("SageMaker.CreateModel"));
    assert_eq!(
        http.header("Content-Type"),
        Some("application/x-amz-json-1.1")
    );
    let expected = br#"{"ModelName":"m1","ExecutionRoleArn":"arn:aws:iam::123:role/x"}"#;
    assert_eq!(http.body().as_ref(), expected.as_slice());
    assert_eq!(
        http.header("Content-Length"),
        Some(expected.len().to_string().as_str())
    );
}

#[test]
fn nested_lists_maps_and_tags_are_written_in_order() {
    let mut environment = std::collections::BTreeMap::new();
    environment.insert("B".to_string(), "2".to_string());
    environment.insert("A".to_string(), "1".to_string());
    let request = CreateModelRequest {
        tags: Some(vec![Tag::new("team", "ml")]),
        primary_container: Some(ContainerDefinition {
            image: Some("img".to_string()),
            environment: Some(environment),
            ..ContainerDefinition::default()
        }),
        model_name: Some("m2".to_string()),
        ..CreateModelRequest::default()
    };
    let http = CreateModel::marshall(&request).expect("marshal");
    assert_eq!(
        std::str::from_utf8(http.body()).expect("utf8"),
        r#"{"ModelName":"m2","PrimaryContainer":{"Image":"img","Environment":{"A":"1","B":"2"}},"Tags":[{"Key":"team","Value":"ml"}]}"#
    );
}

#[test]
fn union_members_marshal_as_single_key_objects() {
    let request = CreateWorkteamRequest {
        workteam_name: Some("labelers".to_string()),
        member_definitions: Some(vec![MemberDefinition::Oidc(OidcMemberDefinition {
            groups: Some(vec!["g1".to_string()]),
        })]),
        ..CreateWorkteamRequest::default()
    };
    let http = CreateWorkteam::marshall(&request).expect("marshal");
    assert_eq!(
        std::str::from_utf8(http.body()).expect("utf8"),
        r#"{"WorkteamName":"labelers","MemberDefinitions":[{"OidcMemberDefinition":{"Groups":["g1"]}}]}"#
    );
}

#[test]
fn shared_request_record_uses_the_operation_target() {
    let http = StartNotebookInstance::marshall(&NotebookInstanceNameRequest::new("nb")).expect("marshal");
    assert_eq!(
        http.header("X-Amz-Target"),
        Some("SageMaker.StartNotebookInstance")
    );
    assert_eq!(http.body().as_ref(), br#"{"NotebookInstanceName":"nb"}"#.as_slice());
}

#[test]
fn absent_request_is_rejected_before_envelope() {
    let err = RequestMarshaller::SAGEMAKER
        .marshall::<CreateModelRequest>(CreateModel::NAME, None)
        .expect_err("absent request");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), Some("invalid argument passed to marshall(...)"));
}
