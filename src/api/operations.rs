//! Purpose: The table of supported SageMaker operations.
//! Exports: One unit type per operation, `OPERATIONS`, `find_operation`.
//! Role: Expands `operations!`, which also generates the typed `SageMakerClient` methods.
//! Invariants: Operation names are the `X-Amz-Target` suffixes and are unique.

use crate::core::operation::{OperationDescriptor, operations};
use crate::model::algorithm::{
    DeleteAlgorithmRequest, DescribeAlgorithmRequest, DescribeAlgorithmResult,
    ListAlgorithmsRequest, ListAlgorithmsResult,
};
use crate::model::common::{
    AddTagsRequest, AddTagsResult, DeleteTagsRequest, EmptyResult, ListTagsRequest,
    ListTagsResult,
};
use crate::model::endpoint::{
    CreateEndpointConfigRequest, CreateEndpointConfigResult, CreateEndpointRequest,
    CreateEndpointResult, DeleteEndpointRequest, DescribeEndpointRequest, DescribeEndpointResult,
};
use crate::model::experiment::{
    CreateExperimentRequest, CreateExperimentResult, CreateTrialComponentRequest,
    CreateTrialComponentResult,
};
use crate::model::inference::{
    CreateModelRequest, CreateModelResult, DeleteModelRequest, DescribeModelRequest,
    DescribeModelResult, ListModelsRequest, ListModelsResult,
};
use crate::model::notebook::{
    CreateNotebookInstanceRequest, CreateNotebookInstanceResult, DescribeNotebookInstanceResult,
    NotebookInstanceNameRequest, UpdateNotebookInstanceRequest,
};
use crate::model::training::{
    CreateTrainingJobRequest, CreateTrainingJobResult, DescribeTrainingJobRequest,
    DescribeTrainingJobResult, ListTrainingJobsRequest, ListTrainingJobsResult,
    StopTrainingJobRequest,
};
use crate::model::transform::{CreateTransformJobRequest, CreateTransformJobResult};
use crate::model::tuning::{
    CreateHyperParameterTuningJobRequest, CreateHyperParameterTuningJobResult,
};
use crate::model::workteam::{
    CreateWorkteamRequest, CreateWorkteamResult, DescribeWorkteamRequest, DescribeWorkteamResult,
};

operations! {
    AddTags => fn add_tags(AddTagsRequest) -> AddTagsResult;
    DeleteTags => fn delete_tags(DeleteTagsRequest) -> EmptyResult;
    ListTags => fn list_tags(ListTagsRequest) -> ListTagsResult;

    ListAlgorithms => fn list_algorithms(ListAlgorithmsRequest) -> ListAlgorithmsResult;
    DescribeAlgorithm => fn describe_algorithm(DescribeAlgorithmRequest) -> DescribeAlgorithmResult;
    DeleteAlgorithm => fn delete_algorithm(DeleteAlgorithmRequest) -> EmptyResult;

    CreateModel => fn create_model(CreateModelRequest) -> CreateModelResult;
    DescribeModel => fn describe_model(DescribeModelRequest) -> DescribeModelResult;
    DeleteModel => fn delete_model(DeleteModelRequest) -> EmptyResult;
    ListModels => fn list_models(ListModelsRequest) -> ListModelsResult;

    CreateTrainingJob => fn create_training_job(CreateTrainingJobRequest) -> CreateTrainingJobResult;
    DescribeTrainingJob => fn describe_training_job(DescribeTrainingJobRequest) -> DescribeTrainingJobResult;
    StopTrainingJob => fn stop_training_job(StopTrainingJobRequest) -> EmptyResult;
    ListTrainingJobs => fn list_training_jobs(ListTrainingJobsRequest) -> ListTrainingJobsResult;

    CreateTransformJob => fn create_transform_job(CreateTransformJobRequest) -> CreateTransformJobResult;
    CreateHyperParameterTuningJob => fn create_hyper_parameter_tuning_job(
        CreateHyperParameterTuningJobRequest
    ) -> CreateHyperParameterTuningJobResult;

    CreateEndpointConfig => fn create_endpoint_config(CreateEndpointConfigRequest) -> CreateEndpointConfigResult;
    CreateEndpoint => fn create_endpoint(CreateEndpointRequest) -> CreateEndpointResult;
    DescribeEndpoint => fn describe_endpoint(DescribeEndpointRequest) -> DescribeEndpointResult;
    DeleteEndpoint => fn delete_endpoint(DeleteEndpointRequest) -> EmptyResult;

    CreateNotebookInstance => fn create_notebook_instance(CreateNotebookInstanceRequest) -> CreateNotebookInstanceResult;
    DescribeNotebookInstance => fn describe_notebook_instance(NotebookInstanceNameRequest) -> DescribeNotebookInstanceResult;
    UpdateNotebookInstance => fn update_notebook_instance(UpdateNotebookInstanceRequest) -> EmptyResult;
    StartNotebookInstance => fn start_notebook_instance(NotebookInstanceNameRequest) -> EmptyResult;
    StopNotebookInstance => fn stop_notebook_instance(NotebookInstanceNameRequest) -> EmptyResult;
    DeleteNotebookInstance => fn delete_notebook_instance(NotebookInstanceNameRequest) -> EmptyResult;

    CreateWorkteam => fn create_workteam(CreateWorkteamRequest) -> CreateWorkteamResult;
    DescribeWorkteam => fn describe_workteam(DescribeWorkteamRequest) -> DescribeWorkteamResult;

    CreateExperiment => fn create_experiment(CreateExperimentRequest) -> CreateExperimentResult;
    CreateTrialComponent => fn create_trial_component(CreateTrialComponentRequest) -> CreateTrialComponentResult;
}

pub fn find_operation(name: &str) -> Option<&'static OperationDescriptor> {
    OPERATIONS.iter().find(|operation| operation.name() == name)
}

#[cfg(test)]
mod tests {
    use super::{CreateModel, OPERATIONS, find_operation};
    use crate::core::error::ErrorKind;
    use crate::core::operation::Operation;
    use crate::core::request::RequestMarshaller;
    use crate::model::inference::CreateModelRequest;
    use serde_json::json;
    use std::collections::BTreeSet;

    #[test]
    fn names_are_unique() {
        let names: BTreeSet<_> = OPERATIONS.iter().map(|op| op.name()).collect();
        assert_eq!(names.len(), OPERATIONS.len());
        assert_eq!(OPERATIONS.len(), 30);
    }

    #[test]
    fn find_operation_is_exact() {
        assert!(find_operation("CreateModel").is_some());
        assert!(find_operation("createmodel").is_none());
        assert!(find_operation("SageMaker.CreateModel").is_none());
    }

    #[test]
    fn typed_marshall_uses_operation_name() {
        let request = CreateModelRequest {
            model_name: Some("m1".to_string()),
            execution_role_arn: Some("arn:aws:iam::123:role/x".to_string()),
            ..CreateModelRequest::default()
        };
        let http = CreateModel::marshall(&request).expect("marshal");
        assert_eq!(http.method(), "POST");
        assert_eq!(http.path(), "/");
        assert_eq!(http.header("X-Amz-Target"), Some("SageMaker.CreateModel"));
        let body: serde_json::Value = serde_json::from_slice(http.body()).expect("json");
        assert_eq!(
            body,
            json!({"ModelName": "m1", "ExecutionRoleArn": "arn:aws:iam::123:role/x"})
        );
    }

    #[test]
    fn descriptor_marshall_drops_unknown_fields() {
        let operation = find_operation("DescribeModel").expect("registered");
        let http = operation
            .marshall_json(&RequestMarshaller::SAGEMAKER, br#"{"ModelName":"m","Zzz":[1]}"#)
            .expect("marshal");
        assert_eq!(http.body().as_ref(), br#"{"ModelName":"m"}"#);
    }

    #[test]
    fn descriptor_marshall_rejects_non_object_and_bad_json() {
        let operation = find_operation("DescribeModel").expect("registered");
        let err = operation
            .marshall_json(&RequestMarshaller::SAGEMAKER, br#""hello""#)
            .expect_err("scalar");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = operation
            .marshall_json(&RequestMarshaller::SAGEMAKER, br#"{"ModelName": 5"#)
            .expect_err("truncated");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.operation(), Some("DescribeModel"));
    }

    #[test]
    fn descriptor_unmarshall_keeps_known_fields() {
        let operation = find_operation("DescribeNotebookInstance").expect("registered");
        let value = operation
            .unmarshall_json(
                br#"{"NotebookInstanceName":"nb","NotebookInstanceStatus":"InService","Shiny":1}"#,
            )
            .expect("unmarshal");
        assert_eq!(
            value,
            json!({"NotebookInstanceName": "nb", "NotebookInstanceStatus": "InService"})
        );
    }
}
