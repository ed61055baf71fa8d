//! Purpose: Model resources: inference containers and model lifecycle requests.
//! Exports: `ContainerDefinition`, `ModelSummary`, Create/Describe/Delete/List model shapes.

use super::common::{Tag, VpcConfig};
use crate::core::shape::shape;
use crate::core::timestamp::Timestamp;
use std::collections::BTreeMap;

shape! {
    pub struct ContainerDefinition {
        "ContainerHostname" => container_hostname: String,
        "Image" => image: String,
        "Mode" => mode: String,
        "ModelDataUrl" => model_data_url: String,
        "Environment" => environment: BTreeMap<String, String>,
        "ModelPackageName" => model_package_name: String,
    }
}

shape! {
    pub struct CreateModelRequest {
        "ModelName" => model_name: String,
        "PrimaryContainer" => primary_container: ContainerDefinition,
        "Containers" => containers: Vec<ContainerDefinition>,
        "ExecutionRoleArn" => execution_role_arn: String,
        "Tags" => tags: Vec<Tag>,
        "VpcConfig" => vpc_config: VpcConfig,
        "EnableNetworkIsolation" => enable_network_isolation: bool,
    }
}

shape! {
    pub struct CreateModelResult {
        "ModelArn" => model_arn: String,
    }
}

shape! {
    pub struct DescribeModelRequest {
        "ModelName" => model_name: String,
    }
}

shape! {
    pub struct DescribeModelResult {
        "ModelName" => model_name: String,
        "PrimaryContainer" => primary_container: ContainerDefinition,
        "Containers" => containers: Vec<ContainerDefinition>,
        "ExecutionRoleArn" => execution_role_arn: String,
        "VpcConfig" => vpc_config: VpcConfig,
        "CreationTime" => creation_time: Timestamp,
        "ModelArn" => model_arn: String,
        "EnableNetworkIsolation" => enable_network_isolation: bool,
    }
}

shape! {
    pub struct DeleteModelRequest {
        "ModelName" => model_name: String,
    }
}

shape! {
    pub struct ListModelsRequest {
        "SortBy" => sort_by: String,
        "SortOrder" => sort_order: String,
        "NextToken" => next_token: String,
        "MaxResults" => max_results: i32,
        "NameContains" => name_contains: String,
        "CreationTimeBefore" => creation_time_before: Timestamp,
        "CreationTimeAfter" => creation_time_after: Timestamp,
    }
}

shape! {
    pub struct ModelSummary {
        "ModelName" => model_name: String,
        "ModelArn" => model_arn: String,
        "CreationTime" => creation_time: Timestamp,
    }
}

shape! {
    pub struct ListModelsResult {
        "Models" => models: Vec<ModelSummary>,
        "NextToken" => next_token: String,
    }
}
