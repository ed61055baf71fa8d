//! Purpose: Records shared across SageMaker API areas (tags, networking, experiments).
//! Exports: `Tag`, `VpcConfig`, `ExperimentConfig`, `EmptyResult` and the tagging requests.
//! Role: Leaf shapes reused by the training, inference and notebook records.

use crate::core::shape::shape;

shape! {
    pub struct Tag {
        "Key" => key: String,
        "Value" => value: String,
    }
}

shape! {
    /// Subnets and security groups for resources launched into a VPC.
    pub struct VpcConfig {
        "SecurityGroupIds" => security_group_ids: Vec<String>,
        "Subnets" => subnets: Vec<String>,
    }
}

shape! {
    pub struct ExperimentConfig {
        "ExperimentName" => experiment_name: String,
        "TrialName" => trial_name: String,
        "TrialComponentDisplayName" => trial_component_display_name: String,
    }
}

shape! {
    /// Output of operations whose response carries no fields.
    pub struct EmptyResult {}
}

shape! {
    pub struct AddTagsRequest {
        "ResourceArn" => resource_arn: String,
        "Tags" => tags: Vec<Tag>,
    }
}

shape! {
    pub struct AddTagsResult {
        "Tags" => tags: Vec<Tag>,
    }
}

shape! {
    pub struct DeleteTagsRequest {
        "ResourceArn" => resource_arn: String,
        "TagKeys" => tag_keys: Vec<String>,
    }
}

shape! {
    pub struct ListTagsRequest {
        "ResourceArn" => resource_arn: String,
        "NextToken" => next_token: String,
        "MaxResults" => max_results: i32,
    }
}

shape! {
    pub struct ListTagsResult {
        "Tags" => tags: Vec<Tag>,
        "NextToken" => next_token: String,
    }
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}
