//! Purpose: Experiment tracking records, including the string-or-number parameter union.
//! Exports: `TrialComponentParameterValue` (union), artifact/status shapes, create requests.

use super::common::Tag;
use crate::core::shape::{shape, union_shape};
use crate::core::timestamp::Timestamp;
use std::collections::BTreeMap;

union_shape! {
    pub enum TrialComponentParameterValue {
        "StringValue" => Text(String),
        "NumberValue" => Number(f64),
    }
}

shape! {
    pub struct TrialComponentStatus {
        "PrimaryStatus" => primary_status: String,
        "Message" => message: String,
    }
}

shape! {
    pub struct TrialComponentArtifact {
        "MediaType" => media_type: String,
        "Value" => value: String,
    }
}

shape! {
    pub struct CreateTrialComponentRequest {
        "TrialComponentName" => trial_component_name: String,
        "DisplayName" => display_name: String,
        "Status" => status: TrialComponentStatus,
        "StartTime" => start_time: Timestamp,
        "EndTime" => end_time: Timestamp,
        "Parameters" => parameters: BTreeMap<String, TrialComponentParameterValue>,
        "InputArtifacts" => input_artifacts: BTreeMap<String, TrialComponentArtifact>,
        "OutputArtifacts" => output_artifacts: BTreeMap<String, TrialComponentArtifact>,
        "Tags" => tags: Vec<Tag>,
    }
}

shape! {
    pub struct CreateTrialComponentResult {
        "TrialComponentArn" => trial_component_arn: String,
    }
}

shape! {
    pub struct CreateExperimentRequest {
        "ExperimentName" => experiment_name: String,
        "DisplayName" => display_name: String,
        "Description" => description: String,
        "Tags" => tags: Vec<Tag>,
    }
}

shape! {
    pub struct CreateExperimentResult {
        "ExperimentArn" => experiment_arn: String,
    }
}
