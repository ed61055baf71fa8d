//! Purpose: Hyperparameter tuning job records.
//! Exports: objective, parameter range, limits and job definition shapes plus the create request.

use super::algorithm::MetricDefinition;
use super::common::{Tag, VpcConfig};
use super::training::{
    Channel, CheckpointConfig, OutputDataConfig, ResourceConfig, StoppingCondition,
};
use crate::core::shape::shape;
use std::collections::BTreeMap;

shape! {
    pub struct HyperParameterTuningJobObjective {
        "Type" => objective_type: String,
        "MetricName" => metric_name: String,
    }
}

shape! {
    /// Range bounds travel as strings on the wire.
    pub struct IntegerParameterRange {
        "Name" => name: String,
        "MinValue" => min_value: String,
        "MaxValue" => max_value: String,
        "ScalingType" => scaling_type: String,
    }
}

shape! {
    pub struct ContinuousParameterRange {
        "Name" => name: String,
        "MinValue" => min_value: String,
        "MaxValue" => max_value: String,
        "ScalingType" => scaling_type: String,
    }
}

shape! {
    pub struct CategoricalParameterRange {
        "Name" => name: String,
        "Values" => values: Vec<String>,
    }
}

shape! {
    pub struct ParameterRanges {
        "IntegerParameterRanges" => integer_parameter_ranges: Vec<IntegerParameterRange>,
        "ContinuousParameterRanges" => continuous_parameter_ranges: Vec<ContinuousParameterRange>,
        "CategoricalParameterRanges" => categorical_parameter_ranges: Vec<CategoricalParameterRange>,
    }
}

shape! {
    pub struct ResourceLimits {
        "MaxNumberOfTrainingJobs" => max_number_of_training_jobs: i32,
        "MaxParallelTrainingJobs" => max_parallel_training_jobs: i32,
    }
}

shape! {
    pub struct HyperParameterTuningJobConfig {
        "Strategy" => strategy: String,
        "HyperParameterTuningJobObjective" => hyper_parameter_tuning_job_objective: HyperParameterTuningJobObjective,
        "ResourceLimits" => resource_limits: ResourceLimits,
        "ParameterRanges" => parameter_ranges: ParameterRanges,
        "TrainingJobEarlyStoppingType" => training_job_early_stopping_type: String,
    }
}

shape! {
    pub struct HyperParameterAlgorithmSpecification {
        "TrainingImage" => training_image: String,
        "TrainingInputMode" => training_input_mode: String,
        "AlgorithmName" => algorithm_name: String,
        "MetricDefinitions" => metric_definitions: Vec<MetricDefinition>,
    }
}

shape! {
    pub struct HyperParameterTrainingJobDefinition {
        "DefinitionName" => definition_name: String,
        "TuningObjective" => tuning_objective: HyperParameterTuningJobObjective,
        "HyperParameterRanges" => hyper_parameter_ranges: ParameterRanges,
        "StaticHyperParameters" => static_hyper_parameters: BTreeMap<String, String>,
        "AlgorithmSpecification" => algorithm_specification: HyperParameterAlgorithmSpecification,
        "RoleArn" => role_arn: String,
        "InputDataConfig" => input_data_config: Vec<Channel>,
        "VpcConfig" => vpc_config: VpcConfig,
        "OutputDataConfig" => output_data_config: OutputDataConfig,
        "ResourceConfig" => resource_config: ResourceConfig,
        "StoppingCondition" => stopping_condition: StoppingCondition,
        "EnableNetworkIsolation" => enable_network_isolation: bool,
        "EnableInterContainerTrafficEncryption" => enable_inter_container_traffic_encryption: bool,
        "EnableManagedSpotTraining" => enable_managed_spot_training: bool,
        "CheckpointConfig" => checkpoint_config: CheckpointConfig,
    }
}

shape! {
    pub struct CreateHyperParameterTuningJobRequest {
        "HyperParameterTuningJobName" => hyper_parameter_tuning_job_name: String,
        "HyperParameterTuningJobConfig" => hyper_parameter_tuning_job_config: HyperParameterTuningJobConfig,
        "TrainingJobDefinition" => training_job_definition: HyperParameterTrainingJobDefinition,
        "TrainingJobDefinitions" => training_job_definitions: Vec<HyperParameterTrainingJobDefinition>,
        "Tags" => tags: Vec<Tag>,
    }
}

shape! {
    pub struct CreateHyperParameterTuningJobResult {
        "HyperParameterTuningJobArn" => hyper_parameter_tuning_job_arn: String,
    }
}
