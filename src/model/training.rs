//! Purpose: Training job records: data channels, compute, debugging and job status.
//! Exports: channel/config shapes plus Create/Describe/Stop/List training job requests.

use super::algorithm::AlgorithmSpecification;
use super::common::{ExperimentConfig, Tag, VpcConfig};
use crate::core::shape::shape;
use crate::core::timestamp::Timestamp;
use std::collections::BTreeMap;

shape! {
    pub struct S3DataSource {
        "S3DataType" => s3_data_type: String,
        "S3Uri" => s3_uri: String,
        "S3DataDistributionType" => s3_data_distribution_type: String,
        "AttributeNames" => attribute_names: Vec<String>,
    }
}

shape! {
    pub struct FileSystemDataSource {
        "FileSystemId" => file_system_id: String,
        "FileSystemAccessMode" => file_system_access_mode: String,
        "FileSystemType" => file_system_type: String,
        "DirectoryPath" => directory_path: String,
    }
}

shape! {
    pub struct DataSource {
        "S3DataSource" => s3_data_source: S3DataSource,
        "FileSystemDataSource" => file_system_data_source: FileSystemDataSource,
    }
}

shape! {
    pub struct ShuffleConfig {
        "Seed" => seed: i64,
    }
}

shape! {
    /// One named input to a training job.
    pub struct Channel {
        "ChannelName" => channel_name: String,
        "DataSource" => data_source: DataSource,
        "ContentType" => content_type: String,
        "CompressionType" => compression_type: String,
        "RecordWrapperType" => record_wrapper_type: String,
        "InputMode" => input_mode: String,
        "ShuffleConfig" => shuffle_config: ShuffleConfig,
    }
}

shape! {
    pub struct OutputDataConfig {
        "KmsKeyId" => kms_key_id: String,
        "S3OutputPath" => s3_output_path: String,
    }
}

shape! {
    pub struct ResourceConfig {
        "InstanceType" => instance_type: String,
        "InstanceCount" => instance_count: i32,
        "VolumeSizeInGB" => volume_size_in_gb: i32,
        "VolumeKmsKeyId" => volume_kms_key_id: String,
    }
}

shape! {
    pub struct StoppingCondition {
        "MaxRuntimeInSeconds" => max_runtime_in_seconds: i32,
        "MaxWaitTimeInSeconds" => max_wait_time_in_seconds: i32,
    }
}

shape! {
    pub struct CheckpointConfig {
        "S3Uri" => s3_uri: String,
        "LocalPath" => local_path: String,
    }
}

shape! {
    pub struct CollectionConfiguration {
        "CollectionName" => collection_name: String,
        "CollectionParameters" => collection_parameters: BTreeMap<String, String>,
    }
}

shape! {
    pub struct DebugHookConfig {
        "LocalPath" => local_path: String,
        "S3OutputPath" => s3_output_path: String,
        "HookParameters" => hook_parameters: BTreeMap<String, String>,
        "CollectionConfigurations" => collection_configurations: Vec<CollectionConfiguration>,
    }
}

shape! {
    pub struct DebugRuleConfiguration {
        "RuleConfigurationName" => rule_configuration_name: String,
        "LocalPath" => local_path: String,
        "S3OutputPath" => s3_output_path: String,
        "RuleEvaluatorImage" => rule_evaluator_image: String,
        "InstanceType" => instance_type: String,
        "VolumeSizeInGB" => volume_size_in_gb: i32,
        "RuleParameters" => rule_parameters: BTreeMap<String, String>,
    }
}

shape! {
    pub struct TensorBoardOutputConfig {
        "LocalPath" => local_path: String,
        "S3OutputPath" => s3_output_path: String,
    }
}

shape! {
    pub struct ModelArtifacts {
        "S3ModelArtifacts" => s3_model_artifacts: String,
    }
}

shape! {
    pub struct SecondaryStatusTransition {
        "Status" => status: String,
        "StartTime" => start_time: Timestamp,
        "EndTime" => end_time: Timestamp,
        "StatusMessage" => status_message: String,
    }
}

shape! {
    pub struct MetricData {
        "MetricName" => metric_name: String,
        "Value" => value: f64,
        "Timestamp" => timestamp: Timestamp,
    }
}

shape! {
    pub struct DebugRuleEvaluationStatus {
        "RuleConfigurationName" => rule_configuration_name: String,
        "RuleEvaluationJobArn" => rule_evaluation_job_arn: String,
        "RuleEvaluationStatus" => rule_evaluation_status: String,
        "StatusDetails" => status_details: String,
        "LastModifiedTime" => last_modified_time: Timestamp,
    }
}

shape! {
    pub struct CreateTrainingJobRequest {
        "TrainingJobName" => training_job_name: String,
        "HyperParameters" => hyper_parameters: BTreeMap<String, String>,
        "AlgorithmSpecification" => algorithm_specification: AlgorithmSpecification,
        "RoleArn" => role_arn: String,
        "InputDataConfig" => input_data_config: Vec<Channel>,
        "OutputDataConfig" => output_data_config: OutputDataConfig,
        "ResourceConfig" => resource_config: ResourceConfig,
        "VpcConfig" => vpc_config: VpcConfig,
        "StoppingCondition" => stopping_condition: StoppingCondition,
        "Tags" => tags: Vec<Tag>,
        "EnableNetworkIsolation" => enable_network_isolation: bool,
        "EnableInterContainerTrafficEncryption" => enable_inter_container_traffic_encryption: bool,
        "EnableManagedSpotTraining" => enable_managed_spot_training: bool,
        "CheckpointConfig" => checkpoint_config: CheckpointConfig,
        "DebugHookConfig" => debug_hook_config: DebugHookConfig,
        "DebugRuleConfigurations" => debug_rule_configurations: Vec<DebugRuleConfiguration>,
        "TensorBoardOutputConfig" => tensor_board_output_config: TensorBoardOutputConfig,
        "ExperimentConfig" => experiment_config: ExperimentConfig,
    }
}

shape! {
    pub struct CreateTrainingJobResult {
        "TrainingJobArn" => training_job_arn: String,
    }
}

shape! {
    pub struct DescribeTrainingJobRequest {
        "TrainingJobName" => training_job_name: String,
    }
}

shape! {
    pub struct DescribeTrainingJobResult {
        "TrainingJobName" => training_job_name: String,
        "TrainingJobArn" => training_job_arn: String,
        "TuningJobArn" => tuning_job_arn: String,
        "LabelingJobArn" => labeling_job_arn: String,
        "AutoMLJobArn" => auto_ml_job_arn: String,
        "ModelArtifacts" => model_artifacts: ModelArtifacts,
        "TrainingJobStatus" => training_job_status: String,
        "SecondaryStatus" => secondary_status: String,
        "FailureReason" => failure_reason: String,
        "HyperParameters" => hyper_parameters: BTreeMap<String, String>,
        "AlgorithmSpecification" => algorithm_specification: AlgorithmSpecification,
        "RoleArn" => role_arn: String,
        "InputDataConfig" => input_data_config: Vec<Channel>,
        "OutputDataConfig" => output_data_config: OutputDataConfig,
        "ResourceConfig" => resource_config: ResourceConfig,
        "VpcConfig" => vpc_config: VpcConfig,
        "StoppingCondition" => stopping_condition: StoppingCondition,
        "CreationTime" => creation_time: Timestamp,
        "TrainingStartTime" => training_start_time: Timestamp,
        "TrainingEndTime" => training_end_time: Timestamp,
        "LastModifiedTime" => last_modified_time: Timestamp,
        "SecondaryStatusTransitions" => secondary_status_transitions: Vec<SecondaryStatusTransition>,
        "FinalMetricDataList" => final_metric_data_list: Vec<MetricData>,
        "EnableNetworkIsolation" => enable_network_isolation: bool,
        "EnableInterContainerTrafficEncryption" => enable_inter_container_traffic_encryption: bool,
        "EnableManagedSpotTraining" => enable_managed_spot_training: bool,
        "CheckpointConfig" => checkpoint_config: CheckpointConfig,
        "TrainingTimeInSeconds" => training_time_in_seconds: i32,
        "BillableTimeInSeconds" => billable_time_in_seconds: i32,
        "DebugHookConfig" => debug_hook_config: DebugHookConfig,
        "ExperimentConfig" => experiment_config: ExperimentConfig,
        "DebugRuleConfigurations" => debug_rule_configurations: Vec<DebugRuleConfiguration>,
        "TensorBoardOutputConfig" => tensor_board_output_config: TensorBoardOutputConfig,
        "DebugRuleEvaluationStatuses" => debug_rule_evaluation_statuses: Vec<DebugRuleEvaluationStatus>,
    }
}

shape! {
    pub struct StopTrainingJobRequest {
        "TrainingJobName" => training_job_name: String,
    }
}

shape! {
    pub struct ListTrainingJobsRequest {
        "NextToken" => next_token: String,
        "MaxResults" => max_results: i32,
        "CreationTimeAfter" => creation_time_after: Timestamp,
        "CreationTimeBefore" => creation_time_before: Timestamp,
        "LastModifiedTimeAfter" => last_modified_time_after: Timestamp,
        "LastModifiedTimeBefore" => last_modified_time_before: Timestamp,
        "NameContains" => name_contains: String,
        "StatusEquals" => status_equals: String,
        "SortBy" => sort_by: String,
        "SortOrder" => sort_order: String,
    }
}

shape! {
    pub struct TrainingJobSummary {
        "TrainingJobName" => training_job_name: String,
        "TrainingJobArn" => training_job_arn: String,
        "CreationTime" => creation_time: Timestamp,
        "TrainingEndTime" => training_end_time: Timestamp,
        "LastModifiedTime" => last_modified_time: Timestamp,
        "TrainingJobStatus" => training_job_status: String,
    }
}

shape! {
    pub struct ListTrainingJobsResult {
        "TrainingJobSummaries" => training_job_summaries: Vec<TrainingJobSummary>,
        "NextToken" => next_token: String,
    }
}
