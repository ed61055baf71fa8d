//! Purpose: Batch transform job records.
//! Exports: transform input/output/resource shapes and `CreateTransformJob` request/result.

use super::common::{ExperimentConfig, Tag};
use crate::core::shape::shape;
use std::collections::BTreeMap;

shape! {
    pub struct TransformS3DataSource {
        "S3DataType" => s3_data_type: String,
        "S3Uri" => s3_uri: String,
    }
}

shape! {
    pub struct TransformDataSource {
        "S3DataSource" => s3_data_source: TransformS3DataSource,
    }
}

shape! {
    pub struct TransformInput {
        "DataSource" => data_source: TransformDataSource,
        "ContentType" => content_type: String,
        "CompressionType" => compression_type: String,
        "SplitType" => split_type: String,
    }
}

shape! {
    pub struct TransformOutput {
        "S3OutputPath" => s3_output_path: String,
        "Accept" => accept: String,
        "AssembleWith" => assemble_with: String,
        "KmsKeyId" => kms_key_id: String,
    }
}

shape! {
    pub struct TransformResources {
        "InstanceType" => instance_type: String,
        "InstanceCount" => instance_count: i32,
        "VolumeKmsKeyId" => volume_kms_key_id: String,
    }
}

shape! {
    /// JSONPath filters applied before and after inference.
    pub struct DataProcessing {
        "InputFilter" => input_filter: String,
        "OutputFilter" => output_filter: String,
        "JoinSource" => join_source: String,
    }
}

shape! {
    pub struct CreateTransformJobRequest {
        "TransformJobName" => transform_job_name: String,
        "ModelName" => model_name: String,
        "MaxConcurrentTransforms" => max_concurrent_transforms: i32,
        "MaxPayloadInMB" => max_payload_in_mb: i32,
        "BatchStrategy" => batch_strategy: String,
        "Environment" => environment: BTreeMap<String, String>,
        "TransformInput" => transform_input: TransformInput,
        "TransformOutput" => transform_output: TransformOutput,
        "TransformResources" => transform_resources: TransformResources,
        "DataProcessing" => data_processing: DataProcessing,
        "Tags" => tags: Vec<Tag>,
        "ExperimentConfig" => experiment_config: ExperimentConfig,
    }
}

shape! {
    pub struct CreateTransformJobResult {
        "TransformJobArn" => transform_job_arn: String,
    }
}
