//! Purpose: Hosting records: endpoint configs, endpoints and their runtime status.
//! Exports: `ProductionVariant`, data-capture shapes, Create/Describe/Delete endpoint shapes.

use super::common::Tag;
use crate::core::shape::shape;
use crate::core::timestamp::Timestamp;

shape! {
    pub struct ProductionVariant {
        "VariantName" => variant_name: String,
        "ModelName" => model_name: String,
        "InitialInstanceCount" => initial_instance_count: i32,
        "InstanceType" => instance_type: String,
        "InitialVariantWeight" => initial_variant_weight: f64,
        "AcceleratorType" => accelerator_type: String,
    }
}

shape! {
    pub struct CaptureOption {
        "CaptureMode" => capture_mode: String,
    }
}

shape! {
    pub struct CaptureContentTypeHeader {
        "CsvContentTypes" => csv_content_types: Vec<String>,
        "JsonContentTypes" => json_content_types: Vec<String>,
    }
}

shape! {
    pub struct DataCaptureConfig {
        "EnableCapture" => enable_capture: bool,
        "InitialSamplingPercentage" => initial_sampling_percentage: i32,
        "DestinationS3Uri" => destination_s3_uri: String,
        "KmsKeyId" => kms_key_id: String,
        "CaptureOptions" => capture_options: Vec<CaptureOption>,
        "CaptureContentTypeHeader" => capture_content_type_header: CaptureContentTypeHeader,
    }
}

shape! {
    pub struct CreateEndpointConfigRequest {
        "EndpointConfigName" => endpoint_config_name: String,
        "ProductionVariants" => production_variants: Vec<ProductionVariant>,
        "DataCaptureConfig" => data_capture_config: DataCaptureConfig,
        "Tags" => tags: Vec<Tag>,
        "KmsKeyId" => kms_key_id: String,
    }
}

shape! {
    pub struct CreateEndpointConfigResult {
        "EndpointConfigArn" => endpoint_config_arn: String,
    }
}

shape! {
    pub struct CreateEndpointRequest {
        "EndpointName" => endpoint_name: String,
        "EndpointConfigName" => endpoint_config_name: String,
        "Tags" => tags: Vec<Tag>,
    }
}

shape! {
    pub struct CreateEndpointResult {
        "EndpointArn" => endpoint_arn: String,
    }
}

shape! {
    pub struct DescribeEndpointRequest {
        "EndpointName" => endpoint_name: String,
    }
}

shape! {
    pub struct DeployedImage {
        "SpecifiedImage" => specified_image: String,
        "ResolvedImage" => resolved_image: String,
        "ResolutionTime" => resolution_time: Timestamp,
    }
}

shape! {
    pub struct ProductionVariantSummary {
        "VariantName" => variant_name: String,
        "DeployedImages" => deployed_images: Vec<DeployedImage>,
        "CurrentWeight" => current_weight: f64,
        "DesiredWeight" => desired_weight: f64,
        "CurrentInstanceCount" => current_instance_count: i32,
        "DesiredInstanceCount" => desired_instance_count: i32,
    }
}

shape! {
    pub struct DataCaptureConfigSummary {
        "EnableCapture" => enable_capture: bool,
        "CaptureStatus" => capture_status: String,
        "CurrentSamplingPercentage" => current_sampling_percentage: i32,
        "DestinationS3Uri" => destination_s3_uri: String,
        "KmsKeyId" => kms_key_id: String,
    }
}

shape! {
    pub struct DescribeEndpointResult {
        "EndpointName" => endpoint_name: String,
        "EndpointArn" => endpoint_arn: String,
        "EndpointConfigName" => endpoint_config_name: String,
        "ProductionVariants" => production_variants: Vec<ProductionVariantSummary>,
        "DataCaptureConfig" => data_capture_config: DataCaptureConfigSummary,
        "EndpointStatus" => endpoint_status: String,
        "FailureReason" => failure_reason: String,
        "CreationTime" => creation_time: Timestamp,
        "LastModifiedTime" => last_modified_time: Timestamp,
    }
}

shape! {
    pub struct DeleteEndpointRequest {
        "EndpointName" => endpoint_name: String,
    }
}
