//! Purpose: Algorithm resources and the container spec used to train with them.
//! Exports: `AlgorithmSpecification`, `MetricDefinition`, `AlgorithmSummary`, algorithm requests.

use crate::core::shape::shape;
use crate::core::timestamp::Timestamp;

shape! {
    /// Regex used to scrape a metric from training logs.
    pub struct MetricDefinition {
        "Name" => name: String,
        "Regex" => regex: String,
    }
}

shape! {
    /// Either `training_image` or `algorithm_name` identifies what runs.
    pub struct AlgorithmSpecification {
        "TrainingImage" => training_image: String,
        "AlgorithmName" => algorithm_name: String,
        "TrainingInputMode" => training_input_mode: String,
        "MetricDefinitions" => metric_definitions: Vec<MetricDefinition>,
        "EnableSageMakerMetricsTimeSeries" => enable_sage_maker_metrics_time_series: bool,
    }
}

shape! {
    pub struct AlgorithmSummary {
        "AlgorithmName" => algorithm_name: String,
        "AlgorithmArn" => algorithm_arn: String,
        "AlgorithmDescription" => algorithm_description: String,
        "CreationTime" => creation_time: Timestamp,
        "AlgorithmStatus" => algorithm_status: String,
    }
}

shape! {
    pub struct ListAlgorithmsRequest {
        "CreationTimeAfter" => creation_time_after: Timestamp,
        "CreationTimeBefore" => creation_time_before: Timestamp,
        "MaxResults" => max_results: i32,
        "NameContains" => name_contains: String,
        "NextToken" => next_token: String,
        "SortBy" => sort_by: String,
        "SortOrder" => sort_order: String,
    }
}

shape! {
    pub struct ListAlgorithmsResult {
        "AlgorithmSummaryList" => algorithm_summary_list: Vec<AlgorithmSummary>,
        "NextToken" => next_token: String,
    }
}

shape! {
    pub struct DescribeAlgorithmRequest {
        "AlgorithmName" => algorithm_name: String,
    }
}

shape! {
    pub struct DescribeAlgorithmResult {
        "AlgorithmName" => algorithm_name: String,
        "AlgorithmArn" => algorithm_arn: String,
        "AlgorithmDescription" => algorithm_description: String,
        "CreationTime" => creation_time: Timestamp,
        "AlgorithmStatus" => algorithm_status: String,
        "ProductId" => product_id: String,
        "CertifyForMarketplace" => certify_for_marketplace: bool,
    }
}

shape! {
    pub struct DeleteAlgorithmRequest {
        "AlgorithmName" => algorithm_name: String,
    }
}
