//! Purpose: Centralize the awsJson1_1 wire constants.
//! Exports: target prefix, content type, header names and the envelope method/path.
//! Role: Shared policy for request assembly, transports and error decoding.
//! Invariants: Values match the service's JSON 1.1 protocol and never vary per call.

pub const TARGET_PREFIX: &str = "SageMaker";
pub const JSON_VERSION: &str = "1.1";
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

pub const METHOD: &str = "POST";
pub const ROOT_PATH: &str = "/";

pub const HEADER_TARGET: &str = "X-Amz-Target";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_CONTENT_LENGTH: &str = "Content-Length";
pub const HEADER_ERROR_TYPE: &str = "x-amzn-ErrorType";
pub const HEADER_REQUEST_ID: &str = "x-amzn-RequestId";

pub fn target_header_value(prefix: &str, operation: &str) -> String {
    format!("{prefix}.{operation}")
}

#[cfg(test)]
mod tests {
    use super::{CONTENT_TYPE, JSON_VERSION, TARGET_PREFIX, target_header_value};

    #[test]
    fn target_joins_prefix_and_operation() {
        assert_eq!(
            target_header_value(TARGET_PREFIX, "CreateModel"),
            "SageMaker.CreateModel"
        );
    }

    #[test]
    fn content_type_carries_protocol_version() {
        assert!(CONTENT_TYPE.ends_with(JSON_VERSION));
    }
}
