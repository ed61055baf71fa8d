//! Purpose: Decode non-2xx service responses into `Error` values.
//! Exports: `ServiceErrorCode`, `decode_service_error`, `normalize_error_code`.
//! Role: Maps the awsJson1_1 error envelope onto `ErrorKind::Service`.
//! Invariants: The `x-amzn-ErrorType` header wins over body fields when both carry a code.
//! Invariants: Decoding never fails; an unreadable body falls back to a status-derived code.

use super::transport::HttpResponse;
use crate::core::error::{Error, ErrorKind};
use crate::core::format::{HEADER_ERROR_TYPE, HEADER_REQUEST_ID};
use serde::Deserialize;

/// SageMaker error codes callers commonly branch on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ServiceErrorCode {
    ResourceInUse,
    ResourceLimitExceeded,
    ResourceNotFound,
    Conflict,
    Other(String),
}

impl ServiceErrorCode {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ResourceInUse" => Self::ResourceInUse,
            "ResourceLimitExceeded" => Self::ResourceLimitExceeded,
            "ResourceNotFound" => Self::ResourceNotFound,
            "ConflictException" => Self::Conflict,
            other => Self::Other(other.to_string()),
        }
    }

    /// Reads the code off a `Service` error; other kinds have none.
    pub fn of(err: &Error) -> Option<Self> {
        if err.kind() != ErrorKind::Service {
            return None;
        }
        err.code().map(Self::from_code)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ResourceInUse => "ResourceInUse",
            Self::ResourceLimitExceeded => "ResourceLimitExceeded",
            Self::ResourceNotFound => "ResourceNotFound",
            Self::Conflict => "ConflictException",
            Self::Other(code) => code,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// `"com.amazonaws.sagemaker#ResourceNotFound:http://..."` becomes `"ResourceNotFound"`.
pub fn normalize_error_code(raw: &str) -> &str {
    let tail = raw.rsplit_once('#').map_or(raw, |(_, tail)| tail);
    let head = tail.split_once(':').map_or(tail, |(head, _)| head);
    head.trim()
}

pub fn decode_service_error(operation: &str, response: &HttpResponse) -> Error {
    let status = response.status();
    let envelope = serde_json::from_slice::<ErrorEnvelope>(response.body()).unwrap_or_default();

    let code = response
        .header(HEADER_ERROR_TYPE)
        .or(envelope.error_type.as_deref())
        .or(envelope.code.as_deref())
        .map(normalize_error_code)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HttpStatus{status}"));
    let message = envelope
        .message
        .unwrap_or_else(|| format!("service returned status {status}"));

    let mut err = Error::new(ErrorKind::Service)
        .with_message(message)
        .with_operation(operation)
        .with_status(status)
        .with_code(code);
    if let Some(request_id) = response.header(HEADER_REQUEST_ID) {
        err = err.with_request_id(request_id);
    }
    err
}

#[cfg(test)]
mod tests {
    use super::{ServiceErrorCode, decode_service_error, normalize_error_code};
    use crate::api::HttpResponse;
    use crate::core::error::{Error, ErrorKind};

    #[test]
    fn normalize_strips_namespace_and_suffix() {
        assert_eq!(
            normalize_error_code("com.amazonaws.sagemaker#ResourceNotFound:http://internal"),
            "ResourceNotFound"
        );
        assert_eq!(normalize_error_code("ValidationException"), "ValidationException");
        assert_eq!(normalize_error_code("a#b#ResourceInUse"), "ResourceInUse");
    }

    #[test]
    fn body_type_and_message() {
        let response = HttpResponse::new(
            400,
            vec![("x-amzn-RequestId".to_string(), "abc-123".to_string())],
            r#"{"__type":"com.amazonaws.sagemaker#ResourceNotFound","Message":"no such model"}"#,
        );
        let err = decode_service_error("DescribeModel", &response);
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.code(), Some("ResourceNotFound"));
        assert_eq!(err.message(), Some("no such model"));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.request_id(), Some("abc-123"));
        assert_eq!(err.operation(), Some("DescribeModel"));
        assert_eq!(ServiceErrorCode::of(&err), Some(ServiceErrorCode::ResourceNotFound));
    }

    #[test]
    fn header_code_wins_over_body() {
        let response = HttpResponse::new(
            400,
            vec![("X-Amzn-ErrorType".to_string(), "ResourceInUse:http://x".to_string())],
            r#"{"__type":"ValidationException","message":"busy"}"#,
        );
        let err = decode_service_error("DeleteModel", &response);
        assert_eq!(err.code(), Some("ResourceInUse"));
        assert_eq!(err.message(), Some("busy"));
    }

    #[test]
    fn lowercase_code_field_is_used() {
        let response = HttpResponse::new(409, Vec::new(), r#"{"code":"ConflictException"}"#);
        let err = decode_service_error("CreateModel", &response);
        assert_eq!(ServiceErrorCode::of(&err), Some(ServiceErrorCode::Conflict));
    }

    #[test]
    fn non_envelope_body_uses_status() {
        let response = HttpResponse::new(503, Vec::new(), "<html>unavailable</html>");
        let err = decode_service_error("ListModels", &response);
        assert_eq!(err.code(), Some("HttpStatus503"));
        assert_eq!(err.message(), Some("service returned status 503"));
        assert_eq!(
            ServiceErrorCode::of(&err),
            Some(ServiceErrorCode::Other("HttpStatus503".to_string()))
        );
    }

    #[test]
    fn code_is_only_read_from_service_errors() {
        let err = Error::new(ErrorKind::Io).with_code("ResourceInUse");
        assert_eq!(ServiceErrorCode::of(&err), None);
    }
}
