//! Purpose: Assemble the awsJson1_1 HTTP envelope for one operation call.
//! Exports: `HttpRequest`, `RequestMarshaller`.
//! Role: Single-shot, stateless transform from a request record to method/path/headers/body.
//! Invariants: An absent request is rejected before any envelope exists.
//! Invariants: Content-Length always equals the body's byte length.
//! Invariants: X-Amz-Target and Content-Length are always generated; caller copies are dropped.
//! Invariants: Content-Type is only defaulted when the caller has not supplied one.

use super::error::{ApiResult, Error, ErrorKind};
use super::format::{
    CONTENT_TYPE, HEADER_CONTENT_LENGTH, HEADER_CONTENT_TYPE, HEADER_TARGET, METHOD, ROOT_PATH,
    TARGET_PREFIX, target_header_value,
};
use super::marshal::to_vec;
use bytes::Bytes;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    operation: String,
    method: &'static str,
    path: &'static str,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl HttpRequest {
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn method(&self) -> &str {
        self.method
    }

    pub fn path(&self) -> &str {
        self.path
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Case-insensitive header lookup; returns the first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// Stateless request builder; `RequestMarshaller::SAGEMAKER` is the shared default.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestMarshaller {
    target_prefix: Cow<'static, str>,
    headers: Vec<(String, String)>,
}

impl RequestMarshaller {
    pub const SAGEMAKER: RequestMarshaller = RequestMarshaller {
        target_prefix: Cow::Borrowed(TARGET_PREFIX),
        headers: Vec::new(),
    };

    pub fn new() -> Self {
        Self::SAGEMAKER
    }

    pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = Cow::Owned(prefix.into());
        self
    }

    /// Adds a header placed ahead of the generated ones on every envelope.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn target_prefix(&self) -> &str {
        &self.target_prefix
    }

    pub fn marshall<T>(&self, operation: &str, request: Option<&T>) -> ApiResult<HttpRequest>
    where
        T: Serialize + ?Sized,
    {
        let Some(request) = request else {
            return Err(Error::new(ErrorKind::InvalidArgument)
                .with_message("invalid argument passed to marshall(...)")
                .with_operation(operation));
        };

        let body = to_vec(request).map_err(|err| {
            Error::new(ErrorKind::Marshal)
                .with_message(format!("unable to marshall request to json: {err}"))
                .with_operation(operation)
                .with_source(err)
        })?;

        let mut headers: Vec<(String, String)> = self
            .headers
            .iter()
            .filter(|(name, _)| {
                !name.eq_ignore_ascii_case(HEADER_TARGET)
                    && !name.eq_ignore_ascii_case(HEADER_CONTENT_LENGTH)
            })
            .cloned()
            .collect();
        headers.push((
            HEADER_TARGET.to_string(),
            target_header_value(&self.target_prefix, operation),
        ));
        headers.push((HEADER_CONTENT_LENGTH.to_string(), body.len().to_string()));
        if find_header(&headers, HEADER_CONTENT_TYPE).is_none() {
            headers.push((HEADER_CONTENT_TYPE.to_string(), CONTENT_TYPE.to_string()));
        }

        tracing::trace!(operation, bytes = body.len(), "marshalled request");
        Ok(HttpRequest {
            operation: operation.to_string(),
            method: METHOD,
            path: ROOT_PATH,
            headers,
            body: Bytes::from(body),
        })
    }
}

impl Default for RequestMarshaller {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::RequestMarshaller;
    use crate::core::error::ErrorKind;
    use serde::ser::{Error as _, Serialize, Serializer};
    use serde_json::json;

    struct Unwritable;

    impl Serialize for Unwritable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("sink rejected value"))
        }
    }

    #[test]
    fn envelope_has_fixed_method_path_and_target() {
        let body = json!({"ModelName": "m1"});
        let request = RequestMarshaller::SAGEMAKER
            .marshall("DescribeModel", Some(&body))
            .expect("marshal");
        assert_eq!(request.method(), "POST");
        assert_eq!(request.path(), "/");
        assert_eq!(request.header("x-amz-target"), Some("SageMaker.DescribeModel"));
        assert_eq!(
            request.header("Content-Type"),
            Some("application/x-amz-json-1.1")
        );
        assert_eq!(
            request.header("Content-Length"),
            Some(request.body().len().to_string().as_str())
        );
    }

    #[test]
    fn content_length_counts_utf8_bytes() {
        let body = json!({"Description": "caf\u{e9}"});
        let request = RequestMarshaller::SAGEMAKER
            .marshall("CreateExperiment", Some(&body))
            .expect("marshal");
        assert_eq!(request.body().as_ref(), "{\"Description\":\"caf\u{e9}\"}".as_bytes());
        assert_eq!(request.header("Content-Length"), Some("23"));
    }

    #[test]
    fn caller_content_type_is_kept() {
        let marshaller = RequestMarshaller::new().with_header("content-type", "application/json");
        let request = marshaller
            .marshall("ListModels", Some(&json!({})))
            .expect("marshal");
        let content_types: Vec<_> = request
            .headers()
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn caller_cannot_override_generated_headers() {
        let request = RequestMarshaller::new()
            .with_header("content-length", "999")
            .with_header("X-AMZ-TARGET", "Other.Op")
            .with_header("X-Trace", "abc")
            .marshall("ListModels", Some(&json!({})))
            .expect("marshal");
        let count = |wanted: &str| {
            request
                .headers()
                .iter()
                .filter(|(name, _)| name.eq_ignore_ascii_case(wanted))
                .count()
        };
        assert_eq!(count("Content-Length"), 1);
        assert_eq!(count("X-Amz-Target"), 1);
        assert_eq!(request.header("Content-Length"), Some("2"));
        assert_eq!(request.header("X-Amz-Target"), Some("SageMaker.ListModels"));
        assert_eq!(request.header("X-Trace"), Some("abc"));
    }

    #[test]
    fn target_prefix_override() {
        let request = RequestMarshaller::new()
            .with_target_prefix("SageMakerStaging")
            .marshall("ListModels", Some(&json!({})))
            .expect("marshal");
        assert_eq!(request.header("X-Amz-Target"), Some("SageMakerStaging.ListModels"));
    }

    #[test]
    fn absent_request_is_invalid_argument() {
        let err = RequestMarshaller::SAGEMAKER
            .marshall::<serde_json::Value>("CreateModel", None)
            .expect_err("absent");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.operation(), Some("CreateModel"));
    }

    #[test]
    fn serializer_failure_is_wrapped() {
        let err = RequestMarshaller::SAGEMAKER
            .marshall("CreateModel", Some(&Unwritable))
            .expect_err("marshal failure");
        assert_eq!(err.kind(), ErrorKind::Marshal);
        assert!(
            err.message()
                .unwrap_or_default()
                .starts_with("unable to marshall request to json")
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
