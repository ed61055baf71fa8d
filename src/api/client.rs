//! Purpose: Typed SageMaker client over a pluggable transport.
//! Exports: `SageMakerClient` (typed per-operation methods are generated in `operations`).
//! Role: Glue between request assembly, the transport and response decoding.
//! Invariants: A non-2xx response always surfaces as `ErrorKind::Service`.
//! Invariants: No retries; one call sends exactly one request.
#![allow(clippy::result_large_err)]

use super::config::ClientConfig;
use super::service_error::decode_service_error;
use super::transport::{HttpResponse, Transport, UreqTransport};
use crate::core::error::{ApiResult, Error, ErrorKind};
use crate::core::operation::{Operation, OperationDescriptor, unmarshall_response};
use crate::core::request::{HttpRequest, RequestMarshaller};
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct SageMakerClient<T = UreqTransport> {
    marshaller: RequestMarshaller,
    transport: T,
}

impl SageMakerClient<UreqTransport> {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let endpoint = config.endpoint().cloned().ok_or_else(|| {
            Error::new(ErrorKind::Usage)
                .with_message("no endpoint configured")
                .with_hint("pass --endpoint or set SAGEMAKER_ENDPOINT")
        })?;
        Ok(Self::with_transport(
            config.marshaller(),
            UreqTransport::new(endpoint, config.timeout()),
        ))
    }
}

impl<T: Transport> SageMakerClient<T> {
    pub fn with_transport(marshaller: RequestMarshaller, transport: T) -> Self {
        Self {
            marshaller,
            transport,
        }
    }

    pub fn marshaller(&self) -> &RequestMarshaller {
        &self.marshaller
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn invoke<O: Operation>(&self, request: &O::Input) -> ApiResult<O::Output> {
        let http = self.marshaller.marshall(O::NAME, Some(request))?;
        let response = self.send(&http)?;
        unmarshall_response::<O>(response.body())
    }

    /// By-name variant of `invoke`: JSON in, normalized JSON (known fields only) out.
    pub fn invoke_descriptor(
        &self,
        operation: &OperationDescriptor,
        input: &[u8],
    ) -> ApiResult<Value> {
        let http = operation.marshall_json(&self.marshaller, input)?;
        let response = self.send(&http)?;
        operation.unmarshall_json(response.body())
    }

    fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        tracing::debug!(
            operation = request.operation(),
            bytes = request.body().len(),
            "sending request"
        );
        let response = self.transport.send(request)?;
        tracing::debug!(
            operation = request.operation(),
            status = response.status(),
            bytes = response.body().len(),
            "received response"
        );
        if response.is_success() {
            return Ok(response);
        }
        let err = decode_service_error(request.operation(), &response);
        tracing::warn!(
            operation = request.operation(),
            status = response.status(),
            code = err.code().unwrap_or_default(),
            "service error"
        );
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::SageMakerClient;
    use crate::api::{ClientConfig, HttpResponse, ServiceErrorCode, Transport, find_operation};
    use crate::core::error::{ApiResult, ErrorKind};
    use crate::core::request::{HttpRequest, RequestMarshaller};
    use crate::model::inference::{CreateModelRequest, DescribeModelRequest};
    use crate::model::notebook::NotebookInstanceNameRequest;
    use serde_json::json;
    use std::cell::RefCell;

    struct StubTransport {
        status: u16,
        headers: Vec<(String, String)>,
        body: &'static str,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl StubTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                headers: Vec::new(),
                body,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for StubTransport {
        fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
            self.seen.borrow_mut().push(request.clone());
            Ok(HttpResponse::new(
                self.status,
                self.headers.clone(),
                self.body,
            ))
        }
    }

    fn client(transport: &StubTransport) -> SageMakerClient<&StubTransport> {
        SageMakerClient::with_transport(RequestMarshaller::SAGEMAKER, transport)
    }

    #[test]
    fn typed_call_sends_envelope_and_decodes_result() {
        let transport = StubTransport::new(200, r#"{"ModelArn":"arn:model/m1","Extra":1}"#);
        let request = CreateModelRequest {
            model_name: Some("m1".to_string()),
            ..CreateModelRequest::default()
        };
        let result = client(&transport).create_model(&request).expect("create");
        assert_eq!(result.model_arn.as_deref(), Some("arn:model/m1"));

        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].header("X-Amz-Target"), Some("SageMaker.CreateModel"));
        assert_eq!(seen[0].body().as_ref(), br#"{"ModelName":"m1"}"#);
    }

    #[test]
    fn empty_body_decodes_to_default() {
        let transport = StubTransport::new(200, "");
        client(&transport)
            .delete_notebook_instance(&NotebookInstanceNameRequest::new("nb"))
            .expect("delete");
    }

    #[test]
    fn non_object_body_is_unmarshal_error() {
        let transport = StubTransport::new(200, r#""hello""#);
        let err = client(&transport)
            .describe_model(&DescribeModelRequest::default())
            .expect_err("scalar body");
        assert_eq!(err.kind(), ErrorKind::Unmarshal);
        assert_eq!(err.operation(), Some("DescribeModel"));
    }

    #[test]
    fn malformed_body_is_unmarshal_error_with_hint() {
        let transport = StubTransport::new(200, r#"{"ModelName": "#);
        let err = client(&transport)
            .describe_model(&DescribeModelRequest::default())
            .expect_err("truncated");
        assert_eq!(err.kind(), ErrorKind::Unmarshal);
        assert!(err.hint().unwrap_or_default().contains("parse category: eof"));
    }

    #[test]
    fn error_status_is_service_error() {
        let mut transport = StubTransport::new(
            400,
            r#"{"__type":"com.amazonaws.sagemaker#ResourceLimitExceeded","message":"too many"}"#,
        );
        transport
            .headers
            .push(("x-amzn-RequestId".to_string(), "rid".to_string()));
        let err = client(&transport)
            .create_model(&CreateModelRequest::default())
            .expect_err("limit");
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(
            ServiceErrorCode::of(&err),
            Some(ServiceErrorCode::ResourceLimitExceeded)
        );
        assert_eq!(err.request_id(), Some("rid"));
    }

    #[test]
    fn descriptor_invoke_returns_normalized_json() {
        let transport = StubTransport::new(
            200,
            r#"{"Tags":[{"Key":"team","Value":"ml","Color":"red"}],"NextToken":null}"#,
        );
        let operation = find_operation("ListTags").expect("registered");
        let value = client(&transport)
            .invoke_descriptor(operation, br#"{"ResourceArn":"arn:x","Bogus":true}"#)
            .expect("list tags");
        assert_eq!(value, json!({"Tags": [{"Key": "team", "Value": "ml"}]}));
        assert_eq!(
            transport.seen.borrow()[0].body().as_ref(),
            br#"{"ResourceArn":"arn:x"}"#
        );
    }

    #[test]
    fn descriptor_invoke_rejects_null_request() {
        let transport = StubTransport::new(200, "{}");
        let operation = find_operation("CreateModel").expect("registered");
        let err = client(&transport)
            .invoke_descriptor(operation, b"null")
            .expect_err("null request");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(transport.seen.borrow().is_empty());
    }

    #[test]
    fn new_requires_endpoint() {
        let err = SageMakerClient::new(&ClientConfig::new()).expect_err("no endpoint");
        assert_eq!(err.kind(), ErrorKind::Usage);
        let config = ClientConfig::new()
            .with_endpoint("http://127.0.0.1:1")
            .expect("endpoint");
        let client = SageMakerClient::new(&config).expect("client");
        assert_eq!(client.transport().endpoint().as_str(), "http://127.0.0.1:1/");
    }
}
