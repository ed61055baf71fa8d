//! Purpose: Move an assembled envelope over HTTP and hand back the raw response.
//! Exports: `Transport`, `HttpResponse`, `UreqTransport`.
//! Role: The only blocking I/O in the crate; everything above it is pure.
//! Invariants: Every HTTP status yields `Ok(HttpResponse)`; only transport failures are errors.
//! Invariants: Content-Length is not forwarded; the HTTP layer derives it from the body.

use crate::core::error::{ApiResult, Error, ErrorKind};
use crate::core::format::HEADER_CONTENT_LENGTH;
use crate::core::request::{HttpRequest, find_header};
use bytes::Bytes;
use std::io::Read;
use std::time::Duration;
use url::Url;

pub trait Transport {
    fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        (**self).send(request)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
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

/// Blocking transport backed by a shared `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    endpoint: Url,
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            endpoint,
            agent: builder.build(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        let mut url = self.endpoint.clone();
        url.set_path(request.path());

        let mut call = self.agent.request(request.method(), url.as_str());
        for (name, value) in request.headers() {
            if name.eq_ignore_ascii_case(HEADER_CONTENT_LENGTH) {
                continue;
            }
            call = call.set(name, value);
        }

        let response = match call.send_bytes(request.body()) {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(err)) => {
                return Err(Error::new(ErrorKind::Io)
                    .with_message("request failed")
                    .with_hint(format!("endpoint: {}", self.endpoint))
                    .with_operation(request.operation())
                    .with_source(err));
            }
        };
        read_response(request.operation(), response)
    }
}

fn read_response(operation: &str, response: ureq::Response) -> ApiResult<HttpResponse> {
    let status = response.status();
    let headers = response
        .headers_names()
        .into_iter()
        .filter_map(|name| {
            let value = response.header(&name)?.to_string();
            Some((name, value))
        })
        .collect();
    let mut body = Vec::new();
    response.into_reader().read_to_end(&mut body).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read response body")
            .with_operation(operation)
            .with_status(status)
            .with_source(err)
    })?;
    Ok(HttpResponse::new(status, headers, body))
}

#[cfg(test)]
mod tests {
    use super::HttpResponse;

    #[test]
    fn response_header_lookup_ignores_case() {
        let response = HttpResponse::new(
            400,
            vec![("X-Amzn-RequestId".to_string(), "req-1".to_string())],
            "{}",
        );
        assert_eq!(response.header("x-amzn-requestid"), Some("req-1"));
        assert!(!response.is_success());
        assert!(HttpResponse::new(204, Vec::new(), "").is_success());
    }
}
