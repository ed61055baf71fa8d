//! Purpose: Exercise `UreqTransport` and the client against a loopback HTTP stub.
//! Exports: Integration tests only.
//! Role: Cover the real HTTP path (headers on the wire, status handling, timeouts).
//! Invariants: Each stub serves exactly one connection and reports what it received.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use sagemaker_json::api::{
    ClientConfig, ErrorKind, SageMakerClient, ServiceErrorCode, find_operation,
};
use sagemaker_json::model::inference::DescribeModelRequest;
use serde_json::json;

struct Received {
    request_line: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Received {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn serve_once(
    status_line: &'static str,
    extra_headers: &'static [(&'static str, &'static str)],
    body: &'static str,
) -> (String, mpsc::Receiver<Received>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let endpoint = format!("http://{}", listener.local_addr().expect("addr"));
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone"));
        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("request line");
        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("header line");
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                headers.push((name.trim().to_string(), value.trim().to_string()));
            }
        }
        let length = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);
        let mut request_body = vec![0u8; length];
        reader.read_exact(&mut request_body).expect("body");

        let mut response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/x-amz-json-1.1\r\nContent-Length: {}\r\nConnection: close\r\n",
            body.len()
        );
        for (name, value) in extra_headers {
            response.push_str(&format!("{name}: {value}\r\n"));
        }
        response.push_str("\r\n");
        response.push_str(body);
        let mut stream = stream;
        stream.write_all(response.as_bytes()).expect("write");
        stream.flush().expect("flush");

        let _ = tx.send(Received {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: request_body,
        });
    });
    (endpoint, rx)
}

fn client_for(endpoint: &str) -> SageMakerClient {
    let config = ClientConfig::new()
        .with_endpoint(endpoint)
        .expect("endpoint")
        .with_timeout(Duration::from_secs(5));
    SageMakerClient::new(&config).expect("client")
}

#[test]
fn typed_call_over_http() {
    let (endpoint, rx) = serve_once(
        "200 OK",
        &[],
        r#"{"ModelName":"m1","ModelArn":"arn:model/m1","CreationTime":1580000000,"Unknown":{}}"#,
    );
    let request = DescribeModelRequest {
        model_name: Some("m1".to_string()),
    };
    let result = client_for(&endpoint)
        .describe_model(&request)
        .expect("describe");
    assert_eq!(result.model_arn.as_deref(), Some("arn:model/m1"));
    assert_eq!(
        result.creation_time.map(|at| at.unix_millis()),
        Some(1_580_000_000_000)
    );

    let received = rx.recv_timeout(Duration::from_secs(5)).expect("received");
    assert_eq!(received.request_line, "POST / HTTP/1.1");
    assert_eq!(received.header("X-Amz-Target"), Some("SageMaker.DescribeModel"));
    assert_eq!(
        received.header("Content-Type"),
        Some("application/x-amz-json-1.1")
    );
    assert_eq!(received.header("Content-Length"), Some("18"));
    assert_eq!(received.body, br#"{"ModelName":"m1"}"#);
}

#[test]
fn service_error_over_http() {
    let (endpoint, rx) = serve_once(
        "400 Bad Request",
        &[("x-amzn-RequestId", "req-42")],
        r#"{"__type":"com.amazonaws.sagemaker#ResourceNotFound","Message":"Could not find model"}"#,
    );
    let err = client_for(&endpoint)
        .describe_model(&DescribeModelRequest::default())
        .expect_err("not found");
    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.request_id(), Some("req-42"));
    assert_eq!(err.message(), Some("Could not find model"));
    assert_eq!(
        ServiceErrorCode::of(&err),
        Some(ServiceErrorCode::ResourceNotFound)
    );
    let received = rx.recv_timeout(Duration::from_secs(5)).expect("received");
    assert_eq!(received.body, b"{}");
}

#[test]
fn descriptor_call_over_http() {
    let (endpoint, _rx) = serve_once(
        "200 OK",
        &[],
        r#"{"Tags":[{"Key":"env","Value":"prod"}],"NextToken":"t2"}"#,
    );
    let operation = find_operation("ListTags").expect("registered");
    let value = client_for(&endpoint)
        .invoke_descriptor(operation, br#"{"ResourceArn":"arn:x"}"#)
        .expect("list tags");
    assert_eq!(
        value,
        json!({"Tags": [{"Key": "env", "Value": "prod"}], "NextToken": "t2"})
    );
}

#[test]
fn unreachable_endpoint_is_io_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let endpoint = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);
    let err = client_for(&endpoint)
        .describe_model(&DescribeModelRequest::default())
        .expect_err("connection refused");
    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(err.operation(), Some("DescribeModel"));
}
