//! Purpose: Define the public client surface for the SageMaker JSON protocol.
//! Exports: Errors, envelope types, the operation registry, client, transport and config.
//! Role: Stable boundary used by the CLI and tests; hides codec internals.
//! Invariants: Everything a caller needs to marshal, send or decode is reachable from here.

mod client;
mod config;
mod operations;
mod service_error;
mod transport;

pub use crate::core::error::{ApiResult, Error, ErrorKind};
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::operation::{Operation, OperationDescriptor};
pub use crate::core::request::{HttpRequest, RequestMarshaller};
pub use client::SageMakerClient;
pub use config::{ClientConfig, ENV_ENDPOINT, ENV_TARGET_PREFIX, ENV_TIMEOUT_MS, parse_timeout_ms};
pub use operations::*;
pub use service_error::{ServiceErrorCode, decode_service_error, normalize_error_code};
pub use transport::{HttpResponse, Transport, UreqTransport};
