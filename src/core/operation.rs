//! Purpose: Bind operation names to their request/response records.
//! Exports: `Operation`, `OperationDescriptor`, `unmarshall_response`, `marshall_json`,
//! `unmarshall_json`, and the crate-internal `operations!` macro.
//! Role: Typed and by-name entry points for request assembly and response decoding.
//! Invariants: Operations are zero-sized; descriptors hold only `'static` data.
//! Invariants: An empty response body decodes to the output's default (no fields set).

use super::error::{ApiResult, Error, ErrorKind};
use super::request::{HttpRequest, RequestMarshaller};
use super::unmarshal::Unmarshall;
use crate::json::parse::{self, hint_for_error};
use serde::Serialize;
use serde_json::Value;

pub trait Operation {
    const NAME: &'static str;
    type Input: Serialize + Unmarshall;
    type Output: Serialize + Unmarshall + Default;

    fn marshall(request: &Self::Input) -> ApiResult<HttpRequest> {
        RequestMarshaller::SAGEMAKER.marshall(Self::NAME, Some(request))
    }
}

/// Registry entry for looking an operation up by name at runtime.
#[derive(Clone, Copy)]
pub struct OperationDescriptor {
    pub(crate) name: &'static str,
    pub(crate) marshall_json: fn(&RequestMarshaller, &[u8]) -> ApiResult<HttpRequest>,
    pub(crate) unmarshall_json: fn(&[u8]) -> ApiResult<Value>,
}

impl OperationDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads request JSON into the operation's input record, then assembles the envelope.
    /// Unknown request fields are dropped; `null` or a non-object is an absent request.
    pub fn marshall_json(
        &self,
        marshaller: &RequestMarshaller,
        input: &[u8],
    ) -> ApiResult<HttpRequest> {
        (self.marshall_json)(marshaller, input)
    }

    /// Decodes a response body through the output record and re-encodes the known fields.
    pub fn unmarshall_json(&self, body: &[u8]) -> ApiResult<Value> {
        (self.unmarshall_json)(body)
    }
}

impl std::fmt::Debug for OperationDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationDescriptor")
            .field("name", &self.name)
            .finish()
    }
}

pub fn unmarshall_response<O: Operation>(body: &[u8]) -> ApiResult<O::Output> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(O::Output::default());
    }
    match parse::from_slice::<O::Output>(body) {
        Ok(Some(output)) => Ok(output),
        Ok(None) => Err(Error::new(ErrorKind::Unmarshal)
            .with_message("response body is not a json object")
            .with_operation(O::NAME)),
        Err(err) => Err(Error::new(ErrorKind::Unmarshal)
            .with_message("unable to unmarshall response json")
            .with_hint(hint_for_error(&err, O::NAME))
            .with_operation(O::NAME)
            .with_source(err)),
    }
}

pub fn marshall_json<O: Operation>(
    marshaller: &RequestMarshaller,
    input: &[u8],
) -> ApiResult<HttpRequest> {
    let request = parse::from_slice::<O::Input>(input).map_err(|err| {
        Error::new(ErrorKind::InvalidArgument)
            .with_message("invalid request json")
            .with_hint(hint_for_error(&err, O::NAME))
            .with_operation(O::NAME)
            .with_source(err)
    })?;
    marshaller.marshall(O::NAME, request.as_ref())
}

pub fn unmarshall_json<O: Operation>(body: &[u8]) -> ApiResult<Value> {
    let output = unmarshall_response::<O>(body)?;
    serde_json::to_value(&output).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode normalized response")
            .with_operation(O::NAME)
            .with_source(err)
    })
}

/// Declares operations: `Name => fn method(Input) -> Output;`. Generates the unit
/// operation types, the `OPERATIONS` registry and the typed client methods.
macro_rules! operations {
    (
        $(
            $(#[$meta:meta])*
            $op:ident => fn $method:ident($input:ty) -> $output:ty;
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
            pub struct $op;

            impl $crate::core::operation::Operation for $op {
                const NAME: &'static str = stringify!($op);
                type Input = $input;
                type Output = $output;
            }
        )+

        pub static OPERATIONS: &[$crate::core::operation::OperationDescriptor] = &[
            $(
                $crate::core::operation::OperationDescriptor {
                    name: stringify!($op),
                    marshall_json: $crate::core::operation::marshall_json::<$op>,
                    unmarshall_json: $crate::core::operation::unmarshall_json::<$op>,
                },
            )+
        ];

        impl<T: $crate::api::Transport> $crate::api::SageMakerClient<T> {
            $(
                #[doc = concat!("Calls `", stringify!($op), "`.")]
                pub fn $method(
                    &self,
                    request: &$input,
                ) -> $crate::core::error::ApiResult<$output> {
                    self.invoke::<$op>(request)
                }
            )+
        }
    };
}

pub(crate) use operations;
