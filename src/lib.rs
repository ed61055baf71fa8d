//! Purpose: SageMaker JSON-RPC protocol library used by the `sagemaker-json` CLI and tests.
//! Exports: `api` (client surface), `core` (codec machinery), `json` (parser boundary), `model` (records).
//! Role: Schema-driven marshalling of request records and name-dispatch unmarshalling of responses.
//! Invariants: Marshalling and unmarshalling are pure; only `api::Transport` performs I/O.
//! Invariants: Unset fields are never written; unknown fields are never an error.
pub mod api;
pub mod core;
pub mod json;
pub mod model;
