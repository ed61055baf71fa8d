//! Purpose: SageMaker control-plane request and result records.
//! Exports: One submodule per API area; the common records are re-exported at this level.
//! Role: Schema declarations only; all codec behavior comes from `shape!`/`union_shape!`.
//! Invariants: Field declaration order is marshalling order.
//! Notes: Unions (`MemberDefinition`, `TrialComponentParameterValue`) are enums, never flat records.

pub mod algorithm;
pub mod common;
pub mod endpoint;
pub mod experiment;
pub mod inference;
pub mod notebook;
pub mod training;
pub mod transform;
pub mod tuning;
pub mod workteam;

pub use common::{EmptyResult, ExperimentConfig, Tag, VpcConfig};
