// Core modules implementing the record codec, request assembly, and error modeling.
pub mod error;
pub mod format;
pub mod marshal;
pub mod operation;
pub mod request;
pub(crate) mod shape;
pub mod timestamp;
pub mod unmarshal;
