#![forbid(unsafe_code)]

pub mod certification;
pub mod common;
pub mod dashboard;
pub mod form;
pub mod nav;
pub mod notice;
pub mod profile;
pub mod rollon;
pub mod route;
pub mod session;
pub mod training;

pub use common::{
    ContractViolation, MonotonicTimeNs, RecordId, RecordStatus, SchemaVersion, Validate,
};
