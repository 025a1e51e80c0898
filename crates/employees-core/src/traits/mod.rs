//! Core traits defined in `employees-core` and implemented by other crates.

pub mod upstream;

pub use http::{Method, StatusCode};
pub use upstream::{UpstreamExecutor, UpstreamRequest, UpstreamResponse};
