//! # employees-service
//!
//! Business logic for the employee proxy. Services fetch from the upstream
//! API through an injected [`UpstreamExecutor`], unwrap the response
//! envelope, and filter or aggregate the result in memory.
//!
//! Services follow constructor injection: the executor and endpoint
//! builder are provided at construction time.
//!
//! [`UpstreamExecutor`]: employees_core::traits::UpstreamExecutor

pub mod employee;
#[cfg(test)]
pub(crate) mod test_support;

pub use employee::{EmployeeMutationService, EmployeeQueryService};
