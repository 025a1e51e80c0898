//! # employees-entity
//!
//! Domain value types for the employee proxy. Nothing here is persisted:
//! every value is deserialized from an upstream response, possibly
//! reshaped, and dropped at the end of the request.

pub mod employee;
pub mod envelope;

pub use employee::{CreateEmployeeInput, Employee};
pub use envelope::{ApiResponse, EmployeeListResponse, EmployeeResponse, Envelope};
