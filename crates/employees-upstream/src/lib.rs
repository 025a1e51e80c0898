//! # employees-upstream
//!
//! Outbound side of the employee proxy: builds upstream URLs and executes
//! HTTP calls with a narrow retry policy (HTTP 429 only, fixed delay,
//! bounded attempts). Every other failure surfaces on first occurrence.

pub mod endpoints;
pub mod executor;
pub mod retry;

pub use endpoints::EmployeeEndpoints;
pub use executor::RestExecutor;
pub use retry::RetryPolicy;
