//! # employees-core
//!
//! Core crate for the employee proxy. Contains the unified error system,
//! configuration schemas, and the [`traits::UpstreamExecutor`] seam that the
//! service layer calls to reach the upstream employee API.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
