//! # employees-api
//!
//! HTTP API layer for the employee proxy built on Axum.
//!
//! Provides the employee REST endpoints, the health probe, middleware (CORS,
//! request logging, timeouts), path extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
