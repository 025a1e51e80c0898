//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use employees_core::config::AppConfig;
use employees_service::{EmployeeMutationService, EmployeeQueryService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// List, lookup, and aggregate queries
    pub query_service: Arc<EmployeeQueryService>,
    /// Create and delete
    pub mutation_service: Arc<EmployeeMutationService>,
}
