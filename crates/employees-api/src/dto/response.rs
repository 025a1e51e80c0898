//! Response DTOs.
//!
//! Employee payloads are returned as the entity itself; only the health
//! probe has a dedicated shape.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Application version.
    pub version: String,
}
