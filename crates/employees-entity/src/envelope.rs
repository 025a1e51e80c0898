//! Upstream response envelopes.
//!
//! Every upstream endpoint answers `{status, message, data}`. These types
//! exist only to unwrap that shape; callers keep the payload and drop the
//! envelope.

use serde::{Deserialize, Serialize};

use crate::employee::Employee;

/// Generic `{status, message, data}` wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// `"success"` or `"error"`.
    pub status: Option<String>,
    /// Human-readable outcome.
    pub message: Option<String>,
    /// Payload; absent or `null` when the upstream had nothing to return.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Whether the upstream reported a failure in the envelope itself.
    pub fn is_error(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("error"))
    }
}

/// Envelope around the full employee list.
pub type EmployeeListResponse = Envelope<Vec<Employee>>;

/// Envelope around a single employee.
pub type EmployeeResponse = Envelope<Employee>;

/// Envelope whose payload is not interpreted.
pub type ApiResponse = Envelope<serde_json::Value>;
