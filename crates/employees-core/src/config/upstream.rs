//! Upstream employee API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the upstream API lives and how outbound calls behave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL all endpoint paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// `User-Agent` header sent with every outbound request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Endpoint paths relative to `base_url`.
    #[serde(default)]
    pub endpoints: EndpointConfig,
    /// Rate-limit retry policy.
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            endpoints: EndpointConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

impl UpstreamConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Endpoint path templates. `{id}` is substituted with the employee id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// List every employee.
    #[serde(default = "default_list_all")]
    pub list_all: String,
    /// Fetch one employee.
    #[serde(default = "default_get_by_id")]
    pub get_by_id: String,
    /// Create an employee.
    #[serde(default = "default_create")]
    pub create: String,
    /// Delete one employee.
    #[serde(default = "default_delete_by_id")]
    pub delete_by_id: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            list_all: default_list_all(),
            get_by_id: default_get_by_id(),
            create: default_create(),
            delete_by_id: default_delete_by_id(),
        }
    }
}

/// Fixed-delay retry settings applied to HTTP 429 responses only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts, including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay between attempts in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl RetryConfig {
    /// Delay between attempts as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_base_url() -> String {
    "https://dummy.restapiexample.com/api/v1".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_user_agent() -> String {
    concat!("employees-proxy/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_list_all() -> String {
    "/employees".to_string()
}

fn default_get_by_id() -> String {
    "/employee/{id}".to_string()
}

fn default_create() -> String {
    "/create".to_string()
}

fn default_delete_by_id() -> String {
    "/delete/{id}".to_string()
}

fn default_max_attempts() -> u32 {
    10
}

fn default_delay_ms() -> u64 {
    1000
}
