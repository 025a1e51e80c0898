//! Outbound call seam between the service layer and the upstream API.

use async_trait::async_trait;
use http::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::result::AppResult;

/// A single outbound call, described as plain data.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    /// Fully formed target URL.
    pub url: String,
    /// HTTP verb.
    pub method: Method,
    /// Optional JSON request body.
    pub body: Option<serde_json::Value>,
}

impl UpstreamRequest {
    /// A `GET` request without a body.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            body: None,
        }
    }

    /// A `POST` request carrying `body` as JSON.
    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            url: url.into(),
            method: Method::POST,
            body: Some(body),
        }
    }

    /// A `DELETE` request without a body.
    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::DELETE,
            body: None,
        }
    }
}

/// The upstream answer to an [`UpstreamRequest`].
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// HTTP status returned by the upstream API.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
}

impl UpstreamResponse {
    /// Deserialize the body into the expected response shape.
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Executes outbound HTTP calls against the upstream employee API.
///
/// Implementations own the retry policy. A returned `Ok` always carries a
/// non-error status; 4xx/5xx answers and transport failures surface as
/// [`AppError`](crate::error::AppError).
#[async_trait]
pub trait UpstreamExecutor: Send + Sync + std::fmt::Debug + 'static {
    /// Issue `request` and return the upstream response.
    async fn execute(&self, request: UpstreamRequest) -> AppResult<UpstreamResponse>;
}
