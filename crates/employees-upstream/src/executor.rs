//! reqwest-backed [`UpstreamExecutor`].

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

use employees_core::config::UpstreamConfig;
use employees_core::error::{AppError, ErrorKind};
use employees_core::result::AppResult;
use employees_core::traits::{UpstreamExecutor, UpstreamRequest, UpstreamResponse};

use crate::retry::RetryPolicy;

const APPLICATION_JSON: &str = "application/json";

/// Executes upstream calls over a shared [`reqwest::Client`].
///
/// Holds no per-call state; clone it or share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RestExecutor {
    client: Client,
    retry: RetryPolicy,
}

impl RestExecutor {
    /// Builds the HTTP client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self::with_client(client, RetryPolicy::from_config(&config.retry)))
    }

    /// Wraps an existing client.
    pub fn with_client(client: Client, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    async fn attempt(&self, request: &UpstreamRequest, attempt: u32) -> AppResult<UpstreamResponse> {
        info!(
            method = %request.method,
            url = %request.url,
            attempt,
            max_attempts = self.retry.max_attempts(),
            "Upstream attempt"
        );
        self.send_once(request).await
    }

    async fn send_once(&self, request: &UpstreamRequest) -> AppResult<UpstreamResponse> {
        debug!("Calling {} with HTTP {} method", request.url, request.method);

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.as_str())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(request, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(request, e))?;

        classify(request, status, body)
    }
}

#[async_trait]
impl UpstreamExecutor for RestExecutor {
    async fn execute(&self, request: UpstreamRequest) -> AppResult<UpstreamResponse> {
        let operation = format!("{} {}", request.method, request.url);
        self.retry
            .run(&operation, |attempt| self.attempt(&request, attempt))
            .await
    }
}

/// Maps an HTTP status to success or the matching error kind.
fn classify(
    request: &UpstreamRequest,
    status: StatusCode,
    body: String,
) -> AppResult<UpstreamResponse> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(AppError::rate_limited(format!(
            "Upstream rate limit hit calling {} {}",
            request.method, request.url
        )));
    }

    if status.is_client_error() {
        error!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            body = %body,
            "Error occurred while calling upstream"
        );
        return Err(AppError::upstream_client(format!(
            "Upstream returned {status} for {} {}",
            request.method, request.url
        )));
    }

    if status.is_server_error() {
        error!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            body = %body,
            "Unexpected upstream failure"
        );
        return Err(AppError::external_service(format!(
            "Upstream returned {status} for {} {}",
            request.method, request.url
        )));
    }

    Ok(UpstreamResponse { status, body })
}

fn transport_error(request: &UpstreamRequest, err: reqwest::Error) -> AppError {
    error!(
        method = %request.method,
        url = %request.url,
        error = %err,
        "Unexpected error occurred while calling upstream"
    );
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("Failed to call {} {}: {err}", request.method, request.url),
        err,
    )
}
