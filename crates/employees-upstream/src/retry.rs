//! Fixed-delay retry for rate-limited upstream calls.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, warn};

use employees_core::config::RetryConfig;
use employees_core::result::AppResult;

/// Retries an operation while it fails with a retryable error kind.
///
/// Only [`ErrorKind::RateLimited`](employees_core::error::ErrorKind) is
/// retryable. The first attempt counts toward `max_attempts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy; `max_attempts` is clamped to at least one.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, config.delay())
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs `call` until it succeeds, fails with a non-retryable error, or
    /// the attempt budget is spent. `call` receives the 1-based attempt
    /// number. The last error is returned unchanged.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> AppResult<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let mut attempt = 1;
        loop {
            match call(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if err.kind.is_retryable() && attempt < self.max_attempts => {
                    warn!(
                        operation,
                        attempt,
                        max_attempts = self.max_attempts,
                        delay_ms = self.delay.as_millis() as u64,
                        "Rate limited, retrying"
                    );
                    sleep(self.delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    if err.kind.is_retryable() {
                        error!(
                            operation,
                            attempts = attempt,
                            "Still rate limited after exhausting retries"
                        );
                    }
                    return Err(err);
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}
