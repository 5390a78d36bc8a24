//! Bounded retry for idempotent requests.
//!
//! Rate-limited (429) responses wait for `Retry-After` when the server sends
//! it; server errors and connection failures back off exponentially. Other
//! client errors (403, 404, ...) fail on the first attempt.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::client::HttpClient;
use super::request::HttpRequest;
use super::response::HttpResponse;
use crate::error::{NetworkError, Result};

/// Retry configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Initial delay between retries in milliseconds.
    pub initial_delay_ms: u64,
    /// Maximum delay between retries in milliseconds.
    pub max_delay_ms: u64,
    /// Multiplier for exponential backoff.
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 1000,
            max_delay_ms: 30000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// The first backoff delay.
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// The delay following `current`, capped at `max_delay_ms`.
    pub fn next_delay(&self, current: Duration) -> Duration {
        let next_ms = (current.as_millis() as f64 * self.backoff_multiplier) as u64;
        Duration::from_millis(next_ms.min(self.max_delay_ms))
    }
}

/// What to do with a single response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    /// The response is final and successful.
    Done,
    /// Retry after the given delay.
    RetryAfter(Duration),
    /// The response is a permanent failure.
    Fail,
}

/// Classify a response status.
///
/// `retry_after` is the parsed `Retry-After` header, used only for 429.
pub fn classify(status: u16, retry_after: Option<Duration>, backoff: Duration) -> RetryDecision {
    match status {
        200..=299 => RetryDecision::Done,
        429 => RetryDecision::RetryAfter(retry_after.unwrap_or(backoff)),
        500..=599 => RetryDecision::RetryAfter(backoff),
        _ => RetryDecision::Fail,
    }
}

fn parse_retry_after(response: &HttpResponse) -> Option<Duration> {
    // Only the delay-seconds form is supported, not HTTP dates.
    response
        .header("Retry-After")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

pub(crate) async fn execute_with_retry(
    client: &HttpClient,
    request: &HttpRequest,
    policy: &RetryPolicy,
) -> Result<HttpResponse> {
    let mut attempt: u32 = 0;
    let mut delay = policy.initial_delay();

    loop {
        attempt += 1;
        let can_retry = attempt <= policy.max_retries;

        match request.execute(client).await {
            Ok(response) => {
                let status = response.status();
                match classify(status, parse_retry_after(&response), delay) {
                    RetryDecision::Done => {
                        tracing::info!(
                            target: "onevone_net::http",
                            url = %request.url,
                            status,
                            attempt,
                            "request succeeded"
                        );
                        return Ok(response);
                    }
                    RetryDecision::RetryAfter(wait) if can_retry => {
                        tracing::warn!(
                            target: "onevone_net::http",
                            url = %request.url,
                            status,
                            attempt,
                            wait_ms = wait.as_millis() as u64,
                            "transient failure, retrying"
                        );
                        tokio::time::sleep(wait).await;
                        delay = policy.next_delay(delay);
                    }
                    _ => {
                        tracing::error!(
                            target: "onevone_net::http",
                            url = %request.url,
                            status,
                            attempt,
                            "request failed"
                        );
                        return Err(response
                            .error_for_status_with_body()
                            .await
                            .err()
                            .unwrap_or(NetworkError::HttpStatus {
                                status,
                                message: None,
                            }));
                    }
                }
            }
            Err(err) if err.is_transient() && can_retry => {
                tracing::warn!(
                    target: "onevone_net::http",
                    url = %request.url,
                    attempt,
                    error = %err,
                    "request error, retrying"
                );
                tokio::time::sleep(delay).await;
                delay = policy.next_delay(delay);
            }
            Err(err) => return Err(err),
        }
    }
}
