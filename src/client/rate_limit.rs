//! Rate-limit retry stage for the Linear API
//!
//! Reactive: nothing is throttled until the server answers 429. Each 429 is
//! followed by a wait and a verbatim resend, up to a fixed number of retries.
//! The wait doubles every attempt unless the server names one in
//! `Retry-After`, which always wins.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;

use super::transport::{OutgoingRequest, Transport, TransportResponse};
use crate::error::{ApiError, ApiResult};

/// How many times to retry and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt (0 disables retrying)
    pub max_retries: u32,

    /// Wait before the first retry
    pub base_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: crate::config::DEFAULT_MAX_RETRIES,
            base_backoff: crate::config::DEFAULT_BASE_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// Exponential wait for a zero-based retry number: `base * 2^attempt`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_backoff.saturating_mul(factor)
    }

    /// Wait before the next retry, honouring the server's hint when present.
    pub fn delay_for(&self, attempt: u32, response: &TransportResponse) -> Duration {
        response
            .retry_after()
            .unwrap_or_else(|| self.backoff(attempt))
    }
}

/// Outermost pipeline stage: retries 429 responses.
///
/// Any other status, and any transport error, is returned straight away.
/// When retries run out the last 429 response is handed back untouched so
/// the caller can still read its status and headers.
pub struct RetryTransport<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: Transport> RetryTransport<T> {
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<T: Transport> Transport for RetryTransport<T> {
    async fn round_trip(&self, request: OutgoingRequest) -> ApiResult<TransportResponse> {
        let mut attempt = 0;

        loop {
            let response = self.inner.round_trip(request.clone()).await?;

            if response.status != StatusCode::TOO_MANY_REQUESTS {
                return Ok(response);
            }

            if attempt >= self.policy.max_retries {
                warn!(
                    "Rate limited by {}; giving up after {} retries",
                    request.url, attempt
                );
                return Ok(response);
            }

            let delay = self.policy.delay_for(attempt, &response);
            debug!(
                "Rate limited (429), retry {}/{} in {:?}",
                attempt + 1,
                self.policy.max_retries,
                delay
            );

            tokio::select! {
                biased;
                _ = request.cancel.cancelled() => {
                    debug!("Cancelled while waiting to retry");
                    return Err(ApiError::Cancelled);
                }
                _ = tokio::time::sleep(delay) => {}
            }

            attempt += 1;
        }
    }
}
