//! HTTP transport pipeline
//!
//! Requests flow through composable stages, each owning one concern:
//!
//! ```text
//! RetryTransport  ->  AuthTransport  ->  HttpTransport
//! (429 backoff)       (headers)          (reqwest)
//! ```
//!
//! Every stage implements [`Transport`], so stages are composed by wrapping
//! and tests can substitute any of them.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client as HttpClient, Method, StatusCode};

use super::cancel::CancelToken;
use super::rate_limit::{RetryPolicy, RetryTransport};
use crate::config::ClientSettings;
use crate::error::{ApiError, ApiResult, Result};

mod auth;

pub use auth::AuthTransport;

/// One stage of the request pipeline.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the raw response.
    ///
    /// Non-success statuses are responses, not errors. Only failures to get
    /// a response at all (connection errors, cancellation) are `Err`.
    async fn round_trip(&self, request: OutgoingRequest) -> ApiResult<TransportResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn round_trip(&self, request: OutgoingRequest) -> ApiResult<TransportResponse> {
        (**self).round_trip(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn round_trip(&self, request: OutgoingRequest) -> ApiResult<TransportResponse> {
        (**self).round_trip(request).await
    }
}

/// A fully buffered outgoing request.
///
/// The body is owned bytes so the request can be cloned and resent verbatim.
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// Caller's cancellation signal, observed by every stage that waits
    pub cancel: CancelToken,
}

impl OutgoingRequest {
    /// Build a POST request with the given body.
    pub fn post(url: impl Into<String>, body: Vec<u8>, cancel: CancelToken) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: HeaderMap::new(),
            body,
            cancel,
        }
    }
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Create a response with no headers.
    #[cfg(test)]
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// The server's `Retry-After` hint, in seconds.
    ///
    /// Only the delta-seconds form is understood; decimals are accepted.
    pub fn retry_after(&self) -> Option<Duration> {
        let raw = self.headers.get(RETRY_AFTER)?.to_str().ok()?;
        let secs: f64 = raw.trim().parse().ok()?;
        Duration::try_from_secs_f64(secs).ok()
    }

    /// Body as lossy UTF-8, for error messages.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Base stage: sends requests over reqwest.
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Create the base transport with a per-attempt timeout.
    pub fn new(timeout: Duration) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("lnr/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn round_trip(&self, request: OutgoingRequest) -> ApiResult<TransportResponse> {
        let OutgoingRequest {
            method,
            url,
            headers,
            body,
            cancel,
        } = request;

        debug!("{} {} ({} bytes)", method, url, body.len());

        let send = async move {
            let response = self
                .http
                .request(method, &url)
                .headers(headers)
                .body(body)
                .send()
                .await?;

            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?.to_vec();

            debug!("Response {} ({} bytes)", status, body.len());

            Ok::<_, ApiError>(TransportResponse {
                status,
                headers,
                body,
            })
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ApiError::Cancelled),
            result = send => result,
        }
    }
}

/// Compose the standard pipeline: retry around auth around HTTP.
pub fn pipeline(
    api_key: &str,
    settings: &ClientSettings,
) -> Result<RetryTransport<AuthTransport<HttpTransport>>> {
    let http = HttpTransport::new(settings.timeout)?;
    let auth = AuthTransport::new(http, api_key)?;
    let policy = RetryPolicy {
        max_retries: settings.max_retries,
        base_backoff: settings.base_backoff,
    };
    Ok(RetryTransport::new(auth, policy))
}
