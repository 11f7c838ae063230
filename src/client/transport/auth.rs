//! Credential stage of the transport pipeline

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};

use super::{OutgoingRequest, Transport, TransportResponse};
use crate::error::{ApiResult, ConfigError, Result};

/// Attaches the API key and JSON content type to every request.
///
/// Linear personal keys go into `Authorization` as-is, without a `Bearer`
/// prefix.
pub struct AuthTransport<T> {
    inner: T,
    authorization: HeaderValue,
}

impl<T: Transport> AuthTransport<T> {
    /// Wrap `inner`, validating the key up front so a malformed key fails at
    /// construction rather than on first use.
    pub fn new(inner: T, api_key: &str) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(api_key.trim()).map_err(|_| {
            ConfigError::Invalid("API key contains characters not allowed in a header".to_string())
        })?;
        authorization.set_sensitive(true);

        Ok(Self {
            inner,
            authorization,
        })
    }
}

#[async_trait]
impl<T: Transport> Transport for AuthTransport<T> {
    async fn round_trip(&self, mut request: OutgoingRequest) -> ApiResult<TransportResponse> {
        request
            .headers
            .insert(AUTHORIZATION, self.authorization.clone());
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        self.inner.round_trip(request).await
    }
}
