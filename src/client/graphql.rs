//! GraphQL query executor
//!
//! Wraps a document and its variables in the standard `{query, variables}`
//! envelope, sends it through the transport pipeline, and decodes the
//! `{data, errors}` response into a caller-chosen type.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::cancel::CancelToken;
use super::transport::{OutgoingRequest, Transport, TransportResponse};
use crate::error::{ApiError, ApiResult, Error, Result};

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorMessage>>,
}

#[derive(Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

/// Sends GraphQL operations through a transport and decodes the results.
pub struct GraphQlClient {
    transport: Box<dyn Transport>,
    endpoint: String,
    timeout: Duration,
    cancel: CancelToken,
}

impl GraphQlClient {
    pub fn new(
        transport: Box<dyn Transport>,
        endpoint: impl Into<String>,
        timeout: Duration,
        cancel: CancelToken,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            timeout,
            cancel,
        }
    }

    /// Run `document` with `variables` and decode `data` into `D`.
    ///
    /// Any failure is reported as [`Error::Query`] tagged with `operation`.
    pub async fn query<D: DeserializeOwned>(
        &self,
        operation: &'static str,
        document: &str,
        variables: Value,
    ) -> Result<D> {
        debug!("GraphQL {}", operation);
        self.execute(document, &variables)
            .await
            .map_err(|source| Error::Query { operation, source })
    }

    async fn execute<D: DeserializeOwned>(&self, document: &str, variables: &Value) -> ApiResult<D> {
        let body = serde_json::to_vec(&GraphQlRequest {
            query: document,
            variables,
        })
        .map_err(|e| ApiError::BadRequest(format!("Failed to encode request: {}", e)))?;

        let request = OutgoingRequest::post(self.endpoint.as_str(), body, self.cancel.clone());

        let response = tokio::time::timeout(self.timeout, self.transport.round_trip(request))
            .await
            .map_err(|_| ApiError::Timeout)??;

        if let Some(err) = status_error(&response) {
            return Err(err);
        }

        decode(&response.body)
    }
}

/// Map a non-success HTTP status to an error; `None` for 2xx.
fn status_error(response: &TransportResponse) -> Option<ApiError> {
    let status = response.status;
    if status.is_success() {
        return None;
    }

    let err = match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited {
            retry_after: response.retry_after(),
        },
        s if s.is_server_error() => {
            let text = response.text();
            if text.trim().is_empty() {
                ApiError::ServerError(format!("HTTP {}", s))
            } else {
                ApiError::ServerError(text)
            }
        }
        s => match error_messages(&response.body) {
            Some(messages) => ApiError::GraphQl(messages),
            None => {
                let text = response.text();
                if text.trim().is_empty() {
                    ApiError::BadRequest(format!("HTTP {}", s))
                } else {
                    ApiError::BadRequest(text)
                }
            }
        },
    };

    Some(err)
}

/// GraphQL error messages in a response body, joined with "; ".
fn error_messages(body: &[u8]) -> Option<String> {
    let envelope: GraphQlResponse = serde_json::from_slice(body).ok()?;
    joined(envelope.errors?)
}

fn joined(errors: Vec<GraphQlErrorMessage>) -> Option<String> {
    if errors.is_empty() {
        return None;
    }
    Some(
        errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; "),
    )
}

fn decode<D: DeserializeOwned>(body: &[u8]) -> ApiResult<D> {
    let envelope: GraphQlResponse = serde_json::from_slice(body)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    if let Some(messages) = envelope.errors.and_then(joined) {
        return Err(ApiError::GraphQl(messages));
    }

    let data = envelope
        .data
        .ok_or_else(|| ApiError::InvalidResponse("Response contained no data".to_string()))?;

    serde_json::from_value(data)
        .map_err(|e| ApiError::InvalidResponse(format!("Unexpected response shape: {}", e)))
}
