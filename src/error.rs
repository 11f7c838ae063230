//! Error types for the lnr CLI

use std::time::Duration;
use thiserror::Error;

/// Result type alias for lnr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type used below the query layer, where no operation name is known yet
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// A named API operation failed. The operation name gives the CLI enough
    /// context for a one-line message ("get issue: ...").
    #[error("{operation}: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: ApiError,
    },

    /// The team exists but has no cycle running right now.
    #[error("No active cycle for team {team_id}")]
    NoActiveCycle { team_id: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The underlying API error, whether or not it was wrapped with an operation name.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Query { source, .. } => Some(source),
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    /// True when the operation was aborted by the caller's cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.api_error(), Some(ApiError::Cancelled))
    }

    /// True for the "team found, nothing active" outcome of an active cycle lookup.
    pub fn is_no_active_cycle(&self) -> bool {
        matches!(self, Error::NoActiveCycle { .. })
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check that LINEAR_API_KEY holds a valid personal API key.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded{}", retry_hint(.retry_after))]
    RateLimited { retry_after: Option<Duration> },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Request cancelled")]
    Cancelled,

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

fn retry_hint(retry_after: &Option<Duration>) -> String {
    match retry_after {
        Some(wait) => format!(". Retry after {:?}", wait),
        None => ". Try again later".to_string(),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("LINEAR_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
