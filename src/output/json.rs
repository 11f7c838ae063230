//! JSON output formatting
//!
//! Everything printed with `--json` is wrapped as `{"data": ..., "meta": ...}`.

use chrono::Utc;
use serde::Serialize;

/// Envelope for JSON output
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The entities themselves, unchanged
    pub data: T,

    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339)
    pub timestamp: String,

    /// lnr version
    pub version: String,
}

impl Metadata {
    pub fn now() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata::now(),
        }
    }
}

/// Format data as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
