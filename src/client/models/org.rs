//! Organisation model

use serde::{Deserialize, Serialize};

/// The workspace the API key belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    /// Organisation ID
    pub id: String,

    /// Workspace name
    pub name: String,

    /// Slug used in linear.app URLs
    pub url_key: String,

    pub logo_url: Option<String>,

    /// Number of users in the workspace
    pub user_count: u32,
}
