//! Team model

use serde::{Deserialize, Serialize};

/// Team within the workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team ID
    pub id: String,

    /// Short key used as the issue identifier prefix (e.g. "ENG")
    pub key: String,

    /// Team name
    pub name: String,

    pub description: Option<String>,

    /// Private teams are visible to members only
    pub private: bool,
}
