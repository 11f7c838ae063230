//! Issue label model

use serde::{Deserialize, Serialize};

use super::Team;

/// Issue label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,

    /// `None` for workspace-wide labels
    pub team: Option<Team>,
}
