//! Workflow state model

use serde::{Deserialize, Serialize};

use super::Team;

/// One stage of a team's workflow (e.g. "In Progress")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
    pub id: String,
    pub name: String,

    /// Hex colour
    pub color: String,

    /// Category: backlog, unstarted, started, completed, canceled or triage
    #[serde(rename = "type")]
    pub state_type: String,

    /// Sort position within the team's workflow
    pub position: f64,

    /// Owning team, when it was selected
    pub team: Option<Team>,
}
