//! Issue model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{CycleSummary, Label, ProjectSummary, Team, User, WorkflowState};

/// Linear issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Issue ID
    pub id: String,

    /// Human-readable identifier (e.g. "ENG-123")
    pub identifier: String,

    pub title: String,

    /// Markdown body
    pub description: Option<String>,

    /// 0 = no priority, 1 = urgent, 2 = high, 3 = medium, 4 = low
    pub priority: u8,

    /// Estimate in the team's point scale
    pub estimate: Option<f64>,

    pub due_date: Option<NaiveDate>,

    /// Link to the issue in the Linear app
    pub url: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Every issue belongs to exactly one team
    pub team: Team,

    pub state: Option<WorkflowState>,
    pub assignee: Option<User>,
    pub creator: Option<User>,
    pub project: Option<ProjectSummary>,
    pub cycle: Option<CycleSummary>,

    /// Empty when the issue has no labels
    pub labels: Vec<Label>,
}
