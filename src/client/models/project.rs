//! Project models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Team, User};

/// Linear project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project ID
    pub id: String,

    pub name: String,
    pub description: Option<String>,

    /// Lifecycle state (e.g. "planned", "started", "completed")
    pub state: String,

    /// Completion ratio between 0 and 1
    pub progress: f64,

    pub start_date: Option<NaiveDate>,
    pub target_date: Option<NaiveDate>,

    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub lead: Option<User>,

    /// Teams the project is shared with
    pub teams: Vec<Team>,
}

/// The partial project form embedded in issues and initiatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub state: Option<String>,
}
