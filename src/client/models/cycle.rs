//! Cycle models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Team;

/// A time-boxed iteration of a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    /// Cycle ID
    pub id: String,

    /// Cycles are often unnamed and referred to by number
    pub name: Option<String>,

    /// Sequence number within the team
    pub number: u32,

    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,

    /// Completion ratio between 0 and 1
    pub progress: f64,

    pub description: Option<String>,

    /// Owning team
    pub team: Team,
}

impl Cycle {
    /// Name if set, otherwise "Cycle N".
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Cycle {}", self.number),
        }
    }
}

/// The partial cycle form embedded in issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSummary {
    pub id: String,
    pub name: Option<String>,
    pub number: u32,
}
