//! Detail API trait for single-entity lookups

use async_trait::async_trait;

use crate::client::models::{Cycle, Initiative, Issue, Project, Team};
use crate::error::Result;

/// Fetch one entity by id.
///
/// An unknown id surfaces the service's own error, wrapped with the
/// operation name.
#[async_trait]
pub trait DetailApi: Send + Sync {
    async fn get_team(&self, id: &str) -> Result<Team>;

    /// Accepts either the UUID or the identifier (e.g. "ENG-123")
    async fn get_issue(&self, id: &str) -> Result<Issue>;

    async fn get_project(&self, id: &str) -> Result<Project>;

    async fn get_initiative(&self, id: &str) -> Result<Initiative>;

    async fn get_cycle(&self, id: &str) -> Result<Cycle>;

    /// The cycle currently running for a team.
    ///
    /// Fails with [`Error::NoActiveCycle`](crate::error::Error::NoActiveCycle)
    /// when the team exists but has no cycle in progress.
    async fn get_active_cycle(&self, team_id: &str) -> Result<Cycle>;
}
