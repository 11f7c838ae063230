//! Listing API trait for collection operations

use async_trait::async_trait;

use crate::client::models::{Cycle, Initiative, Issue, Label, Project, Team, User, WorkflowState};
use crate::client::pagination::{IssueListOptions, Page, ProjectListOptions};
use crate::error::Result;

/// Collection listing operations for the Linear API
///
/// Each call fetches a single page. Filters are applied to that page after
/// it arrives, and the returned [`Page`] remembers the page size so callers
/// can detect truncation.
#[async_trait]
pub trait ListingApi: Send + Sync {
    // ========================================================================
    // Workspace directory
    // ========================================================================

    /// List workspace members
    async fn list_users(&self) -> Result<Page<User>>;

    /// List teams
    async fn list_teams(&self) -> Result<Page<Team>>;

    /// List issue labels, optionally only those owned by `team_id`
    async fn list_labels(&self, team_id: Option<&str>) -> Result<Page<Label>>;

    /// List workflow states, optionally only those owned by `team_id`
    async fn list_workflow_states(&self, team_id: Option<&str>) -> Result<Page<WorkflowState>>;

    // ========================================================================
    // Issues
    // ========================================================================

    /// List issues
    async fn list_issues(&self, opts: &IssueListOptions) -> Result<Page<Issue>>;

    /// Case-insensitive title search
    ///
    /// The filters in `opts` are applied to the matches as well.
    async fn search_issues(&self, query: &str, opts: &IssueListOptions) -> Result<Page<Issue>>;

    // ========================================================================
    // Planning
    // ========================================================================

    /// List projects
    async fn list_projects(&self, opts: &ProjectListOptions) -> Result<Page<Project>>;

    /// List initiatives
    async fn list_initiatives(&self) -> Result<Page<Initiative>>;

    /// List cycles, optionally only those of `team_id`
    async fn list_cycles(&self, team_id: Option<&str>) -> Result<Page<Cycle>>;
}
