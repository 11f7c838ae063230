//! Filter argument types for CLI commands
//!
//! Every filter takes a Linear id and is applied to the fetched page, so a
//! match beyond the page size is not shown.

use clap::Args;

use crate::client::{IssueListOptions, ProjectListOptions};

/// Owning-team filter for labels, workflow states and cycles.
#[derive(Args, Debug, Default, Clone)]
pub struct TeamFilterArgs {
    /// Filter by team ID
    #[arg(long)]
    pub team: Option<String>,
}

/// Filter arguments for issue list and search.
#[derive(Args, Debug, Default, Clone)]
pub struct IssueFilterArgs {
    /// Filter by team ID
    #[arg(long)]
    pub team: Option<String>,

    /// Filter by assignee ID
    #[arg(long)]
    pub assignee: Option<String>,

    /// Filter by workflow state ID
    #[arg(long)]
    pub state: Option<String>,

    /// Filter by project ID
    #[arg(long)]
    pub project: Option<String>,

    /// Maximum number of issues to fetch (max 250)
    #[arg(long, short = 'n', default_value_t = 50)]
    pub limit: usize,
}

impl IssueFilterArgs {
    /// Convert CLI flags to client list options.
    pub fn to_options(&self) -> IssueListOptions {
        let mut opts = IssueListOptions::new().first(self.limit);
        if let Some(ref team) = self.team {
            opts = opts.team(team);
        }
        if let Some(ref assignee) = self.assignee {
            opts = opts.assignee(assignee);
        }
        if let Some(ref state) = self.state {
            opts = opts.state(state);
        }
        if let Some(ref project) = self.project {
            opts = opts.project(project);
        }
        opts
    }
}

/// Filter arguments for project list.
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectFilterArgs {
    /// Filter by team ID
    #[arg(long)]
    pub team: Option<String>,

    /// Filter by state (e.g., started, completed, canceled)
    #[arg(long)]
    pub state: Option<String>,

    /// Maximum number of projects to fetch (max 250)
    #[arg(long, short = 'n', default_value_t = 50)]
    pub limit: usize,
}

impl ProjectFilterArgs {
    /// Convert CLI flags to client list options.
    pub fn to_options(&self) -> ProjectListOptions {
        let mut opts = ProjectListOptions::new().first(self.limit);
        if let Some(ref team) = self.team {
            opts = opts.team(team);
        }
        if let Some(ref state) = self.state {
            opts = opts.state(state);
        }
        opts
    }
}
