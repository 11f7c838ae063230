//! Client-side result filters
//!
//! Linear's list queries are fetched unfiltered and narrowed here. Every
//! filter keeps input order and only removes items.

use super::models::{Cycle, Issue, Label, Project, WorkflowState};
use super::pagination::{IssueListOptions, ProjectListOptions};

/// Entities that may belong to a team.
pub trait TeamOwned {
    fn owning_team_id(&self) -> Option<&str>;
}

impl TeamOwned for Label {
    fn owning_team_id(&self) -> Option<&str> {
        self.team.as_ref().map(|t| t.id.as_str())
    }
}

impl TeamOwned for WorkflowState {
    fn owning_team_id(&self) -> Option<&str> {
        self.team.as_ref().map(|t| t.id.as_str())
    }
}

impl TeamOwned for Cycle {
    fn owning_team_id(&self) -> Option<&str> {
        Some(self.team.id.as_str())
    }
}

/// `None` matches everything; otherwise the relation must be present and equal.
fn relation_matches(filter: Option<&str>, actual: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}

/// Whether an issue passes every filter set in `opts`.
pub fn issue_matches(issue: &Issue, opts: &IssueListOptions) -> bool {
    relation_matches(opts.team_id.as_deref(), Some(issue.team.id.as_str()))
        && relation_matches(
            opts.assignee_id.as_deref(),
            issue.assignee.as_ref().map(|u| u.id.as_str()),
        )
        && relation_matches(
            opts.state_id.as_deref(),
            issue.state.as_ref().map(|s| s.id.as_str()),
        )
        && relation_matches(
            opts.project_id.as_deref(),
            issue.project.as_ref().map(|p| p.id.as_str()),
        )
}

pub fn filter_issues(issues: Vec<Issue>, opts: &IssueListOptions) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| issue_matches(issue, opts))
        .collect()
}

/// Keep items owned by `team_id`. Items with no team are dropped whenever a
/// filter is given.
pub fn filter_by_team<T: TeamOwned>(items: Vec<T>, team_id: Option<&str>) -> Vec<T> {
    match team_id {
        None => items,
        Some(wanted) => items
            .into_iter()
            .filter(|item| item.owning_team_id() == Some(wanted))
            .collect(),
    }
}

pub fn project_matches(project: &Project, opts: &ProjectListOptions) -> bool {
    if let Some(state) = opts.state.as_deref() {
        if project.state != state {
            return false;
        }
    }

    match opts.team_id.as_deref() {
        None => true,
        Some(team_id) => project.teams.iter().any(|t| t.id == team_id),
    }
}

pub fn filter_projects(projects: Vec<Project>, opts: &ProjectListOptions) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|project| project_matches(project, opts))
        .collect()
}
