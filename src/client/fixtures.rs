//! Test fixtures and builders for domain entities
//!
//! Builders start from sensible defaults with every optional relation unset.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::models::{
    Cycle, CycleSummary, Initiative, Issue, Label, Organisation, Project, ProjectSummary, Team,
    User, WorkflowState,
};

/// Fixed timestamp so rendered output is stable.
pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn team(id: &str, key: &str) -> Team {
    Team {
        id: id.to_string(),
        key: key.to_string(),
        name: format!("Team {}", key),
        description: None,
        private: false,
    }
}

pub fn user(id: &str) -> User {
    UserBuilder::new(id).build()
}

pub fn organisation() -> Organisation {
    Organisation {
        id: "org-1".to_string(),
        name: "Acme".to_string(),
        url_key: "acme".to_string(),
        logo_url: None,
        user_count: 12,
    }
}

// ============================================================================
// UserBuilder
// ============================================================================

/// Builder for test users.
#[derive(Debug, Clone)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            user: User {
                name: format!("User {}", id),
                display_name: id.clone(),
                email: format!("{}@example.com", id),
                id,
                active: true,
                admin: false,
                avatar_url: None,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.user.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.user.email = email.into();
        self
    }

    pub fn admin(mut self) -> Self {
        self.user.admin = true;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.user.active = false;
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}

// ============================================================================
// StateBuilder
// ============================================================================

/// Builder for test workflow states.
#[derive(Debug, Clone)]
pub struct StateBuilder {
    state: WorkflowState,
}

impl StateBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            state: WorkflowState {
                id: id.into(),
                name: "Todo".to_string(),
                color: "#e2e2e2".to_string(),
                state_type: "unstarted".to_string(),
                position: 1.0,
                team: None,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.state.name = name.into();
        self
    }

    pub fn state_type(mut self, state_type: impl Into<String>) -> Self {
        self.state.state_type = state_type.into();
        self
    }

    pub fn team(mut self, team: Team) -> Self {
        self.state.team = Some(team);
        self
    }

    pub fn build(self) -> WorkflowState {
        self.state
    }
}

// ============================================================================
// LabelBuilder
// ============================================================================

/// Builder for test labels. Workspace-wide unless a team is set.
#[derive(Debug, Clone)]
pub struct LabelBuilder {
    label: Label,
}

impl LabelBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: Label {
                name: format!("label-{}", id),
                id,
                description: None,
                color: "#5e6ad2".to_string(),
                team: None,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.label.name = name.into();
        self
    }

    pub fn team(mut self, team: Team) -> Self {
        self.label.team = Some(team);
        self
    }

    pub fn build(self) -> Label {
        self.label
    }
}

// ============================================================================
// IssueBuilder
// ============================================================================

/// Builder for test issues.
///
/// # Example
/// ```ignore
/// let issue = IssueBuilder::new("issue-1")
///     .title("Crash on start")
///     .assignee(user("u1"))
///     .priority(1)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct IssueBuilder {
    issue: Issue,
}

impl IssueBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            issue: Issue {
                identifier: "ENG-1".to_string(),
                title: format!("Issue {}", id),
                url: format!("https://linear.app/acme/issue/{}", id),
                id,
                description: None,
                priority: 0,
                estimate: None,
                due_date: None,
                created_at: timestamp(),
                updated_at: timestamp(),
                team: team("team-1", "ENG"),
                state: None,
                assignee: None,
                creator: None,
                project: None,
                cycle: None,
                labels: Vec::new(),
            },
        }
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.issue.identifier = identifier.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.issue.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.issue.description = Some(description.into());
        self
    }

    pub fn priority(mut self, priority: u8) -> Self {
        self.issue.priority = priority;
        self
    }

    pub fn estimate(mut self, estimate: f64) -> Self {
        self.issue.estimate = Some(estimate);
        self
    }

    pub fn due_date(mut self, due: NaiveDate) -> Self {
        self.issue.due_date = Some(due);
        self
    }

    pub fn team(mut self, team: Team) -> Self {
        self.issue.team = team;
        self
    }

    /// Set the workflow state by id, with a default name.
    pub fn state(mut self, id: &str) -> Self {
        self.issue.state = Some(StateBuilder::new(id).name("In Progress").build());
        self
    }

    pub fn workflow_state(mut self, state: WorkflowState) -> Self {
        self.issue.state = Some(state);
        self
    }

    pub fn assignee(mut self, user: User) -> Self {
        self.issue.assignee = Some(user);
        self
    }

    pub fn creator(mut self, user: User) -> Self {
        self.issue.creator = Some(user);
        self
    }

    /// Set the project by id, with a default name.
    pub fn project(mut self, id: &str) -> Self {
        self.issue.project = Some(ProjectSummary {
            id: id.to_string(),
            name: format!("Project {}", id),
            state: Some("started".to_string()),
        });
        self
    }

    pub fn cycle(mut self, id: &str, number: u32) -> Self {
        self.issue.cycle = Some(CycleSummary {
            id: id.to_string(),
            name: None,
            number,
        });
        self
    }

    pub fn label(mut self, label: Label) -> Self {
        self.issue.labels.push(label);
        self
    }

    pub fn build(self) -> Issue {
        self.issue
    }
}

// ============================================================================
// ProjectBuilder
// ============================================================================

/// Builder for test projects.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            project: Project {
                name: format!("Project {}", id),
                url: format!("https://linear.app/acme/project/{}", id),
                id,
                description: None,
                state: "planned".to_string(),
                progress: 0.0,
                start_date: None,
                target_date: None,
                created_at: timestamp(),
                updated_at: timestamp(),
                lead: None,
                teams: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.project.name = name.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.project.state = state.into();
        self
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.project.progress = progress;
        self
    }

    pub fn target_date(mut self, date: NaiveDate) -> Self {
        self.project.target_date = Some(date);
        self
    }

    pub fn lead(mut self, user: User) -> Self {
        self.project.lead = Some(user);
        self
    }

    pub fn teams(mut self, teams: Vec<Team>) -> Self {
        self.project.teams = teams;
        self
    }

    pub fn build(self) -> Project {
        self.project
    }
}

// ============================================================================
// InitiativeBuilder
// ============================================================================

/// Builder for test initiatives.
#[derive(Debug, Clone)]
pub struct InitiativeBuilder {
    initiative: Initiative,
}

impl InitiativeBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            initiative: Initiative {
                name: format!("Initiative {}", id),
                id,
                description: None,
                target_date: None,
                owner: None,
                projects: Vec::new(),
                created_at: timestamp(),
                updated_at: timestamp(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.initiative.name = name.into();
        self
    }

    pub fn owner(mut self, user: User) -> Self {
        self.initiative.owner = Some(user);
        self
    }

    pub fn target_date(mut self, date: NaiveDate) -> Self {
        self.initiative.target_date = Some(date);
        self
    }

    pub fn project(mut self, id: &str, name: &str) -> Self {
        self.initiative.projects.push(ProjectSummary {
            id: id.to_string(),
            name: name.to_string(),
            state: None,
        });
        self
    }

    pub fn build(self) -> Initiative {
        self.initiative
    }
}

// ============================================================================
// CycleBuilder
// ============================================================================

/// Builder for test cycles.
#[derive(Debug, Clone)]
pub struct CycleBuilder {
    cycle: Cycle,
}

impl CycleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            cycle: Cycle {
                id: id.into(),
                name: None,
                number: 1,
                starts_at: timestamp(),
                ends_at: timestamp() + chrono::Duration::days(14),
                progress: 0.0,
                description: None,
                team: team("team-1", "ENG"),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.cycle.name = Some(name.into());
        self
    }

    pub fn number(mut self, number: u32) -> Self {
        self.cycle.number = number;
        self
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.cycle.progress = progress;
        self
    }

    pub fn team(mut self, team: Team) -> Self {
        self.cycle.team = team;
        self
    }

    pub fn build(self) -> Cycle {
        self.cycle
    }
}
