//! Raw response shapes to domain entities
//!
//! Conversions are total: anything that decoded into a `schema` node maps.
//! Nullable objects stay `None`, missing connections become empty vectors,
//! blank descriptions are treated as absent, and float scalars that the
//! domain counts in whole numbers are rounded.

use super::models::{
    Cycle, CycleSummary, Initiative, Issue, Label, Organisation, Project, ProjectSummary, Team,
    User, WorkflowState,
};
use super::schema::{
    Connection, CycleNode, CycleRefNode, InitiativeNode, IssueNode, LabelNode, OrganizationNode,
    ProjectNode, ProjectRefNode, TeamNode, UserNode, WorkflowStateNode,
};

/// Linear priorities run from 0 (none) to 4 (low).
const MAX_PRIORITY: f64 = 4.0;

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

fn nodes<N, T: From<N>>(connection: Option<Connection<N>>) -> Vec<T> {
    connection
        .unwrap_or_default()
        .nodes
        .into_iter()
        .map(T::from)
        .collect()
}

fn priority(raw: f64) -> u8 {
    raw.round().clamp(0.0, MAX_PRIORITY) as u8
}

fn whole(raw: f64) -> u32 {
    raw.round().max(0.0) as u32
}

impl From<UserNode> for User {
    fn from(node: UserNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            display_name: node.display_name,
            email: node.email,
            active: node.active,
            admin: node.admin,
            avatar_url: non_empty(node.avatar_url),
        }
    }
}

impl From<TeamNode> for Team {
    fn from(node: TeamNode) -> Self {
        Self {
            id: node.id,
            key: node.key,
            name: node.name,
            description: non_empty(node.description),
            private: node.private,
        }
    }
}

impl From<WorkflowStateNode> for WorkflowState {
    fn from(node: WorkflowStateNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            color: node.color,
            state_type: node.state_type,
            position: node.position,
            team: node.team.map(Team::from),
        }
    }
}

impl From<LabelNode> for Label {
    fn from(node: LabelNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            description: non_empty(node.description),
            color: node.color,
            team: node.team.map(Team::from),
        }
    }
}

impl From<ProjectRefNode> for ProjectSummary {
    fn from(node: ProjectRefNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            state: non_empty(node.state),
        }
    }
}

impl From<CycleRefNode> for CycleSummary {
    fn from(node: CycleRefNode) -> Self {
        Self {
            id: node.id,
            name: non_empty(node.name),
            number: whole(node.number),
        }
    }
}

impl From<IssueNode> for Issue {
    fn from(node: IssueNode) -> Self {
        Self {
            id: node.id,
            identifier: node.identifier,
            title: node.title,
            description: non_empty(node.description),
            priority: priority(node.priority),
            estimate: node.estimate,
            due_date: node.due_date,
            url: node.url,
            created_at: node.created_at,
            updated_at: node.updated_at,
            team: node.team.into(),
            state: node.state.map(WorkflowState::from),
            assignee: node.assignee.map(User::from),
            creator: node.creator.map(User::from),
            project: node.project.map(ProjectSummary::from),
            cycle: node.cycle.map(CycleSummary::from),
            labels: nodes(node.labels),
        }
    }
}

impl From<ProjectNode> for Project {
    fn from(node: ProjectNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            description: non_empty(node.description),
            state: node.state,
            progress: node.progress,
            start_date: node.start_date,
            target_date: node.target_date,
            url: node.url,
            created_at: node.created_at,
            updated_at: node.updated_at,
            lead: node.lead.map(User::from),
            teams: nodes(node.teams),
        }
    }
}

impl From<InitiativeNode> for Initiative {
    fn from(node: InitiativeNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            description: non_empty(node.description),
            target_date: node.target_date,
            owner: node.owner.map(User::from),
            projects: nodes(node.projects),
            created_at: node.created_at,
            updated_at: node.updated_at,
        }
    }
}

impl From<CycleNode> for Cycle {
    fn from(node: CycleNode) -> Self {
        Self {
            id: node.id,
            name: non_empty(node.name),
            number: whole(node.number),
            starts_at: node.starts_at,
            ends_at: node.ends_at,
            progress: node.progress,
            description: non_empty(node.description),
            team: node.team.into(),
        }
    }
}

impl From<OrganizationNode> for Organisation {
    fn from(node: OrganizationNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            url_key: node.url_key,
            logo_url: non_empty(node.logo_url),
            user_count: node.user_count,
        }
    }
}

/// Map every node of a connection.
pub fn map_nodes<N, T: From<N>>(connection: Connection<N>) -> Vec<T> {
    nodes(Some(connection))
}
