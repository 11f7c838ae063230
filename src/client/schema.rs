//! Raw response shapes
//!
//! One struct per selection set in `queries.rs`, mirroring the wire format
//! exactly: camelCase keys, nullable objects as `Option`, connections as
//! `{ nodes: [...] }`, and GraphQL `Float` scalars as `f64` even where the
//! domain wants an integer. `mapper.rs` turns these into domain entities.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A GraphQL connection; only `nodes` is selected.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamNode {
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStateNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "type", default)]
    pub state_type: String,
    #[serde(default)]
    pub position: f64,
    #[serde(default)]
    pub team: Option<TeamNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub team: Option<TeamNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRefNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleRefNode {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub number: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueNode {
    pub id: String,
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: f64,
    #[serde(default)]
    pub estimate: Option<f64>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub team: TeamNode,
    #[serde(default)]
    pub state: Option<WorkflowStateNode>,
    #[serde(default)]
    pub assignee: Option<UserNode>,
    #[serde(default)]
    pub creator: Option<UserNode>,
    #[serde(default)]
    pub project: Option<ProjectRefNode>,
    #[serde(default)]
    pub cycle: Option<CycleRefNode>,
    #[serde(default)]
    pub labels: Option<Connection<LabelNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub lead: Option<UserNode>,
    #[serde(default)]
    pub teams: Option<Connection<TeamNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiativeNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub owner: Option<UserNode>,
    #[serde(default)]
    pub projects: Option<Connection<ProjectRefNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleNode {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub number: f64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub team: TeamNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url_key: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub user_count: u32,
}

// Root `data` objects, one per query.

#[derive(Debug, Deserialize)]
pub struct ViewerData {
    pub viewer: UserNode,
}

#[derive(Debug, Deserialize)]
pub struct OrganizationData {
    pub organization: OrganizationNode,
}

#[derive(Debug, Deserialize)]
pub struct UsersData {
    pub users: Connection<UserNode>,
}

#[derive(Debug, Deserialize)]
pub struct TeamsData {
    pub teams: Connection<TeamNode>,
}

#[derive(Debug, Deserialize)]
pub struct TeamData {
    pub team: TeamNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLabelsData {
    pub issue_labels: Connection<LabelNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatesData {
    pub workflow_states: Connection<WorkflowStateNode>,
}

#[derive(Debug, Deserialize)]
pub struct IssuesData {
    pub issues: Connection<IssueNode>,
}

#[derive(Debug, Deserialize)]
pub struct IssueData {
    pub issue: IssueNode,
}

#[derive(Debug, Deserialize)]
pub struct ProjectsData {
    pub projects: Connection<ProjectNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectData {
    pub project: ProjectNode,
}

#[derive(Debug, Deserialize)]
pub struct InitiativesData {
    pub initiatives: Connection<InitiativeNode>,
}

#[derive(Debug, Deserialize)]
pub struct InitiativeData {
    pub initiative: InitiativeNode,
}

#[derive(Debug, Deserialize)]
pub struct CyclesData {
    pub cycles: Connection<CycleNode>,
}

#[derive(Debug, Deserialize)]
pub struct CycleData {
    pub cycle: CycleNode,
}

/// `team(id) { activeCycle }`; both levels are nullable.
#[derive(Debug, Deserialize)]
pub struct TeamActiveCycleData {
    #[serde(default)]
    pub team: Option<TeamActiveCycleNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamActiveCycleNode {
    pub id: String,
    #[serde(default)]
    pub active_cycle: Option<CycleNode>,
}
