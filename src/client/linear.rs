//! Linear API client implementation

use async_trait::async_trait;
use log::debug;
use serde_json::json;

use super::api::{DetailApi, ListingApi, ViewerApi};
use super::cancel::CancelToken;
use super::filters::{filter_by_team, filter_issues, filter_projects};
use super::graphql::GraphQlClient;
use super::mapper::map_nodes;
use super::models::{
    Cycle, Initiative, Issue, Label, Organisation, Project, Team, User, WorkflowState,
};
use super::pagination::{
    DEFAULT_PAGE_SIZE, DIRECTORY_PAGE_SIZE, IssueListOptions, Page, ProjectListOptions,
    effective_page_size,
};
use super::queries;
use super::schema::{
    CycleData, CyclesData, InitiativeData, InitiativesData, IssueData, IssueLabelsData, IssuesData,
    OrganizationData, ProjectData, ProjectsData, TeamActiveCycleData, TeamData, TeamsData,
    UsersData, ViewerData, WorkflowStatesData,
};
use super::transport::{Transport, pipeline};
use crate::config::{ClientSettings, Config};
use crate::error::{ApiError, Error, Result};

/// Linear GraphQL API client
pub struct LinearClient {
    gql: GraphQlClient,
}

impl LinearClient {
    /// Create a client over the standard transport pipeline.
    pub fn new(config: &Config, cancel: CancelToken) -> Result<Self> {
        let transport = pipeline(&config.api_key, &config.settings)?;
        Ok(Self::with_transport(
            Box::new(transport),
            &config.settings,
            cancel,
        ))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(
        transport: Box<dyn Transport>,
        settings: &ClientSettings,
        cancel: CancelToken,
    ) -> Self {
        Self {
            gql: GraphQlClient::new(
                transport,
                settings.endpoint.clone(),
                settings.timeout,
                cancel,
            ),
        }
    }

    fn directory_page_size() -> usize {
        effective_page_size(0, DIRECTORY_PAGE_SIZE)
    }
}

#[async_trait]
impl ViewerApi for LinearClient {
    async fn viewer(&self) -> Result<User> {
        let data: ViewerData = self
            .gql
            .query("get viewer", queries::VIEWER, json!({}))
            .await?;
        Ok(data.viewer.into())
    }

    async fn organisation(&self) -> Result<Organisation> {
        let data: OrganizationData = self
            .gql
            .query("get organisation", queries::ORGANIZATION, json!({}))
            .await?;
        Ok(data.organization.into())
    }
}

#[async_trait]
impl ListingApi for LinearClient {
    async fn list_users(&self) -> Result<Page<User>> {
        let first = Self::directory_page_size();
        let data: UsersData = self
            .gql
            .query("list users", queries::USERS, json!({ "first": first }))
            .await?;
        Ok(Page::new(map_nodes(data.users), first))
    }

    async fn list_teams(&self) -> Result<Page<Team>> {
        let first = Self::directory_page_size();
        let data: TeamsData = self
            .gql
            .query("list teams", queries::TEAMS, json!({ "first": first }))
            .await?;
        Ok(Page::new(map_nodes(data.teams), first))
    }

    async fn list_labels(&self, team_id: Option<&str>) -> Result<Page<Label>> {
        let first = Self::directory_page_size();
        let data: IssueLabelsData = self
            .gql
            .query("list labels", queries::ISSUE_LABELS, json!({ "first": first }))
            .await?;
        let fetched = data.issue_labels.nodes.len();
        let labels = filter_by_team(map_nodes(data.issue_labels), team_id);
        Ok(Page::filtered(labels, fetched, first))
    }

    async fn list_workflow_states(&self, team_id: Option<&str>) -> Result<Page<WorkflowState>> {
        let first = Self::directory_page_size();
        let data: WorkflowStatesData = self
            .gql
            .query(
                "list workflow states",
                queries::WORKFLOW_STATES,
                json!({ "first": first }),
            )
            .await?;
        let fetched = data.workflow_states.nodes.len();
        let states = filter_by_team(map_nodes(data.workflow_states), team_id);
        Ok(Page::filtered(states, fetched, first))
    }

    async fn list_issues(&self, opts: &IssueListOptions) -> Result<Page<Issue>> {
        let first = opts.page_size();
        let data: IssuesData = self
            .gql
            .query("list issues", queries::ISSUES, json!({ "first": first }))
            .await?;
        let fetched = data.issues.nodes.len();
        let issues = filter_issues(map_nodes(data.issues), opts);
        if opts.has_filters() {
            debug!("Filters kept {} of {} issues", issues.len(), fetched);
        }
        Ok(Page::filtered(issues, fetched, first))
    }

    async fn search_issues(&self, query: &str, opts: &IssueListOptions) -> Result<Page<Issue>> {
        let first = opts.page_size();
        let variables = json!({
            "first": first,
            "filter": { "title": { "containsIgnoreCase": query } },
        });
        let data: IssuesData = self
            .gql
            .query("search issues", queries::SEARCH_ISSUES, variables)
            .await?;
        let fetched = data.issues.nodes.len();
        let issues = filter_issues(map_nodes(data.issues), opts);
        Ok(Page::filtered(issues, fetched, first))
    }

    async fn list_projects(&self, opts: &ProjectListOptions) -> Result<Page<Project>> {
        let first = opts.page_size();
        let data: ProjectsData = self
            .gql
            .query("list projects", queries::PROJECTS, json!({ "first": first }))
            .await?;
        let fetched = data.projects.nodes.len();
        let projects = filter_projects(map_nodes(data.projects), opts);
        Ok(Page::filtered(projects, fetched, first))
    }

    async fn list_initiatives(&self) -> Result<Page<Initiative>> {
        let first = effective_page_size(0, DEFAULT_PAGE_SIZE);
        let data: InitiativesData = self
            .gql
            .query(
                "list initiatives",
                queries::INITIATIVES,
                json!({ "first": first }),
            )
            .await?;
        Ok(Page::new(map_nodes(data.initiatives), first))
    }

    async fn list_cycles(&self, team_id: Option<&str>) -> Result<Page<Cycle>> {
        let first = effective_page_size(0, DEFAULT_PAGE_SIZE);
        let data: CyclesData = self
            .gql
            .query("list cycles", queries::CYCLES, json!({ "first": first }))
            .await?;
        let fetched = data.cycles.nodes.len();
        let cycles = filter_by_team(map_nodes(data.cycles), team_id);
        Ok(Page::filtered(cycles, fetched, first))
    }
}

#[async_trait]
impl DetailApi for LinearClient {
    async fn get_team(&self, id: &str) -> Result<Team> {
        let data: TeamData = self
            .gql
            .query("get team", queries::TEAM, json!({ "id": id }))
            .await?;
        Ok(data.team.into())
    }

    async fn get_issue(&self, id: &str) -> Result<Issue> {
        let data: IssueData = self
            .gql
            .query("get issue", queries::ISSUE, json!({ "id": id }))
            .await?;
        Ok(data.issue.into())
    }

    async fn get_project(&self, id: &str) -> Result<Project> {
        let data: ProjectData = self
            .gql
            .query("get project", queries::PROJECT, json!({ "id": id }))
            .await?;
        Ok(data.project.into())
    }

    async fn get_initiative(&self, id: &str) -> Result<Initiative> {
        let data: InitiativeData = self
            .gql
            .query("get initiative", queries::INITIATIVE, json!({ "id": id }))
            .await?;
        Ok(data.initiative.into())
    }

    async fn get_cycle(&self, id: &str) -> Result<Cycle> {
        let data: CycleData = self
            .gql
            .query("get cycle", queries::CYCLE, json!({ "id": id }))
            .await?;
        Ok(data.cycle.into())
    }

    async fn get_active_cycle(&self, team_id: &str) -> Result<Cycle> {
        let data: TeamActiveCycleData = self
            .gql
            .query(
                "get active cycle",
                queries::TEAM_ACTIVE_CYCLE,
                json!({ "id": team_id }),
            )
            .await?;

        let team = data.team.ok_or_else(|| Error::Query {
            operation: "get active cycle",
            source: ApiError::NotFound(format!("team {}", team_id)),
        })?;

        match team.active_cycle {
            Some(cycle) => Ok(cycle.into()),
            None => Err(Error::NoActiveCycle { team_id: team.id }),
        }
    }
}
