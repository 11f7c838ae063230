//! Mock Linear API client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! handlers without making real API calls. Filters and page sizes behave the
//! same way as in [`LinearClient`](super::LinearClient).

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{DetailApi, ListingApi, ViewerApi};
use super::filters::{filter_by_team, filter_issues, filter_projects};
use super::models::{
    Cycle, Initiative, Issue, Label, Organisation, Project, Team, User, WorkflowState,
};
use super::pagination::{
    DEFAULT_PAGE_SIZE, DIRECTORY_PAGE_SIZE, IssueListOptions, Page, ProjectListOptions,
    effective_page_size,
};
use crate::error::{ApiError, Error, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockLinearClient::new()
///     .with_teams(vec![team("team-1", "ENG")])
///     .await;
///
/// let page = mock.list_teams().await?;
/// assert_eq!(page.items.len(), 1);
/// ```
#[derive(Default)]
pub struct MockLinearClient {
    viewer: Arc<Mutex<Option<User>>>,
    organisation: Arc<Mutex<Option<Organisation>>>,
    users: Arc<Mutex<Vec<User>>>,
    teams: Arc<Mutex<Vec<Team>>>,
    labels: Arc<Mutex<Vec<Label>>>,
    states: Arc<Mutex<Vec<WorkflowState>>>,
    issues: Arc<Mutex<Vec<Issue>>>,
    projects: Arc<Mutex<Vec<Project>>>,
    initiatives: Arc<Mutex<Vec<Initiative>>>,
    cycles: Arc<Mutex<Vec<Cycle>>>,
    /// Active cycle per team id
    active_cycles: Arc<Mutex<Vec<(String, Cycle)>>>,
    /// Error to return (if any); consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// A captured API call for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// Operation name (e.g. "list issues")
    pub operation: &'static str,
    /// Id argument, or team filter for list calls
    pub id: Option<String>,
    /// Page size the call would have sent
    pub first: Option<usize>,
    /// Search text
    pub query: Option<String>,
}

impl CapturedRequest {
    fn new(operation: &'static str) -> Self {
        Self {
            operation,
            id: None,
            first: None,
            query: None,
        }
    }

    fn id(mut self, id: Option<&str>) -> Self {
        self.id = id.map(str::to_string);
        self
    }

    fn first(mut self, first: usize) -> Self {
        self.first = Some(first);
        self
    }
}

impl MockLinearClient {
    /// Create a new mock client with empty responses.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_viewer(self, user: User) -> Self {
        *self.viewer.lock().await = Some(user);
        self
    }

    pub async fn with_organisation(self, org: Organisation) -> Self {
        *self.organisation.lock().await = Some(org);
        self
    }

    pub async fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().await = users;
        self
    }

    pub async fn with_teams(self, teams: Vec<Team>) -> Self {
        *self.teams.lock().await = teams;
        self
    }

    pub async fn with_labels(self, labels: Vec<Label>) -> Self {
        *self.labels.lock().await = labels;
        self
    }

    pub async fn with_states(self, states: Vec<WorkflowState>) -> Self {
        *self.states.lock().await = states;
        self
    }

    pub async fn with_issues(self, issues: Vec<Issue>) -> Self {
        *self.issues.lock().await = issues;
        self
    }

    pub async fn with_projects(self, projects: Vec<Project>) -> Self {
        *self.projects.lock().await = projects;
        self
    }

    pub async fn with_initiatives(self, initiatives: Vec<Initiative>) -> Self {
        *self.initiatives.lock().await = initiatives;
        self
    }

    /// Cycles for `list_cycles` and `get_cycle`.
    pub async fn with_cycles(self, cycles: Vec<Cycle>) -> Self {
        *self.cycles.lock().await = cycles;
        self
    }

    /// Make `cycle` the active cycle of `team_id`. The team also becomes known
    /// to `get_active_cycle`.
    pub async fn with_active_cycle(self, team_id: &str, cycle: Cycle) -> Self {
        self.active_cycles
            .lock()
            .await
            .push((team_id.to_string(), cycle));
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Record the call and return the pending error, if any.
    async fn begin(&self, request: CapturedRequest) -> Result<()> {
        let operation = request.operation;
        self.captured_requests.lock().await.push(request);

        match self.error.lock().await.take() {
            Some(source) => Err(Error::Query { operation, source }),
            None => Ok(()),
        }
    }

    fn not_found(operation: &'static str, what: &str, id: &str) -> Error {
        Error::Query {
            operation,
            source: ApiError::GraphQl(format!("Entity not found: {} {}", what, id)),
        }
    }
}

fn directory_page<T>(items: Vec<T>, fetched: usize) -> Page<T> {
    Page::filtered(items, fetched, effective_page_size(0, DIRECTORY_PAGE_SIZE))
}

fn truncate<T>(mut items: Vec<T>, first: usize) -> Vec<T> {
    items.truncate(first);
    items
}

#[async_trait]
impl ViewerApi for MockLinearClient {
    async fn viewer(&self) -> Result<User> {
        self.begin(CapturedRequest::new("get viewer")).await?;
        self.viewer
            .lock()
            .await
            .clone()
            .ok_or(Error::Query {
                operation: "get viewer",
                source: ApiError::Unauthorized,
            })
    }

    async fn organisation(&self) -> Result<Organisation> {
        self.begin(CapturedRequest::new("get organisation")).await?;
        self.organisation
            .lock()
            .await
            .clone()
            .ok_or(Error::Query {
                operation: "get organisation",
                source: ApiError::Unauthorized,
            })
    }
}

#[async_trait]
impl ListingApi for MockLinearClient {
    async fn list_users(&self) -> Result<Page<User>> {
        self.begin(CapturedRequest::new("list users").first(DIRECTORY_PAGE_SIZE))
            .await?;
        let users = self.users.lock().await.clone();
        let fetched = users.len();
        Ok(directory_page(users, fetched))
    }

    async fn list_teams(&self) -> Result<Page<Team>> {
        self.begin(CapturedRequest::new("list teams").first(DIRECTORY_PAGE_SIZE))
            .await?;
        let teams = self.teams.lock().await.clone();
        let fetched = teams.len();
        Ok(directory_page(teams, fetched))
    }

    async fn list_labels(&self, team_id: Option<&str>) -> Result<Page<Label>> {
        self.begin(
            CapturedRequest::new("list labels")
                .id(team_id)
                .first(DIRECTORY_PAGE_SIZE),
        )
        .await?;
        let labels = self.labels.lock().await.clone();
        let fetched = labels.len();
        Ok(directory_page(filter_by_team(labels, team_id), fetched))
    }

    async fn list_workflow_states(&self, team_id: Option<&str>) -> Result<Page<WorkflowState>> {
        self.begin(
            CapturedRequest::new("list workflow states")
                .id(team_id)
                .first(DIRECTORY_PAGE_SIZE),
        )
        .await?;
        let states = self.states.lock().await.clone();
        let fetched = states.len();
        Ok(directory_page(filter_by_team(states, team_id), fetched))
    }

    async fn list_issues(&self, opts: &IssueListOptions) -> Result<Page<Issue>> {
        let first = opts.page_size();
        self.begin(
            CapturedRequest::new("list issues")
                .id(opts.team_id.as_deref())
                .first(first),
        )
        .await?;
        let issues = truncate(self.issues.lock().await.clone(), first);
        let fetched = issues.len();
        Ok(Page::filtered(filter_issues(issues, opts), fetched, first))
    }

    async fn search_issues(&self, query: &str, opts: &IssueListOptions) -> Result<Page<Issue>> {
        let first = opts.page_size();
        let mut request = CapturedRequest::new("search issues")
            .id(opts.team_id.as_deref())
            .first(first);
        request.query = Some(query.to_string());
        self.begin(request).await?;

        let needle = query.to_lowercase();
        let matches: Vec<Issue> = self
            .issues
            .lock()
            .await
            .iter()
            .filter(|issue| issue.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let matches = truncate(matches, first);
        let fetched = matches.len();
        Ok(Page::filtered(filter_issues(matches, opts), fetched, first))
    }

    async fn list_projects(&self, opts: &ProjectListOptions) -> Result<Page<Project>> {
        let first = opts.page_size();
        self.begin(
            CapturedRequest::new("list projects")
                .id(opts.team_id.as_deref())
                .first(first),
        )
        .await?;
        let projects = truncate(self.projects.lock().await.clone(), first);
        let fetched = projects.len();
        Ok(Page::filtered(filter_projects(projects, opts), fetched, first))
    }

    async fn list_initiatives(&self) -> Result<Page<Initiative>> {
        self.begin(CapturedRequest::new("list initiatives").first(DEFAULT_PAGE_SIZE))
            .await?;
        let initiatives = truncate(self.initiatives.lock().await.clone(), DEFAULT_PAGE_SIZE);
        Ok(Page::new(initiatives, DEFAULT_PAGE_SIZE))
    }

    async fn list_cycles(&self, team_id: Option<&str>) -> Result<Page<Cycle>> {
        self.begin(
            CapturedRequest::new("list cycles")
                .id(team_id)
                .first(DEFAULT_PAGE_SIZE),
        )
        .await?;
        let cycles = truncate(self.cycles.lock().await.clone(), DEFAULT_PAGE_SIZE);
        let fetched = cycles.len();
        Ok(Page::filtered(
            filter_by_team(cycles, team_id),
            fetched,
            DEFAULT_PAGE_SIZE,
        ))
    }
}

#[async_trait]
impl DetailApi for MockLinearClient {
    async fn get_team(&self, id: &str) -> Result<Team> {
        self.begin(CapturedRequest::new("get team").id(Some(id))).await?;
        self.teams
            .lock()
            .await
            .iter()
            .find(|t| t.id == id || t.key == id)
            .cloned()
            .ok_or_else(|| Self::not_found("get team", "Team", id))
    }

    async fn get_issue(&self, id: &str) -> Result<Issue> {
        self.begin(CapturedRequest::new("get issue").id(Some(id))).await?;
        self.issues
            .lock()
            .await
            .iter()
            .find(|i| i.id == id || i.identifier == id)
            .cloned()
            .ok_or_else(|| Self::not_found("get issue", "Issue", id))
    }

    async fn get_project(&self, id: &str) -> Result<Project> {
        self.begin(CapturedRequest::new("get project").id(Some(id))).await?;
        self.projects
            .lock()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("get project", "Project", id))
    }

    async fn get_initiative(&self, id: &str) -> Result<Initiative> {
        self.begin(CapturedRequest::new("get initiative").id(Some(id)))
            .await?;
        self.initiatives
            .lock()
            .await
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("get initiative", "Initiative", id))
    }

    async fn get_cycle(&self, id: &str) -> Result<Cycle> {
        self.begin(CapturedRequest::new("get cycle").id(Some(id))).await?;
        self.cycles
            .lock()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("get cycle", "Cycle", id))
    }

    async fn get_active_cycle(&self, team_id: &str) -> Result<Cycle> {
        self.begin(CapturedRequest::new("get active cycle").id(Some(team_id)))
            .await?;

        if let Some((_, cycle)) = self
            .active_cycles
            .lock()
            .await
            .iter()
            .find(|(team, _)| team == team_id)
        {
            return Ok(cycle.clone());
        }

        let team_known = self.teams.lock().await.iter().any(|t| t.id == team_id);
        if team_known {
            Err(Error::NoActiveCycle {
                team_id: team_id.to_string(),
            })
        } else {
            Err(Error::Query {
                operation: "get active cycle",
                source: ApiError::NotFound(format!("team {}", team_id)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{CycleBuilder, IssueBuilder, team, user};

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockLinearClient::new();

        assert!(mock.list_teams().await.unwrap().is_empty());
        assert!(
            mock.list_issues(&IssueListOptions::new())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_mock_client_with_error_consumed_once() {
        let mock = MockLinearClient::new()
            .with_teams(vec![team("team-1", "ENG")])
            .await
            .with_error(ApiError::Timeout)
            .await;

        let err = mock.list_teams().await.unwrap_err();
        assert!(err.to_string().starts_with("list teams: "));

        assert_eq!(mock.list_teams().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_applies_issue_filters() {
        let mock = MockLinearClient::new()
            .with_issues(vec![
                IssueBuilder::new("a").assignee(user("u1")).build(),
                IssueBuilder::new("b").build(),
            ])
            .await;

        let page = mock
            .list_issues(&IssueListOptions::new().assignee("u1"))
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_mock_client_search_captures_query() {
        let mock = MockLinearClient::new()
            .with_issues(vec![
                IssueBuilder::new("a").title("Login CRASH").build(),
                IssueBuilder::new("b").title("Other").build(),
            ])
            .await;

        let page = mock
            .search_issues("crash", &IssueListOptions::new().first(5))
            .await
            .unwrap();
        assert_eq!(page.len(), 1);

        let captured = mock.captured_requests().await;
        assert_eq!(captured[0].operation, "search issues");
        assert_eq!(captured[0].query.as_deref(), Some("crash"));
        assert_eq!(captured[0].first, Some(5));
    }

    #[tokio::test]
    async fn test_mock_active_cycle_outcomes() {
        let mock = MockLinearClient::new()
            .with_teams(vec![team("team-1", "ENG"), team("team-2", "DES")])
            .await
            .with_active_cycle("team-1", CycleBuilder::new("c1").build())
            .await;

        assert_eq!(mock.get_active_cycle("team-1").await.unwrap().id, "c1");
        assert!(
            mock.get_active_cycle("team-2")
                .await
                .unwrap_err()
                .is_no_active_cycle()
        );

        let err = mock.get_active_cycle("team-9").await.unwrap_err();
        assert!(matches!(err.api_error(), Some(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_mock_get_issue_by_identifier() {
        let mock = MockLinearClient::new()
            .with_issues(vec![IssueBuilder::new("a").identifier("ENG-7").build()])
            .await;

        assert_eq!(mock.get_issue("ENG-7").await.unwrap().id, "a");
        assert!(mock.get_issue("ENG-8").await.is_err());
    }
}
