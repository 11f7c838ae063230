//! Page sizes and list options
//!
//! Every list query fetches a single page. The effective page size travels
//! with the results in [`Page`] so callers can tell when the server probably
//! had more to give.

use serde::Serialize;

/// Page size for issue, project, initiative and cycle lists.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Page size for small directory-style lists (users, teams, labels, states).
pub const DIRECTORY_PAGE_SIZE: usize = 100;

/// Largest `first` Linear accepts on a connection.
pub const MAX_PAGE_SIZE: usize = 250;

/// Resolve a requested page size: 0 means `default`, anything else is
/// capped at [`MAX_PAGE_SIZE`].
pub fn effective_page_size(requested: usize, default: usize) -> usize {
    if requested == 0 {
        default.min(MAX_PAGE_SIZE)
    } else {
        requested.min(MAX_PAGE_SIZE)
    }
}

/// One page of results plus the page size that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Nodes the server returned, before client-side filtering
    pub fetched: usize,

    /// The `first` value sent with the query
    pub page_size: usize,
}

impl<T> Page<T> {
    /// A page whose items are exactly what the server returned.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        let fetched = items.len();
        Self {
            items,
            fetched,
            page_size,
        }
    }

    /// A page filtered down from `fetched` server nodes.
    pub fn filtered(items: Vec<T>, fetched: usize, page_size: usize) -> Self {
        Self {
            items,
            fetched,
            page_size,
        }
    }

    /// True when the server filled the page, so more results may exist.
    ///
    /// Counts nodes before client-side filtering. Advisory only.
    pub fn is_truncated(&self) -> bool {
        self.fetched >= self.page_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filters and page size for issue listing and search.
///
/// # Example
/// ```ignore
/// let opts = IssueListOptions::new()
///     .team("team-id")
///     .assignee("user-id")
///     .first(25);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueListOptions {
    /// Keep only issues owned by this team
    pub team_id: Option<String>,
    /// Keep only issues assigned to this user
    pub assignee_id: Option<String>,
    /// Keep only issues in this workflow state
    pub state_id: Option<String>,
    /// Keep only issues in this project
    pub project_id: Option<String>,
    /// Page size; 0 uses the default
    pub first: usize,
}

impl IssueListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, id: impl Into<String>) -> Self {
        self.team_id = Some(id.into());
        self
    }

    pub fn assignee(mut self, id: impl Into<String>) -> Self {
        self.assignee_id = Some(id.into());
        self
    }

    pub fn state(mut self, id: impl Into<String>) -> Self {
        self.state_id = Some(id.into());
        self
    }

    pub fn project(mut self, id: impl Into<String>) -> Self {
        self.project_id = Some(id.into());
        self
    }

    pub fn first(mut self, first: usize) -> Self {
        self.first = first;
        self
    }

    pub fn page_size(&self) -> usize {
        effective_page_size(self.first, DEFAULT_PAGE_SIZE)
    }

    /// Whether any client-side filter is set.
    pub fn has_filters(&self) -> bool {
        self.team_id.is_some()
            || self.assignee_id.is_some()
            || self.state_id.is_some()
            || self.project_id.is_some()
    }
}

/// Filters and page size for project listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectListOptions {
    /// Keep only projects shared with this team
    pub team_id: Option<String>,
    /// Keep only projects in exactly this state
    pub state: Option<String>,
    /// Page size; 0 uses the default
    pub first: usize,
}

impl ProjectListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, id: impl Into<String>) -> Self {
        self.team_id = Some(id.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn first(mut self, first: usize) -> Self {
        self.first = first;
        self
    }

    pub fn page_size(&self) -> usize {
        effective_page_size(self.first, DEFAULT_PAGE_SIZE)
    }
}
