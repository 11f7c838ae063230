//! GraphQL documents for every read operation
//!
//! Selection sets are shared through the field macros below so every query
//! that returns a given node asks for the same fields, and the raw shapes in
//! `schema.rs` only have to describe one selection per type.

macro_rules! user_fields {
    () => {
        "id name displayName email active admin avatarUrl"
    };
}

macro_rules! team_ref_fields {
    () => {
        "id key name"
    };
}

macro_rules! team_fields {
    () => {
        "id key name description private"
    };
}

macro_rules! state_fields {
    () => {
        "id name color type position"
    };
}

macro_rules! label_fields {
    () => {
        concat!("id name description color team { ", team_ref_fields!(), " }")
    };
}

macro_rules! issue_fields {
    () => {
        concat!(
            "id identifier title description priority estimate dueDate url createdAt updatedAt ",
            "team { ", team_ref_fields!(), " } ",
            "state { ", state_fields!(), " } ",
            "assignee { ", user_fields!(), " } ",
            "creator { ", user_fields!(), " } ",
            "project { id name state } ",
            "cycle { id name number } ",
            "labels { nodes { ", label_fields!(), " } }"
        )
    };
}

macro_rules! project_fields {
    () => {
        concat!(
            "id name description state progress startDate targetDate url createdAt updatedAt ",
            "lead { ", user_fields!(), " } ",
            "teams { nodes { ", team_ref_fields!(), " } }"
        )
    };
}

macro_rules! initiative_fields {
    () => {
        concat!(
            "id name description targetDate createdAt updatedAt ",
            "owner { ", user_fields!(), " } ",
            "projects { nodes { id name state } }"
        )
    };
}

macro_rules! cycle_fields {
    () => {
        concat!(
            "id name number startsAt endsAt progress description ",
            "team { ", team_ref_fields!(), " }"
        )
    };
}

pub const VIEWER: &str = concat!("query Viewer { viewer { ", user_fields!(), " } }");

pub const ORGANIZATION: &str =
    "query Organization { organization { id name urlKey logoUrl userCount } }";

pub const USERS: &str = concat!(
    "query Users($first: Int!) { users(first: $first) { nodes { ",
    user_fields!(),
    " } } }"
);

pub const TEAMS: &str = concat!(
    "query Teams($first: Int!) { teams(first: $first) { nodes { ",
    team_fields!(),
    " } } }"
);

pub const TEAM: &str = concat!(
    "query Team($id: String!) { team(id: $id) { ",
    team_fields!(),
    " } }"
);

pub const ISSUE_LABELS: &str = concat!(
    "query IssueLabels($first: Int!) { issueLabels(first: $first) { nodes { ",
    label_fields!(),
    " } } }"
);

pub const WORKFLOW_STATES: &str = concat!(
    "query WorkflowStates($first: Int!) { workflowStates(first: $first) { nodes { ",
    state_fields!(),
    " team { ",
    team_ref_fields!(),
    " } } } }"
);

pub const ISSUES: &str = concat!(
    "query Issues($first: Int!) { issues(first: $first) { nodes { ",
    issue_fields!(),
    " } } }"
);

/// Title search. The search text travels in `$filter`, never in the document.
pub const SEARCH_ISSUES: &str = concat!(
    "query SearchIssues($first: Int!, $filter: IssueFilter!) { ",
    "issues(first: $first, filter: $filter) { nodes { ",
    issue_fields!(),
    " } } }"
);

pub const ISSUE: &str = concat!(
    "query Issue($id: String!) { issue(id: $id) { ",
    issue_fields!(),
    " } }"
);

pub const PROJECTS: &str = concat!(
    "query Projects($first: Int!) { projects(first: $first) { nodes { ",
    project_fields!(),
    " } } }"
);

pub const PROJECT: &str = concat!(
    "query Project($id: String!) { project(id: $id) { ",
    project_fields!(),
    " } }"
);

pub const INITIATIVES: &str = concat!(
    "query Initiatives($first: Int!) { initiatives(first: $first) { nodes { ",
    initiative_fields!(),
    " } } }"
);

pub const INITIATIVE: &str = concat!(
    "query Initiative($id: String!) { initiative(id: $id) { ",
    initiative_fields!(),
    " } }"
);

pub const CYCLES: &str = concat!(
    "query Cycles($first: Int!) { cycles(first: $first) { nodes { ",
    cycle_fields!(),
    " } } }"
);

pub const CYCLE: &str = concat!(
    "query Cycle($id: String!) { cycle(id: $id) { ",
    cycle_fields!(),
    " } }"
);

pub const TEAM_ACTIVE_CYCLE: &str = concat!(
    "query TeamActiveCycle($id: String!) { team(id: $id) { id activeCycle { ",
    cycle_fields!(),
    " } } }"
);
