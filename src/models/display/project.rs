//! Project and initiative display models

use serde::Serialize;
use tabled::Tabled;

use super::{Describe, TableRow, name_or_dash};
use crate::client::models::{Initiative, Project, User};
use crate::output::detail::DetailField;
use crate::output::formatters::{format_date, format_percentage, truncate};

fn user_name(user: &User) -> &str {
    &user.name
}

/// Project row for `project list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProjectRow {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "STATE")]
    pub state: String,

    #[tabled(rename = "PROGRESS")]
    pub progress: String,

    #[tabled(rename = "LEAD")]
    pub lead: String,

    /// Comma-separated team keys
    #[tabled(rename = "TEAMS")]
    pub teams: String,
}

impl Project {
    fn team_keys(&self) -> String {
        self.teams
            .iter()
            .map(|t| t.key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl TableRow for Project {
    type Row = ProjectRow;

    fn to_row(&self) -> ProjectRow {
        ProjectRow {
            name: truncate(&self.name, 40),
            state: self.state.clone(),
            progress: format_percentage(self.progress),
            lead: name_or_dash(self.lead.as_ref(), user_name),
            teams: self.team_keys(),
        }
    }
}

impl Describe for Project {
    fn detail_fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::new("ID", &self.id),
            DetailField::new("Name", &self.name),
            DetailField::new("State", &self.state),
            DetailField::new("Progress", format_percentage(self.progress)),
            DetailField::new("Lead", name_or_dash(self.lead.as_ref(), user_name)),
            DetailField::new("Teams", self.team_keys()),
            DetailField::new("Start Date", format_date(self.start_date)),
            DetailField::new("Target Date", format_date(self.target_date)),
            DetailField::new("Description", self.description.clone().unwrap_or_default()),
            DetailField::new("URL", &self.url),
        ]
    }
}

/// Initiative row for `initiative list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct InitiativeRow {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "OWNER")]
    pub owner: String,

    #[tabled(rename = "TARGET DATE")]
    pub target_date: String,
}

impl TableRow for Initiative {
    type Row = InitiativeRow;

    fn to_row(&self) -> InitiativeRow {
        InitiativeRow {
            name: truncate(&self.name, 40),
            owner: name_or_dash(self.owner.as_ref(), user_name),
            target_date: format_date(self.target_date),
        }
    }
}

impl Describe for Initiative {
    fn detail_fields(&self) -> Vec<DetailField> {
        let projects: Vec<&str> = self.projects.iter().map(|p| p.name.as_str()).collect();

        vec![
            DetailField::new("ID", &self.id),
            DetailField::new("Name", &self.name),
            DetailField::new("Owner", name_or_dash(self.owner.as_ref(), user_name)),
            DetailField::new("Target Date", format_date(self.target_date)),
            DetailField::new("Description", self.description.clone().unwrap_or_default()),
            DetailField::new("Projects", projects.join(", ")),
        ]
    }
}
