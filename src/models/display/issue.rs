//! Issue display model

use serde::Serialize;
use tabled::Tabled;

use super::{Describe, TableRow, name_or_dash};
use crate::client::models::{Issue, User, WorkflowState};
use crate::output::detail::DetailField;
use crate::output::formatters::{format_date, format_datetime, priority_label, truncate};

fn user_name(user: &User) -> &str {
    &user.name
}

fn state_name(state: &WorkflowState) -> &str {
    &state.name
}

/// Issue row for `issue list` and `issue search`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct IssueRow {
    #[tabled(rename = "ID")]
    pub identifier: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "STATE")]
    pub state: String,

    #[tabled(rename = "ASSIGNEE")]
    pub assignee: String,

    #[tabled(rename = "PRIORITY")]
    pub priority: String,
}

impl TableRow for Issue {
    type Row = IssueRow;

    fn to_row(&self) -> IssueRow {
        IssueRow {
            identifier: self.identifier.clone(),
            title: truncate(&self.title, 50),
            state: name_or_dash(self.state.as_ref(), state_name),
            assignee: name_or_dash(self.assignee.as_ref(), user_name),
            priority: priority_label(self.priority),
        }
    }
}

impl Describe for Issue {
    fn detail_fields(&self) -> Vec<DetailField> {
        let labels: Vec<&str> = self.labels.iter().map(|l| l.name.as_str()).collect();
        let cycle = match &self.cycle {
            Some(cycle) => cycle
                .name
                .clone()
                .unwrap_or_else(|| format!("Cycle {}", cycle.number)),
            None => "-".to_string(),
        };

        vec![
            DetailField::new("Identifier", &self.identifier),
            DetailField::new("Title", &self.title),
            DetailField::new("State", name_or_dash(self.state.as_ref(), state_name)),
            DetailField::new("Priority", priority_label(self.priority)),
            DetailField::new("Assignee", name_or_dash(self.assignee.as_ref(), user_name)),
            DetailField::new("Creator", name_or_dash(self.creator.as_ref(), user_name)),
            DetailField::new("Team", &self.team.name),
            DetailField::new("Project", name_or_dash(self.project.as_ref(), |p| p.name.as_str())),
            DetailField::new("Cycle", cycle),
            DetailField::new("Labels", labels.join(", ")),
            DetailField::new("Estimate", self.estimate.map(|e| e.to_string()).unwrap_or_default()),
            DetailField::new("Due Date", format_date(self.due_date)),
            DetailField::new("Updated", format_datetime(self.updated_at)),
            DetailField::new("URL", &self.url),
            DetailField::new("Description", self.description.clone().unwrap_or_default()),
        ]
    }
}
