//! Label and workflow state display models

use serde::Serialize;
use tabled::Tabled;

use super::{TableRow, name_or_dash};
use crate::client::models::{Label, Team, WorkflowState};

fn team_name(team: &Team) -> &str {
    &team.name
}

/// Label row for `label list`. Workspace labels show "-" for team.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct LabelRow {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "COLOR")]
    pub color: String,

    #[tabled(rename = "TEAM")]
    pub team: String,
}

impl TableRow for Label {
    type Row = LabelRow;

    fn to_row(&self) -> LabelRow {
        LabelRow {
            name: self.name.clone(),
            color: self.color.clone(),
            team: name_or_dash(self.team.as_ref(), team_name),
        }
    }
}

/// Workflow state row for `state list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StateRow {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    pub state_type: String,

    #[tabled(rename = "TEAM")]
    pub team: String,
}

impl TableRow for WorkflowState {
    type Row = StateRow;

    fn to_row(&self) -> StateRow {
        StateRow {
            name: self.name.clone(),
            state_type: self.state_type.clone(),
            team: name_or_dash(self.team.as_ref(), team_name),
        }
    }
}
