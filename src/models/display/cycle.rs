//! Cycle display model

use serde::Serialize;
use tabled::Tabled;

use super::{Describe, TableRow};
use crate::client::models::Cycle;
use crate::output::detail::DetailField;
use crate::output::formatters::{format_day, format_percentage};

/// Cycle row for `cycle list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CycleRow {
    #[tabled(rename = "NUMBER")]
    pub number: u32,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PROGRESS")]
    pub progress: String,

    /// Team key
    #[tabled(rename = "TEAM")]
    pub team: String,
}

impl TableRow for Cycle {
    type Row = CycleRow;

    fn to_row(&self) -> CycleRow {
        CycleRow {
            number: self.number,
            name: self.name.clone().unwrap_or_default(),
            progress: format_percentage(self.progress),
            team: self.team.key.clone(),
        }
    }
}

impl Describe for Cycle {
    fn detail_fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::new("ID", &self.id),
            DetailField::new("Name", self.label()),
            DetailField::new("Number", self.number.to_string()),
            DetailField::new("Progress", format_percentage(self.progress)),
            DetailField::new("Team", &self.team.name),
            DetailField::new("Starts", format_day(self.starts_at)),
            DetailField::new("Ends", format_day(self.ends_at)),
            DetailField::new("Description", self.description.clone().unwrap_or_default()),
        ]
    }
}
