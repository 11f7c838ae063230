//! Team display model

use serde::Serialize;
use tabled::Tabled;

use super::{Describe, TableRow};
use crate::client::models::Team;
use crate::output::detail::DetailField;
use crate::output::formatters::truncate;

/// Team row for `team list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeamRow {
    #[tabled(rename = "KEY")]
    pub key: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl TableRow for Team {
    type Row = TeamRow;

    fn to_row(&self) -> TeamRow {
        TeamRow {
            key: self.key.clone(),
            name: self.name.clone(),
            description: truncate(self.description.as_deref().unwrap_or_default(), 50),
        }
    }
}

impl Describe for Team {
    fn detail_fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::new("ID", &self.id),
            DetailField::new("Name", &self.name),
            DetailField::new("Key", &self.key),
            DetailField::new("Description", self.description.clone().unwrap_or_default()),
            DetailField::new("Private", if self.private { "Yes" } else { "No" }),
        ]
    }
}
