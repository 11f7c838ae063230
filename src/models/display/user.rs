//! User display model

use serde::Serialize;
use tabled::Tabled;

use super::{Describe, TableRow, yes_no};
use crate::client::models::User;
use crate::output::detail::DetailField;

/// User row for `user list`.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UserRow {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ACTIVE")]
    pub active: String,

    /// Blank for regular members so admins stand out
    #[tabled(rename = "ADMIN")]
    pub admin: String,
}

impl TableRow for User {
    type Row = UserRow;

    fn to_row(&self) -> UserRow {
        UserRow {
            name: self.name.clone(),
            email: self.email.clone(),
            active: yes_no(self.active),
            admin: if self.admin { "Yes".to_string() } else { String::new() },
        }
    }
}

impl Describe for User {
    fn detail_fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::new("ID", &self.id),
            DetailField::new("Name", &self.name),
            DetailField::new("Email", &self.email),
            DetailField::new("Display Name", &self.display_name),
            DetailField::new("Active", self.active.to_string()),
            DetailField::new("Admin", self.admin.to_string()),
        ]
    }
}
