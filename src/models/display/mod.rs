//! Table rows and detail fields for each domain entity
//!
//! Each entity gets a `Tabled` row struct with the fixed column set its list
//! command shows, and a `Describe` impl listing the fields its view command
//! shows. Missing relations render as "-".

use tabled::Tabled;

use crate::output::detail::DetailField;

mod auth;
mod cycle;
mod issue;
mod project;
mod team;
mod user;
mod workflow;

pub use auth::AuthStatus;

/// An entity that renders as one row of a list table.
pub trait TableRow {
    type Row: Tabled;

    fn to_row(&self) -> Self::Row;
}

/// An entity that renders as labelled fields in a view command.
pub trait Describe {
    fn detail_fields(&self) -> Vec<DetailField>;
}

/// Display name of an optional relation, or "-".
fn name_or_dash<T>(value: Option<&T>, name: impl Fn(&T) -> &str) -> String {
    crate::output::formatters::or_dash(value.map(name))
}

/// "Yes"/"No" for table cells.
fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}
