//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Printed in place of a table with no rows.
pub const EMPTY_TABLE: &str = "No results found.";

/// Render rows as a rounded table with centred headers.
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
