//! Output formatting for CLI results

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::{Describe, TableRow};

pub mod detail;
pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Lists render one table row per entity; JSON carries the entities themselves.
impl<T: Serialize + TableRow> Formattable for [T] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => {
                let rows: Vec<T::Row> = self.iter().map(TableRow::to_row).collect();
                Ok(table::format_table(&rows))
            }
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// A single entity shown as labelled fields.
pub struct Detail<'a, T>(pub &'a T);

impl<T: Serialize + Describe> Formattable for Detail<'_, T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(detail::format_detail(&self.0.detail_fields())),
            OutputFormat::Json => Ok(json::format_json(self.0)?),
        }
    }
}
