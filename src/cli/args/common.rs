//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry, aligned fields for single items (default)
    #[default]
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}
