//! Reusable formatting utilities for CLI output
//!
//! Small conversions shared by the display models: priorities, ratios,
//! dates, and placeholders for missing values.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Placeholder for a missing value in tables and detail views.
pub const DASH: &str = "-";

/// Human-readable Linear priority.
pub fn priority_label(priority: u8) -> String {
    match priority {
        0 => "No priority".to_string(),
        1 => "Urgent".to_string(),
        2 => "High".to_string(),
        3 => "Medium".to_string(),
        4 => "Low".to_string(),
        other => format!("Priority {}", other),
    }
}

/// Format a 0..1 ratio as a whole percentage.
///
/// # Example output
/// `0.456` -> `46%`
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Shorten `s` to at most `max_len` characters, ending in "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// The value, or "-" when absent or blank.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => DASH.to_string(),
    }
}

/// `YYYY-MM-DD`, or "-".
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| DASH.to_string())
}

/// Timestamp in the local timezone, minute precision.
///
/// # Example output
/// `2025-01-15 14:30`
pub fn format_datetime(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Calendar date of a timestamp in the local timezone.
pub fn format_day(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d").to_string()
}
