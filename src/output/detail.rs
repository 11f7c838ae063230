//! Labelled field output for single-entity views

/// One `Label: value` line in a detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Render fields with values aligned after the longest label.
///
/// Fields with an empty value are skipped.
pub fn format_detail(fields: &[DetailField]) -> String {
    let width = fields
        .iter()
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    fields
        .iter()
        .filter(|f| !f.value.is_empty())
        .map(|f| {
            let padding = " ".repeat(width - f.label.chars().count());
            format!("{}:{}  {}", f.label, padding, f.value)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
