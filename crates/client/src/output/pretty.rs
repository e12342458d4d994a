//! Pretty-printed JSON output formatting.

/// Format a value as indented JSON. Responses carry no local schema, so
/// pretty output is indented JSON rather than a rendered table.
pub fn format_pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
