// crates/marquee-cli/src/output.rs
//
// Output formatting utilities for the Marquee CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Format a rating-scale number for display.
pub fn fmt_score(value: f64) -> String {
    format!("{:.3}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "Score")]
        score: String,
    }

    #[test]
    fn test_table_contains_headers_and_values() {
        let rows = vec![Row {
            id: "0000138".to_string(),
            score: fmt_score(7.25),
        }];
        let table = format_table(&rows);
        assert!(table.contains("ID"));
        assert!(table.contains("0000138"));
        assert!(table.contains("7.250"));
    }

    #[test]
    fn test_json_output() {
        let json = format_json(&vec!["a", "b"]);
        assert!(json.contains("\"a\""));
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
    }
}
