//! JSON output formatting

use crate::output::formatter::StatusReport;

pub fn format_json(report: &StatusReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
