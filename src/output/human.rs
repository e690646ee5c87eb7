//! Human-readable output formatting

use crate::output::formatter::StatusReport;

/// Inner width of the boxed section header
const HEADER_WIDTH: usize = 38;

pub fn format_human(report: &StatusReport) -> String {
    let user = report.user.as_deref().unwrap_or("(none)");
    let progress = if report.completed {
        format!("all {} levels completed", report.total_levels)
    } else {
        format!("{}/{}", report.level, report.total_levels)
    };

    format!(
        "Wargame Status\n\
         --------------\n\
         User:      {}\n\
         Level:     {}\n\
         State dir: {}",
        user, progress, report.state_dir
    )
}

/// Three-line box framing `title`
pub fn section_header(title: &str) -> Vec<String> {
    let padding = HEADER_WIDTH.saturating_sub(title.chars().count() + 1);
    vec![
        format!("┌{}┐", "─".repeat(HEADER_WIDTH)),
        format!("│ {}{}│", title, " ".repeat(padding)),
        format!("└{}┘", "─".repeat(HEADER_WIDTH)),
    ]
}

/// Lines shown once every level is cleared
pub fn completion_banner(total_levels: u32) -> Vec<String> {
    let rule = "━".repeat(48);
    vec![
        rule.clone(),
        format!("  🎉 Congratulations! You completed all {} levels! 🎉", total_levels),
        rule,
    ]
}
