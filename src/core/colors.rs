//! Colored status indicators for repositories, worktrees and summaries.
//!
//! # Indicator Scheme
//! - **Uncommitted**: `●N` in yellow
//! - **Unpushed**: `↑N` in blue
//! - **Untracked**: `?N` in cyan
//! - **Error**: `✕ error` in red bold, replacing every count
//! - **Clean**: `✓` in green
//!
//! Explorer entries only carry flags, so their indicators have no counts.

use crate::core::entry::RepositoryInfo;
use crate::core::registry::RepositoryRecord;
use crate::core::summary::SummaryData;
use colored::*;

fn indicator(symbol: &str, count: Option<usize>) -> String {
    match count {
        Some(count) => format!("{symbol}{count}"),
        None => symbol.to_string(),
    }
}

fn join_indicators(
    uncommitted: Option<Option<usize>>,
    unpushed: Option<Option<usize>>,
    untracked: Option<Option<usize>>,
) -> String {
    let parts: Vec<String> = [
        uncommitted.map(|count| indicator("●", count).yellow().to_string()),
        unpushed.map(|count| indicator("↑", count).blue().to_string()),
        untracked.map(|count| indicator("?", count).cyan().to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        "✓".green().to_string()
    } else {
        parts.join(" ")
    }
}

fn error_indicator() -> String {
    "✕ error".red().bold().to_string()
}

/// Indicators for a refreshed registry record.
pub fn record_indicators(record: &RepositoryRecord) -> String {
    if record.has_error {
        return error_indicator();
    }
    join_indicators(
        record.has_uncommitted.then_some(Some(record.uncommitted_count)),
        record.has_unpushed.then_some(Some(record.unpushed_count)),
        record.has_untracked.then_some(Some(record.untracked_count)),
    )
}

/// Indicators for an explorer entry; empty for non-repositories.
pub fn entry_indicators(info: &RepositoryInfo) -> String {
    if !info.is_git_repository() {
        return String::new();
    }
    if info.has_error() {
        return error_indicator();
    }
    join_indicators(
        info.has_uncommitted().then_some(None),
        info.has_unpushed().then_some(None),
        info.has_untracked().then_some(None),
    )
}

/// One-line summary, e.g. `3 uncommitted · 1 unpushed · 0 untracked · 0 errors`.
pub fn summary_line(summary: &SummaryData) -> String {
    let errors = format!("{} errors", summary.total_errors);
    format!(
        "{} {} {} {} {} {} {}",
        format!("{} uncommitted", summary.total_uncommitted).yellow(),
        "·".bright_black(),
        format!("{} unpushed", summary.total_unpushed).blue(),
        "·".bright_black(),
        format!("{} untracked", summary.total_untracked).cyan(),
        "·".bright_black(),
        if summary.total_errors > 0 {
            errors.red()
        } else {
            errors.white()
        }
    )
}
