//! Section status banners
//!
//! Every section body may start with one banner line of the form
//! `**Status:** <emoji> <label>` plus an optional completion suffix,
//! separated from the body by a blank line. Refresh strips any existing
//! banner and prepends a freshly rendered one, so the banner never
//! accumulates.

use waypoint_domain::{CompletionStat, SectionStatus};

/// Remove one leading banner line and its trailing blank line, if present
#[must_use]
pub fn strip_banner(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("**Status:**") else {
        return content;
    };
    match rest.find('\n') {
        None => "",
        Some(idx) => {
            let after_line = &rest[idx + 1..];
            after_line.strip_prefix('\n').unwrap_or(after_line)
        }
    }
}

/// Render a banner line for a status and optional completion stat
#[must_use]
pub fn render_banner(status: SectionStatus, stat: Option<&CompletionStat>) -> String {
    let label = match status {
        SectionStatus::Implemented => "✅ Implemented",
        SectionStatus::InProgress => "🚧 In Progress",
        SectionStatus::Planned => "📋 Planned",
    };
    match stat {
        Some(stat) => format!(
            "**Status:** {label} ({}% complete - {}/{} tickets)",
            stat.percent, stat.done, stat.total
        ),
        None => format!("**Status:** {label}"),
    }
}

/// Strip any existing banner and prepend a fresh one
///
/// The result always carries exactly one banner, at the start, followed
/// by one blank line and then the body.
#[must_use]
pub fn apply_banner(
    content: &str,
    status: SectionStatus,
    stat: Option<&CompletionStat>,
) -> String {
    format!("{}\n\n{}", render_banner(status, stat), strip_banner(content))
}
