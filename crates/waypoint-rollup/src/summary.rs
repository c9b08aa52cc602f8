//! Whole-pack summaries
//!
//! The moderation board shows one headline number per ticket pack; this is
//! the reduction behind it. Same rounding rule as the per-group stats.

use serde::{Deserialize, Serialize};
use waypoint_domain::{CompletionStat, WorkItem, WorkItemStatus};

/// Status breakdown and headline completion for one ticket pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackSummary {
    /// All items in the pack
    pub total: usize,
    /// Completed items
    pub done: usize,
    /// Items actively being worked
    pub in_progress: usize,
    /// Items waiting on something external
    pub blocked: usize,
    /// Items not picked up yet
    pub not_started: usize,
    /// `round(done / total * 100)`, 0 for an empty pack
    pub percent_complete: u8,
}

/// Summarize a ticket pack's items
#[must_use]
pub fn pack_summary(items: &[WorkItem]) -> PackSummary {
    let mut summary = PackSummary {
        total: items.len(),
        ..PackSummary::default()
    };

    for item in items {
        match item.status {
            WorkItemStatus::Done => summary.done += 1,
            WorkItemStatus::InProgress => summary.in_progress += 1,
            WorkItemStatus::Blocked => summary.blocked += 1,
            WorkItemStatus::NotStarted => summary.not_started += 1,
        }
    }

    summary.percent_complete = CompletionStat::of(summary.done, summary.total).percent;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_domain::TicketPackId;

    fn item(status: WorkItemStatus) -> WorkItem {
        WorkItem::new(TicketPackId::new(), "T1.1").with_status(status)
    }

    #[test]
    fn counts_every_status_bucket() {
        let items = vec![
            item(WorkItemStatus::Done),
            item(WorkItemStatus::Done),
            item(WorkItemStatus::InProgress),
            item(WorkItemStatus::Blocked),
            item(WorkItemStatus::NotStarted),
        ];
        let summary = pack_summary(&items);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.done, 2);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.blocked, 1);
        assert_eq!(summary.not_started, 1);
        assert_eq!(summary.percent_complete, 40);
    }

    #[test]
    fn empty_pack_is_all_zero() {
        let summary = pack_summary(&[]);
        assert_eq!(summary, PackSummary::default());
    }
}
