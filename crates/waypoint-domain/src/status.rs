//! Lifecycle statuses for work items and roadmap sections

use serde::{Deserialize, Serialize};

/// Work item lifecycle status
///
/// Items are created by the intake process and moved between statuses by
/// humans on the moderation board; the refresh pipeline only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkItemStatus {
    /// Not picked up yet
    NotStarted,
    /// Actively being worked
    InProgress,
    /// Waiting on something external
    Blocked,
    /// Completed
    Done,
}

impl WorkItemStatus {
    /// Whether this item counts toward completion
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, WorkItemStatus::Done)
    }

    /// Wire label for this status
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkItemStatus::NotStarted => "not_started",
            WorkItemStatus::InProgress => "in_progress",
            WorkItemStatus::Blocked => "blocked",
            WorkItemStatus::Done => "done",
        }
    }
}

/// Roadmap section implementation status
///
/// Driven solely by re-running the status projector over ticket
/// completion: a section can move backward if completion regresses.
/// There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    /// No matching work has started
    Planned,
    /// Some matching work is done
    InProgress,
    /// All matching work is done
    Implemented,
}

impl SectionStatus {
    /// Wire label for this status
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionStatus::Planned => "planned",
            SectionStatus::InProgress => "in_progress",
            SectionStatus::Implemented => "implemented",
        }
    }
}

impl std::fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_is_the_only_completing_status() {
        assert!(WorkItemStatus::Done.is_done());
        assert!(!WorkItemStatus::NotStarted.is_done());
        assert!(!WorkItemStatus::InProgress.is_done());
        assert!(!WorkItemStatus::Blocked.is_done());
    }

    #[test]
    fn statuses_serialize_to_snake_case() {
        let json = serde_json::to_string(&WorkItemStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");
        let json = serde_json::to_string(&SectionStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn section_status_wire_labels() {
        assert_eq!(SectionStatus::Planned.as_str(), "planned");
        assert_eq!(SectionStatus::InProgress.as_str(), "in_progress");
        assert_eq!(SectionStatus::Implemented.as_str(), "implemented");
    }
}
