//! Status projection
//!
//! Maps a completion percentage to a section status with fixed thresholds.
//! The projector is stateless and reapplied from scratch on every refresh,
//! so a section can move backward if completion regresses.

use waypoint_domain::{CompletionStat, SectionStatus};

/// Project a section status from its group's completion stat
///
/// Thresholds are exact: 0% is `Planned`, 100% is `Implemented`, anything
/// between is `InProgress`. A missing stat means no work item matched the
/// section's group, and the section keeps its current status rather than
/// being downgraded on missing data.
#[inline]
#[must_use]
pub fn project(stat: Option<&CompletionStat>, current: SectionStatus) -> SectionStatus {
    match stat {
        None => current,
        Some(stat) => match stat.percent {
            0 => SectionStatus::Planned,
            100 => SectionStatus::Implemented,
            _ => SectionStatus::InProgress,
        },
    }
}
