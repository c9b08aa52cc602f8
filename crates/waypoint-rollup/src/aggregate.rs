//! Completion aggregation
//!
//! Reduces a flat list of work items into per-group completion stats. A
//! group exists only because at least one item was placed in it, so empty
//! groups never appear in the output.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use waypoint_domain::{CompletionStat, WorkItem};

static GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^T(\d+)\.").expect("valid group regex"));

/// Grouping key derived from a work item's external id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    /// Items whose external id starts with `T<n>.`
    System(u32),
    /// Everything else
    Other,
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::System(n) => write!(f, "System {n}"),
            GroupKey::Other => f.write_str("Other"),
        }
    }
}

/// Derive the group key for an external id
///
/// Ids matching `^T(\d+)\.` map to [`GroupKey::System`]; anything else,
/// including numeric prefixes too large for `u32`, falls into
/// [`GroupKey::Other`].
#[must_use]
pub fn group_key(external_id: &str) -> GroupKey {
    GROUP_RE
        .captures(external_id)
        .and_then(|caps| caps[1].parse().ok())
        .map_or(GroupKey::Other, GroupKey::System)
}

/// Reduce work items into per-group completion stats
///
/// Every item increments its group's `total`; only `Done` items increment
/// `done`. Counts are commutative, so input order never changes the stats;
/// map iteration order is first-seen order and is presentation-only.
#[must_use]
pub fn aggregate(items: &[WorkItem]) -> IndexMap<GroupKey, CompletionStat> {
    let mut counts: IndexMap<GroupKey, (usize, usize)> = IndexMap::new();

    for item in items {
        let entry = counts.entry(group_key(&item.external_id)).or_insert((0, 0));
        entry.1 += 1;
        if item.status.is_done() {
            entry.0 += 1;
        }
    }

    counts
        .into_iter()
        .map(|(key, (done, total))| (key, CompletionStat::of(done, total)))
        .collect()
}
