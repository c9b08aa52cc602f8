//! Waypoint rollup
//!
//! Pure, deterministic reductions over ticket packs:
//! - [`aggregate`]: per-group completion counts keyed by the system prefix
//!   encoded in work item external ids
//! - [`project`]: fixed-threshold mapping from a completion percentage to a
//!   section status
//! - [`pack_summary`]: whole-pack counts for the moderation board
//!
//! Nothing in this crate performs I/O or holds state between calls; results
//! are recomputed fresh on every invocation and never cached.

pub mod aggregate;
pub mod project;
pub mod summary;

pub use aggregate::{aggregate, group_key, GroupKey};
pub use project::project;
pub use summary::{pack_summary, PackSummary};
