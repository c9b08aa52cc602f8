//! Waypoint domain model
//!
//! Defines the entities the refresh pipeline operates on:
//! - Typed identifiers for tenants, roadmaps, sections, packs and items
//! - Work items and their lifecycle statuses
//! - Roadmaps, sections and the version tag carried in the status field
//! - Metric snapshots, outcomes and audit events
//!
//! Everything here is plain data: no I/O, no persistence assumptions.

pub mod entities;
pub mod ids;
pub mod status;
pub mod version;

pub use entities::{
    AgentConfig, AuditEvent, CompletionStat, MetricSnapshot, Outcome, Roadmap, RoadmapSection,
    TicketPack, WorkItem,
};
pub use ids::{
    AgentConfigId, AuditEventId, RoadmapId, SectionId, TenantId, TicketPackId, UserId, WorkItemId,
};
pub use status::{SectionStatus, WorkItemStatus};
pub use version::VersionTag;
