//! Waypoint store
//!
//! The persistence seams of the refresh pipeline. [`interface`] defines one
//! narrow async trait per collaborator so the service can be handed exactly
//! the stores it needs (dependency injection, never ambient globals), and
//! [`memory`] provides the thread-safe in-memory implementation backing
//! tests and the demo binary.

pub mod interface;
pub mod memory;

pub use interface::{
    AuditStore, MetricsStore, RoadmapStore, SectionStore, StoreError, TicketPackStore,
};
pub use memory::MemoryStore;
