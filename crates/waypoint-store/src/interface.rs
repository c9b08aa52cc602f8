//! Collaborator trait seams
//!
//! One trait per persistence concern. The refresh service only ever sees
//! these traits; which backend satisfies them is the caller's business.
//! All failures surface as [`StoreError`] and pass through the service
//! untouched.

use async_trait::async_trait;
use waypoint_domain::{
    AgentConfig, AuditEvent, MetricSnapshot, Outcome, Roadmap, RoadmapId, RoadmapSection,
    TenantId, TicketPack, TicketPackId, WorkItem,
};

/// Persistence-layer failure
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation
    #[error("storage backend failure: {0}")]
    Backend(String),

    /// The backend could not be reached
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Roadmap rows
///
/// Refresh never updates a roadmap in place; versioning is append-only.
#[async_trait]
pub trait RoadmapStore: Send + Sync {
    /// Fetch a roadmap by id
    async fn fetch(&self, id: RoadmapId) -> Result<Option<Roadmap>, StoreError>;

    /// Insert a new roadmap row
    async fn insert(&self, roadmap: Roadmap) -> Result<(), StoreError>;
}

/// Roadmap section rows
#[async_trait]
pub trait SectionStore: Send + Sync {
    /// All sections of a roadmap, ordered by section number ascending
    async fn list_for_roadmap(
        &self,
        roadmap_id: RoadmapId,
    ) -> Result<Vec<RoadmapSection>, StoreError>;

    /// Insert or update a section, keyed by `(roadmap_id, section_number)`
    async fn upsert(&self, section: RoadmapSection) -> Result<(), StoreError>;
}

/// Ticket packs and their work items
#[async_trait]
pub trait TicketPackStore: Send + Sync {
    /// The pack tracking a roadmap for a tenant, if one exists
    async fn find_pack(
        &self,
        tenant_id: TenantId,
        roadmap_id: RoadmapId,
    ) -> Result<Option<TicketPack>, StoreError>;

    /// All work items in a pack
    async fn items_for_pack(&self, pack_id: TicketPackId) -> Result<Vec<WorkItem>, StoreError>;
}

/// Metric snapshots and computed outcomes
#[async_trait]
pub trait MetricsStore: Send + Sync {
    /// Snapshots for a roadmap in chronological order
    async fn snapshots(
        &self,
        tenant_id: TenantId,
        roadmap_id: RoadmapId,
    ) -> Result<Vec<MetricSnapshot>, StoreError>;

    /// The computed outcome for a roadmap, if one exists
    async fn outcome(
        &self,
        tenant_id: TenantId,
        roadmap_id: RoadmapId,
    ) -> Result<Option<Outcome>, StoreError>;
}

/// Agent configuration lookup and the audit trail
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// The tenant's agent configuration, if one exists
    async fn agent_config(&self, tenant_id: TenantId) -> Result<Option<AgentConfig>, StoreError>;

    /// Append an audit event
    async fn record(&self, event: AuditEvent) -> Result<(), StoreError>;
}
