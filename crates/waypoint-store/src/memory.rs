//! In-memory reference store
//!
//! Thread-safe maps keyed the way the real schema indexes: sections by
//! roadmap, items by pack, snapshots and outcomes by `(tenant, roadmap)`.
//! The audit trail is an append-only vector behind a mutex. Seeding
//! helpers exist for fixtures and the demo binary; the refresh pipeline
//! itself only touches the trait methods.

use crate::interface::{
    AuditStore, MetricsStore, RoadmapStore, SectionStore, StoreError, TicketPackStore,
};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::Mutex;
use waypoint_domain::{
    AgentConfig, AuditEvent, MetricSnapshot, Outcome, Roadmap, RoadmapId, RoadmapSection,
    TenantId, TicketPack, TicketPackId, WorkItem,
};

/// In-memory implementation of every collaborator trait
#[derive(Debug, Default)]
pub struct MemoryStore {
    roadmaps: DashMap<RoadmapId, Roadmap>,
    sections: DashMap<RoadmapId, Vec<RoadmapSection>>,
    packs: DashMap<(TenantId, RoadmapId), TicketPack>,
    items: DashMap<TicketPackId, Vec<WorkItem>>,
    snapshots: DashMap<(TenantId, RoadmapId), Vec<MetricSnapshot>>,
    outcomes: DashMap<(TenantId, RoadmapId), Outcome>,
    agent_configs: DashMap<TenantId, AgentConfig>,
    audit_trail: Mutex<Vec<AuditEvent>>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a ticket pack
    pub fn seed_pack(&self, pack: TicketPack) {
        self.packs.insert((pack.tenant_id, pack.roadmap_id), pack);
    }

    /// Seed a work item into its pack
    pub fn seed_item(&self, item: WorkItem) {
        self.items.entry(item.pack_id).or_default().push(item);
    }

    /// Seed a metric snapshot; callers seed in chronological order
    pub fn seed_snapshot(&self, snapshot: MetricSnapshot) {
        self.snapshots
            .entry((snapshot.tenant_id, snapshot.roadmap_id))
            .or_default()
            .push(snapshot);
    }

    /// Seed a computed outcome
    pub fn seed_outcome(&self, outcome: Outcome) {
        self.outcomes
            .insert((outcome.tenant_id, outcome.roadmap_id), outcome);
    }

    /// Seed a tenant's agent configuration
    pub fn seed_agent_config(&self, config: AgentConfig) {
        self.agent_configs.insert(config.tenant_id, config);
    }

    /// Snapshot of the audit trail, oldest first
    #[must_use]
    pub fn audit_events(&self) -> Vec<AuditEvent> {
        self.audit_trail.lock().clone()
    }

    /// Number of roadmap rows currently stored
    #[must_use]
    pub fn roadmap_count(&self) -> usize {
        self.roadmaps.len()
    }
}

#[async_trait]
impl RoadmapStore for MemoryStore {
    async fn fetch(&self, id: RoadmapId) -> Result<Option<Roadmap>, StoreError> {
        Ok(self.roadmaps.get(&id).map(|r| r.value().clone()))
    }

    async fn insert(&self, roadmap: Roadmap) -> Result<(), StoreError> {
        self.roadmaps.insert(roadmap.id, roadmap);
        Ok(())
    }
}

#[async_trait]
impl SectionStore for MemoryStore {
    async fn list_for_roadmap(
        &self,
        roadmap_id: RoadmapId,
    ) -> Result<Vec<RoadmapSection>, StoreError> {
        let mut sections = self
            .sections
            .get(&roadmap_id)
            .map(|s| s.value().clone())
            .unwrap_or_default();
        sections.sort_by_key(|s| s.section_number);
        Ok(sections)
    }

    async fn upsert(&self, mut section: RoadmapSection) -> Result<(), StoreError> {
        let mut sections = self.sections.entry(section.roadmap_id).or_default();
        section.updated_at = Utc::now();
        match sections
            .iter_mut()
            .find(|s| s.section_number == section.section_number)
        {
            Some(existing) => {
                // Updates keep the row identity of the first insert
                section.id = existing.id;
                *existing = section;
            }
            None => sections.push(section),
        }
        Ok(())
    }
}

#[async_trait]
impl TicketPackStore for MemoryStore {
    async fn find_pack(
        &self,
        tenant_id: TenantId,
        roadmap_id: RoadmapId,
    ) -> Result<Option<TicketPack>, StoreError> {
        Ok(self
            .packs
            .get(&(tenant_id, roadmap_id))
            .map(|p| p.value().clone()))
    }

    async fn items_for_pack(&self, pack_id: TicketPackId) -> Result<Vec<WorkItem>, StoreError> {
        Ok(self
            .items
            .get(&pack_id)
            .map(|i| i.value().clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl MetricsStore for MemoryStore {
    async fn snapshots(
        &self,
        tenant_id: TenantId,
        roadmap_id: RoadmapId,
    ) -> Result<Vec<MetricSnapshot>, StoreError> {
        Ok(self
            .snapshots
            .get(&(tenant_id, roadmap_id))
            .map(|s| s.value().clone())
            .unwrap_or_default())
    }

    async fn outcome(
        &self,
        tenant_id: TenantId,
        roadmap_id: RoadmapId,
    ) -> Result<Option<Outcome>, StoreError> {
        Ok(self
            .outcomes
            .get(&(tenant_id, roadmap_id))
            .map(|o| o.value().clone()))
    }
}

#[async_trait]
impl AuditStore for MemoryStore {
    async fn agent_config(&self, tenant_id: TenantId) -> Result<Option<AgentConfig>, StoreError> {
        Ok(self.agent_configs.get(&tenant_id).map(|c| c.value().clone()))
    }

    async fn record(&self, event: AuditEvent) -> Result<(), StoreError> {
        self.audit_trail.lock().push(event);
        Ok(())
    }
}
