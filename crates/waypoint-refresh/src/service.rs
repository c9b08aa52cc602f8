//! The roadmap refresh service
//!
//! Orchestrates one refresh end to end. Versioning is append-only: the
//! source roadmap row is never touched, a new row is inserted per run,
//! and re-running against the same source therefore produces a fresh
//! artifact every time rather than converging.

use crate::config::RefreshConfig;
use crate::error::RefreshError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use waypoint_domain::{
    AuditEvent, Roadmap, RoadmapId, RoadmapSection, SectionStatus, TenantId, VersionTag,
};
use waypoint_report::{apply_banner, render_outcomes};
use waypoint_rollup::{aggregate, project, GroupKey};
use waypoint_store::{
    AuditStore, MemoryStore, MetricsStore, RoadmapStore, SectionStore, TicketPackStore,
};

/// Result of one refresh run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshOutcome {
    /// The roadmap row this run inserted
    pub new_roadmap_id: RoadmapId,
    /// The bumped version tag; reported and audited, not persisted on
    /// the new row
    pub version: VersionTag,
}

/// The versioner
///
/// Holds one injected collaborator per persistence concern. A single
/// backend may satisfy all of them, as [`MemoryStore`] does.
pub struct RefreshService {
    roadmaps: Arc<dyn RoadmapStore>,
    sections: Arc<dyn SectionStore>,
    packs: Arc<dyn TicketPackStore>,
    metrics: Arc<dyn MetricsStore>,
    audit: Arc<dyn AuditStore>,
    config: RefreshConfig,
}

impl RefreshService {
    /// Create a service from its collaborators
    #[must_use]
    pub fn new(
        roadmaps: Arc<dyn RoadmapStore>,
        sections: Arc<dyn SectionStore>,
        packs: Arc<dyn TicketPackStore>,
        metrics: Arc<dyn MetricsStore>,
        audit: Arc<dyn AuditStore>,
    ) -> Self {
        Self {
            roadmaps,
            sections,
            packs,
            metrics,
            audit,
            config: RefreshConfig::default(),
        }
    }

    /// Create a service backed entirely by one in-memory store
    #[must_use]
    pub fn from_memory(store: &Arc<MemoryStore>) -> Self {
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        )
    }

    /// With configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: RefreshConfig) -> Self {
        self.config = config;
        self
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// Run one refresh for a tenant's roadmap
    ///
    /// # Workflow
    /// 1. Load sections and the ticket pack (hard precondition)
    /// 2. Aggregate ticket completion per system
    /// 3. Insert the new roadmap row under a bumped version tag
    /// 4. Re-project and copy every section
    /// 5. Append the outcomes section when enough measurements exist
    /// 6. Record an audit event if the tenant has an agent configuration
    ///
    /// # Errors
    /// - `RefreshError::PackNotFound` when no ticket pack tracks the pair
    /// - `RefreshError::RoadmapNotFound` when the source row is missing
    /// - `RefreshError::Store` for any persistence failure, passed through
    pub async fn refresh(
        &self,
        tenant_id: TenantId,
        roadmap_id: RoadmapId,
    ) -> Result<RefreshOutcome, RefreshError> {
        let started = Instant::now();
        tracing::info!(%tenant_id, %roadmap_id, "refreshing roadmap");

        // 1. Load
        let source_sections = self.sections.list_for_roadmap(roadmap_id).await?;
        let pack = self
            .packs
            .find_pack(tenant_id, roadmap_id)
            .await?
            .ok_or(RefreshError::PackNotFound {
                tenant_id,
                roadmap_id,
            })?;
        let items = self.packs.items_for_pack(pack.id).await?;

        // 2. Aggregate
        let stats = aggregate(&items);
        tracing::debug!(
            items = items.len(),
            groups = stats.len(),
            "aggregated ticket completion"
        );

        // 3. Version
        let source = self
            .roadmaps
            .fetch(roadmap_id)
            .await?
            .ok_or(RefreshError::RoadmapNotFound(roadmap_id))?;
        let version = source.version_tag().bumped();
        let mut new_roadmap =
            Roadmap::new(source.tenant_id, source.created_by).with_status("in_progress");
        if let Some(stage) = source.pilot_stage.clone() {
            new_roadmap = new_roadmap.with_pilot_stage(stage);
        }
        let new_roadmap_id = new_roadmap.id;
        self.roadmaps.insert(new_roadmap).await?;
        tracing::debug!(%new_roadmap_id, %version, "inserted new roadmap version");

        // 4. Project and copy sections
        let mut section_count = 0usize;
        for source_section in &source_sections {
            let stat = stats.get(&GroupKey::System(source_section.section_number));
            let status = project(stat, source_section.status);
            let content = apply_banner(&source_section.content_markdown, status, stat);

            let mut section = RoadmapSection::new(
                new_roadmap_id,
                source_section.section_number,
                source_section.section_name.clone(),
                content,
            )
            .with_status(status);
            if let Some(cheatsheet) = &source_section.cheatsheet_markdown {
                section = section.with_cheatsheet(cheatsheet.clone());
            }
            if let Some(diagram) = &source_section.diagram_source {
                section = section.with_diagram(diagram.clone());
            }

            self.sections.upsert(section).await?;
            section_count += 1;
        }

        // 5. Outcomes section
        let outcomes_included = self
            .append_outcomes(tenant_id, roadmap_id, new_roadmap_id)
            .await?;
        if outcomes_included {
            section_count += 1;
        }

        // 6. Audit
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match self.audit.agent_config(tenant_id).await? {
            Some(_) => {
                self.audit
                    .record(AuditEvent::refresh(
                        tenant_id,
                        roadmap_id,
                        new_roadmap_id,
                        version,
                        section_count,
                        outcomes_included,
                        elapsed_ms,
                    ))
                    .await?;
            }
            None => {
                tracing::debug!(%tenant_id, "no agent configuration, skipping audit record");
            }
        }

        tracing::info!(
            %new_roadmap_id,
            %version,
            section_count,
            outcomes_included,
            elapsed_ms,
            "refresh complete"
        );
        Ok(RefreshOutcome {
            new_roadmap_id,
            version,
        })
    }

    /// Synthesize the outcomes section when the inputs exist
    ///
    /// Needs a computed outcome and at least `min_snapshots` metric
    /// snapshots; otherwise nothing is written and the refresh carries on.
    async fn append_outcomes(
        &self,
        tenant_id: TenantId,
        roadmap_id: RoadmapId,
        new_roadmap_id: RoadmapId,
    ) -> Result<bool, RefreshError> {
        let Some(outcome) = self.metrics.outcome(tenant_id, roadmap_id).await? else {
            return Ok(false);
        };
        let snapshots = self.metrics.snapshots(tenant_id, roadmap_id).await?;
        if snapshots.len() < self.config.min_snapshots {
            tracing::debug!(
                snapshots = snapshots.len(),
                required = self.config.min_snapshots,
                "not enough snapshots for an outcomes section"
            );
            return Ok(false);
        }
        let Some(report) = render_outcomes(&snapshots, &outcome) else {
            return Ok(false);
        };

        let section = RoadmapSection::new(
            new_roadmap_id,
            self.config.outcomes_section_number,
            self.config.outcomes_section_name.clone(),
            report,
        )
        .with_status(SectionStatus::Implemented);
        self.sections.upsert(section).await?;
        Ok(true)
    }
}

impl std::fmt::Debug for RefreshService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
