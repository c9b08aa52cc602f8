//! Pipeline entities
//!
//! Rows as the refresh pipeline sees them: roadmaps and their sections,
//! ticket packs and work items, metric snapshots, computed outcomes, the
//! per-tenant agent configuration and the audit trail entry.

use crate::ids::{
    AgentConfigId, AuditEventId, RoadmapId, SectionId, TenantId, TicketPackId, UserId, WorkItemId,
};
use crate::status::{SectionStatus, WorkItemStatus};
use crate::version::VersionTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One trackable unit of implementation work
///
/// The external id encodes a group prefix (`"T1.3.1"` belongs to system 1);
/// grouping itself lives in the rollup crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Item identifier
    pub id: WorkItemId,
    /// Owning ticket pack
    pub pack_id: TicketPackId,
    /// Intake-assigned id, e.g. `"T1.3.1"`
    pub external_id: String,
    /// Short human title
    pub title: String,
    /// Current lifecycle status
    pub status: WorkItemStatus,
}

impl WorkItem {
    /// Create new work item in the `NotStarted` state
    #[inline]
    #[must_use]
    pub fn new(pack_id: TicketPackId, external_id: impl Into<String>) -> Self {
        Self {
            id: WorkItemId::new(),
            pack_id,
            external_id: external_id.into(),
            title: String::new(),
            status: WorkItemStatus::NotStarted,
        }
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: WorkItemStatus) -> Self {
        self.status = status;
        self
    }
}

/// A named collection of work items scoped to one tenant and one roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketPack {
    /// Pack identifier
    pub id: TicketPackId,
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Roadmap the pack tracks
    pub roadmap_id: RoadmapId,
    /// Display name
    pub name: String,
}

impl TicketPack {
    /// Create new ticket pack
    #[inline]
    #[must_use]
    pub fn new(tenant_id: TenantId, roadmap_id: RoadmapId, name: impl Into<String>) -> Self {
        Self {
            id: TicketPackId::new(),
            tenant_id,
            roadmap_id,
            name: name.into(),
        }
    }
}

/// Per-group completion counts, derived fresh on every aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionStat {
    /// Items in the `Done` status
    pub done: usize,
    /// All items in the group
    pub total: usize,
    /// `round(done / total * 100)`, 0 when the group is empty
    pub percent: u8,
}

impl CompletionStat {
    /// Compute a stat from counts
    ///
    /// `done` is clamped to `total` so the percentage stays in `[0, 100]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn of(done: usize, total: usize) -> Self {
        let done = done.min(total);
        let percent = if total == 0 {
            0
        } else {
            ((done as f64 / total as f64) * 100.0).round() as u8
        };
        Self {
            done,
            total,
            percent,
        }
    }
}

/// One numbered chapter of a roadmap document
///
/// At most one section exists per `(roadmap_id, section_number)` pair;
/// the store enforces this by upsert-by-lookup rather than a constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapSection {
    /// Section identifier
    pub id: SectionId,
    /// Owning roadmap version
    pub roadmap_id: RoadmapId,
    /// Chapter number, unique within a roadmap
    pub section_number: u32,
    /// Chapter title
    pub section_name: String,
    /// Markdown body; may begin with a status banner
    pub content_markdown: String,
    /// Projected implementation status
    pub status: SectionStatus,
    /// Whitespace-split word count of the body
    pub word_count: usize,
    /// Optional quick-reference markdown
    pub cheatsheet_markdown: Option<String>,
    /// Optional diagram source
    pub diagram_source: Option<String>,
    /// Last content change
    pub last_updated_at: DateTime<Utc>,
    /// Last row write
    pub updated_at: DateTime<Utc>,
}

impl RoadmapSection {
    /// Create new section in the `Planned` state
    #[must_use]
    pub fn new(
        roadmap_id: RoadmapId,
        section_number: u32,
        section_name: impl Into<String>,
        content_markdown: impl Into<String>,
    ) -> Self {
        let content_markdown = content_markdown.into();
        let word_count = word_count(&content_markdown);
        let now = Utc::now();
        Self {
            id: SectionId::new(),
            roadmap_id,
            section_number,
            section_name: section_name.into(),
            content_markdown,
            status: SectionStatus::Planned,
            word_count,
            cheatsheet_markdown: None,
            diagram_source: None,
            last_updated_at: now,
            updated_at: now,
        }
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: SectionStatus) -> Self {
        self.status = status;
        self
    }

    /// With quick-reference markdown
    #[inline]
    #[must_use]
    pub fn with_cheatsheet(mut self, cheatsheet: impl Into<String>) -> Self {
        self.cheatsheet_markdown = Some(cheatsheet.into());
        self
    }

    /// With diagram source
    #[inline]
    #[must_use]
    pub fn with_diagram(mut self, diagram: impl Into<String>) -> Self {
        self.diagram_source = Some(diagram.into());
        self
    }

    /// Replace the body, recomputing the word count and touching timestamps
    pub fn set_content(&mut self, content_markdown: impl Into<String>) {
        self.content_markdown = content_markdown.into();
        self.word_count = word_count(&self.content_markdown);
        let now = Utc::now();
        self.last_updated_at = now;
        self.updated_at = now;
    }
}

/// Whitespace-split word count
#[inline]
#[must_use]
pub(crate) fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// One version of a tenant's strategic plan
///
/// Refresh is append-only: every run inserts a new row and never updates an
/// existing one. The `status` field is free text that doubles as a version
/// tag (see [`VersionTag`]) on source rows and holds the literal
/// `"in_progress"` on freshly inserted ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    /// Roadmap identifier
    pub id: RoadmapId,
    /// Owning tenant
    pub tenant_id: TenantId,
    /// User who created the original plan
    pub created_by: UserId,
    /// Free-text lifecycle/version tag
    pub status: String,
    /// Pilot program stage, copied across versions
    pub pilot_stage: Option<String>,
    /// Row creation time
    pub created_at: DateTime<Utc>,
}

impl Roadmap {
    /// Create new roadmap tagged `v1.0`
    #[inline]
    #[must_use]
    pub fn new(tenant_id: TenantId, created_by: UserId) -> Self {
        Self {
            id: RoadmapId::new(),
            tenant_id,
            created_by,
            status: VersionTag::default().to_string(),
            pilot_stage: None,
            created_at: Utc::now(),
        }
    }

    /// With status text
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// With pilot stage
    #[inline]
    #[must_use]
    pub fn with_pilot_stage(mut self, stage: impl Into<String>) -> Self {
        self.pilot_stage = Some(stage.into());
        self
    }

    /// Version tag parsed from the status field, `v1.0` when unparseable
    #[inline]
    #[must_use]
    pub fn version_tag(&self) -> VersionTag {
        VersionTag::parse(&self.status).unwrap_or_default()
    }
}

/// A point-in-time KPI measurement set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Measured roadmap
    pub roadmap_id: RoadmapId,
    /// Measurement label, e.g. `"baseline"` or `"30d"`
    pub label: String,
    /// When the measurement was taken
    pub snapshot_date: DateTime<Utc>,
    /// Mean response time in milliseconds (lower is better)
    pub response_time_ms: f64,
    /// Conversion rate in `[0, 1]`
    pub conversion_rate: f64,
    /// Feature adoption rate in `[0, 1]`
    pub adoption_rate: f64,
    /// Manual operations hours per week (lower is better)
    pub ops_hours_per_week: f64,
    /// Stakeholder satisfaction score on a 1-10 scale
    pub satisfaction_score: f64,
}

impl MetricSnapshot {
    /// Create new snapshot with zeroed readings
    #[must_use]
    pub fn new(
        tenant_id: TenantId,
        roadmap_id: RoadmapId,
        label: impl Into<String>,
        snapshot_date: DateTime<Utc>,
    ) -> Self {
        Self {
            tenant_id,
            roadmap_id,
            label: label.into(),
            snapshot_date,
            response_time_ms: 0.0,
            conversion_rate: 0.0,
            adoption_rate: 0.0,
            ops_hours_per_week: 0.0,
            satisfaction_score: 0.0,
        }
    }

    /// With response time
    #[inline]
    #[must_use]
    pub fn with_response_time_ms(mut self, value: f64) -> Self {
        self.response_time_ms = value;
        self
    }

    /// With conversion rate
    #[inline]
    #[must_use]
    pub fn with_conversion_rate(mut self, value: f64) -> Self {
        self.conversion_rate = value;
        self
    }

    /// With adoption rate
    #[inline]
    #[must_use]
    pub fn with_adoption_rate(mut self, value: f64) -> Self {
        self.adoption_rate = value;
        self
    }

    /// With weekly operations hours
    #[inline]
    #[must_use]
    pub fn with_ops_hours_per_week(mut self, value: f64) -> Self {
        self.ops_hours_per_week = value;
        self
    }

    /// With satisfaction score
    #[inline]
    #[must_use]
    pub fn with_satisfaction_score(mut self, value: f64) -> Self {
        self.satisfaction_score = value;
        self
    }
}

/// Realized ROI summary computed from a pair of snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Measured roadmap
    pub roadmap_id: RoadmapId,
    /// Weekly hours saved
    pub time_savings_hours_per_week: f64,
    /// Attributed revenue impact
    pub revenue_impact: f64,
    /// Attributed cost avoidance
    pub cost_avoidance: f64,
    /// Net return on investment as a percentage
    pub net_roi_percent: f64,
    /// One-line qualitative assessment
    pub qualitative_status: String,
}

impl Outcome {
    /// Create new outcome with zeroed figures
    #[must_use]
    pub fn new(tenant_id: TenantId, roadmap_id: RoadmapId) -> Self {
        Self {
            tenant_id,
            roadmap_id,
            time_savings_hours_per_week: 0.0,
            revenue_impact: 0.0,
            cost_avoidance: 0.0,
            net_roi_percent: 0.0,
            qualitative_status: String::new(),
        }
    }

    /// With weekly time savings
    #[inline]
    #[must_use]
    pub fn with_time_savings(mut self, hours_per_week: f64) -> Self {
        self.time_savings_hours_per_week = hours_per_week;
        self
    }

    /// With revenue impact
    #[inline]
    #[must_use]
    pub fn with_revenue_impact(mut self, value: f64) -> Self {
        self.revenue_impact = value;
        self
    }

    /// With cost avoidance
    #[inline]
    #[must_use]
    pub fn with_cost_avoidance(mut self, value: f64) -> Self {
        self.cost_avoidance = value;
        self
    }

    /// With net ROI percent
    #[inline]
    #[must_use]
    pub fn with_net_roi_percent(mut self, value: f64) -> Self {
        self.net_roi_percent = value;
        self
    }

    /// With qualitative status line
    #[inline]
    #[must_use]
    pub fn with_qualitative_status(mut self, status: impl Into<String>) -> Self {
        self.qualitative_status = status.into();
        self
    }
}

/// Per-tenant agent configuration
///
/// Its presence gates audit recording: tenants without a row get no
/// audit trail, and that is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Configuration identifier
    pub id: AgentConfigId,
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Display name of the configured agent
    pub display_name: String,
}

impl AgentConfig {
    /// Create new agent configuration
    #[inline]
    #[must_use]
    pub fn new(tenant_id: TenantId, display_name: impl Into<String>) -> Self {
        Self {
            id: AgentConfigId::new(),
            tenant_id,
            display_name: display_name.into(),
        }
    }
}

/// Append-only audit trail entry for one refresh run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier, sortable by creation time
    pub id: AuditEventId,
    /// Tenant the refresh ran for
    pub tenant_id: TenantId,
    /// Event kind; always `"roadmap_refresh"` from this pipeline
    pub action: String,
    /// Roadmap the refresh read from
    pub source_roadmap: RoadmapId,
    /// Roadmap the refresh produced
    pub new_roadmap: RoadmapId,
    /// Version tag computed for the new roadmap
    pub version: VersionTag,
    /// Sections written under the new roadmap
    pub section_count: usize,
    /// Whether an outcomes section was synthesized
    pub outcomes_included: bool,
    /// Wall-clock duration of the refresh in milliseconds
    pub elapsed_ms: u64,
    /// When the event was recorded
    pub recorded_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Record a completed refresh
    #[must_use]
    pub fn refresh(
        tenant_id: TenantId,
        source_roadmap: RoadmapId,
        new_roadmap: RoadmapId,
        version: VersionTag,
        section_count: usize,
        outcomes_included: bool,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            id: AuditEventId::new(),
            tenant_id,
            action: "roadmap_refresh".to_string(),
            source_roadmap,
            new_roadmap,
            version,
            section_count,
            outcomes_included,
            elapsed_ms,
            recorded_at: Utc::now(),
        }
    }
}
