//! Testing utilities for the Waypoint workspace
//!
//! Shared fixtures: a seeded in-memory portfolio and small builders.

#![allow(missing_docs)]

use chrono::{Duration, Utc};
use waypoint_domain::{
    AgentConfig, MetricSnapshot, Outcome, Roadmap, RoadmapId, RoadmapSection, SectionStatus,
    TenantId, TicketPack, TicketPackId, UserId, WorkItem, WorkItemStatus,
};
use waypoint_store::{MemoryStore, RoadmapStore, SectionStore};

/// Identifiers of the entities [`seed_portfolio`] creates
#[derive(Debug, Clone, Copy)]
pub struct SeededPortfolio {
    pub tenant: TenantId,
    pub user: UserId,
    pub roadmap: RoadmapId,
    pub pack: TicketPackId,
}

pub fn work_item(pack: TicketPackId, external_id: &str, status: WorkItemStatus) -> WorkItem {
    WorkItem::new(pack, external_id)
        .with_title(format!("Ticket {external_id}"))
        .with_status(status)
}

pub fn section(roadmap: RoadmapId, number: u32, name: &str) -> RoadmapSection {
    let content = format!(
        "**Status:** 📋 Planned\n\n## {name}\n\nScope and rollout notes for {name}.",
    );
    RoadmapSection::new(roadmap, number, name, content)
        .with_status(SectionStatus::Planned)
        .with_cheatsheet(format!("- Owner: platform team\n- Scope: {name}"))
}

pub fn baseline_snapshots(
    tenant: TenantId,
    roadmap: RoadmapId,
) -> (MetricSnapshot, MetricSnapshot) {
    let start = Utc::now() - Duration::days(30);
    let baseline = MetricSnapshot::new(tenant, roadmap, "baseline", start)
        .with_response_time_ms(420.0)
        .with_conversion_rate(0.02)
        .with_adoption_rate(0.2)
        .with_ops_hours_per_week(30.0)
        .with_satisfaction_score(6.0);
    let latest = MetricSnapshot::new(tenant, roadmap, "30d", Utc::now())
        .with_response_time_ms(180.0)
        .with_conversion_rate(0.035)
        .with_adoption_rate(0.6)
        .with_ops_hours_per_week(18.0)
        .with_satisfaction_score(7.5);
    (baseline, latest)
}

pub fn sample_outcome(tenant: TenantId, roadmap: RoadmapId) -> Outcome {
    Outcome::new(tenant, roadmap)
        .with_time_savings(12.0)
        .with_revenue_impact(250_000.0)
        .with_cost_avoidance(40_000.0)
        .with_net_roi_percent(85.0)
        .with_qualitative_status("Ahead of plan after the first wave.")
}

/// Seed a representative tenant portfolio
///
/// Three sections: system 1 fully done, system 2 half done, system 3 with
/// no matching tickets. One stray ticket falls into the `Other` group.
/// Snapshots, an outcome and an agent configuration are present, so a
/// refresh exercises every pipeline step.
pub async fn seed_portfolio(store: &MemoryStore) -> SeededPortfolio {
    let tenant = TenantId::new();
    let user = UserId::new();

    let roadmap = Roadmap::new(tenant, user)
        .with_status("v2.3")
        .with_pilot_stage("wave-1");
    let roadmap_id = roadmap.id;
    store.insert(roadmap).await.expect("memory store insert");

    for (number, name) in [(1, "Intake Automation"), (2, "Ticket Triage"), (3, "Reporting")] {
        store
            .upsert(section(roadmap_id, number, name))
            .await
            .expect("memory store upsert");
    }

    let pack = TicketPack::new(tenant, roadmap_id, "Wave 1 delivery");
    let pack_id = pack.id;
    store.seed_pack(pack);
    for item in [
        work_item(pack_id, "T1.1", WorkItemStatus::Done),
        work_item(pack_id, "T1.2", WorkItemStatus::Done),
        work_item(pack_id, "T2.1", WorkItemStatus::Done),
        work_item(pack_id, "T2.2", WorkItemStatus::NotStarted),
        work_item(pack_id, "ops-cleanup", WorkItemStatus::Blocked),
    ] {
        store.seed_item(item);
    }

    let (baseline, latest) = baseline_snapshots(tenant, roadmap_id);
    store.seed_snapshot(baseline);
    store.seed_snapshot(latest);
    store.seed_outcome(sample_outcome(tenant, roadmap_id));
    store.seed_agent_config(AgentConfig::new(tenant, "Roadmap Copilot"));

    SeededPortfolio {
        tenant,
        user,
        roadmap: roadmap_id,
        pack: pack_id,
    }
}
