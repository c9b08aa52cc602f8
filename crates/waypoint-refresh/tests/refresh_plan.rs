//! End-to-end refresh scenarios
//!
//! Each test drives the whole pipeline against the in-memory store:
//! aggregation, projection, banner rewriting, versioning, the outcomes
//! section and audit recording. These are intentionally "fat" compared to
//! unit tests: every scenario corresponds to an observable product
//! behavior rather than one function's contract.

use std::sync::Arc;
use waypoint_domain::{
    AgentConfig, Roadmap, SectionStatus, TenantId, TicketPack, UserId, VersionTag, WorkItemStatus,
};
use waypoint_refresh::{RefreshConfig, RefreshError, RefreshService};
use waypoint_store::{MemoryStore, RoadmapStore, SectionStore};
use waypoint_test_utils::{baseline_snapshots, sample_outcome, section, seed_portfolio, work_item};

fn memory_service(store: &Arc<MemoryStore>) -> RefreshService {
    RefreshService::from_memory(store)
}

/// The happy path: a fully seeded portfolio refreshes into a new roadmap
/// with projected section statuses, rewritten banners, an outcomes
/// section, and one audit event.
#[tokio::test]
async fn full_refresh_projects_and_audits() {
    let store = Arc::new(MemoryStore::new());
    let seeded = seed_portfolio(&store).await;
    let service = memory_service(&store);

    let outcome = service.refresh(seeded.tenant, seeded.roadmap).await.unwrap();

    // Source tagged v2.3, so the run reports v2.4
    assert_eq!(outcome.version, VersionTag::new(2, 4));
    assert_ne!(outcome.new_roadmap_id, seeded.roadmap);

    // The new row's lifecycle status is reset; the version tag is only
    // reported, never written back
    let new_row = store.fetch(outcome.new_roadmap_id).await.unwrap().unwrap();
    assert_eq!(new_row.status, "in_progress");
    assert_eq!(new_row.pilot_stage.as_deref(), Some("wave-1"));

    // The source row is untouched
    let source = store.fetch(seeded.roadmap).await.unwrap().unwrap();
    assert_eq!(source.status, "v2.3");

    let sections = store
        .list_for_roadmap(outcome.new_roadmap_id)
        .await
        .unwrap();
    assert_eq!(sections.len(), 4);

    // System 1 is fully done (2/2), system 2 half done (1/2), system 3
    // has no matching tickets and keeps its seeded Planned status
    assert_eq!(sections[0].status, SectionStatus::Implemented);
    assert!(sections[0]
        .content_markdown
        .starts_with("**Status:** ✅ Implemented (100% complete - 2/2 tickets)\n\n"));
    assert_eq!(sections[1].status, SectionStatus::InProgress);
    assert!(sections[1]
        .content_markdown
        .starts_with("**Status:** 🚧 In Progress (50% complete - 1/2 tickets)\n\n"));
    assert_eq!(sections[2].status, SectionStatus::Planned);
    assert!(sections[2]
        .content_markdown
        .starts_with("**Status:** 📋 Planned\n\n"));

    // Rewriting never stacks banners
    for copied in &sections[..3] {
        assert_eq!(copied.content_markdown.matches("**Status:**").count(), 1);
    }

    // The outcomes section is appended at number 10, forced Implemented
    let outcomes = &sections[3];
    assert_eq!(outcomes.section_number, 10);
    assert_eq!(outcomes.section_name, "Outcomes & Learning");
    assert_eq!(outcomes.status, SectionStatus::Implemented);
    assert!(outcomes.content_markdown.contains("| Metric | Baseline | Latest | Change |"));

    // One audit event, carrying the run's shape
    let events = store.audit_events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.action, "roadmap_refresh");
    assert_eq!(event.source_roadmap, seeded.roadmap);
    assert_eq!(event.new_roadmap, outcome.new_roadmap_id);
    assert_eq!(event.version, VersionTag::new(2, 4));
    assert_eq!(event.section_count, 4);
    assert!(event.outcomes_included);
}

/// Refresh is append-only and deliberately not idempotent: each run
/// inserts a fresh roadmap row. The source row is never mutated, so the
/// re-derived version tag is the same each time while the identity is
/// always new.
#[tokio::test]
async fn sequential_refreshes_append_new_versions() {
    let store = Arc::new(MemoryStore::new());
    let seeded = seed_portfolio(&store).await;
    let service = memory_service(&store);

    let first = service.refresh(seeded.tenant, seeded.roadmap).await.unwrap();
    let second = service.refresh(seeded.tenant, seeded.roadmap).await.unwrap();

    assert_ne!(first.new_roadmap_id, second.new_roadmap_id);
    assert_eq!(first.version, VersionTag::new(2, 4));
    assert_eq!(second.version, VersionTag::new(2, 4));

    // Source + two new versions
    assert_eq!(store.roadmap_count(), 3);
    assert_eq!(store.audit_events().len(), 2);
}

/// A missing ticket pack is a hard precondition failure.
#[tokio::test]
async fn refresh_without_pack_fails() {
    let store = Arc::new(MemoryStore::new());
    let tenant = TenantId::new();
    let roadmap = Roadmap::new(tenant, UserId::new());
    let roadmap_id = roadmap.id;
    store.insert(roadmap).await.unwrap();

    let err = memory_service(&store)
        .refresh(tenant, roadmap_id)
        .await
        .unwrap_err();
    assert!(matches!(err, RefreshError::PackNotFound { .. }));
    assert!(err.is_not_found());

    // Nothing was written
    assert_eq!(store.roadmap_count(), 1);
    assert!(store.audit_events().is_empty());
}

/// A pack without a roadmap row fails after aggregation, before any write.
#[tokio::test]
async fn refresh_without_roadmap_row_fails() {
    let store = Arc::new(MemoryStore::new());
    let tenant = TenantId::new();
    let roadmap_id = waypoint_domain::RoadmapId::new();
    store.seed_pack(TicketPack::new(tenant, roadmap_id, "orphan pack"));

    let err = memory_service(&store)
        .refresh(tenant, roadmap_id)
        .await
        .unwrap_err();
    assert!(matches!(err, RefreshError::RoadmapNotFound(id) if id == roadmap_id));
    assert_eq!(store.roadmap_count(), 0);
}

/// An empty ticket pack produces an empty aggregation, and every section
/// keeps its pre-existing status: no group ever matches, and the
/// projector refuses to downgrade on missing data.
#[tokio::test]
async fn empty_pack_preserves_section_statuses() {
    let store = Arc::new(MemoryStore::new());
    let tenant = TenantId::new();
    let roadmap = Roadmap::new(tenant, UserId::new()).with_status("v1.0");
    let roadmap_id = roadmap.id;
    store.insert(roadmap).await.unwrap();

    store
        .upsert(section(roadmap_id, 1, "Intake").with_status(SectionStatus::Implemented))
        .await
        .unwrap();
    store
        .upsert(section(roadmap_id, 2, "Triage").with_status(SectionStatus::InProgress))
        .await
        .unwrap();
    store.seed_pack(TicketPack::new(tenant, roadmap_id, "empty pack"));

    let outcome = memory_service(&store)
        .refresh(tenant, roadmap_id)
        .await
        .unwrap();

    let sections = store
        .list_for_roadmap(outcome.new_roadmap_id)
        .await
        .unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].status, SectionStatus::Implemented);
    assert_eq!(sections[1].status, SectionStatus::InProgress);

    // Banners are still rewritten, without a completion suffix
    assert!(sections[0]
        .content_markdown
        .starts_with("**Status:** ✅ Implemented\n\n"));
}

/// A regressed pack moves previously implemented sections backward;
/// there is no terminal state.
#[tokio::test]
async fn completion_regression_moves_sections_backward() {
    let store = Arc::new(MemoryStore::new());
    let tenant = TenantId::new();
    let roadmap = Roadmap::new(tenant, UserId::new());
    let roadmap_id = roadmap.id;
    store.insert(roadmap).await.unwrap();
    store
        .upsert(section(roadmap_id, 1, "Intake").with_status(SectionStatus::Implemented))
        .await
        .unwrap();

    let pack = TicketPack::new(tenant, roadmap_id, "reopened work");
    let pack_id = pack.id;
    store.seed_pack(pack);
    store.seed_item(work_item(pack_id, "T1.1", WorkItemStatus::Done));
    store.seed_item(work_item(pack_id, "T1.2", WorkItemStatus::InProgress));

    let outcome = memory_service(&store)
        .refresh(tenant, roadmap_id)
        .await
        .unwrap();
    let sections = store
        .list_for_roadmap(outcome.new_roadmap_id)
        .await
        .unwrap();
    assert_eq!(sections[0].status, SectionStatus::InProgress);
}

/// An unparseable version tag falls back to v1.0, so the first refresh
/// reports v1.1.
#[tokio::test]
async fn unparseable_version_defaults_to_v1_1() {
    let store = Arc::new(MemoryStore::new());
    let tenant = TenantId::new();
    let roadmap = Roadmap::new(tenant, UserId::new()).with_status("draft");
    let roadmap_id = roadmap.id;
    store.insert(roadmap).await.unwrap();
    store.seed_pack(TicketPack::new(tenant, roadmap_id, "pack"));

    let outcome = memory_service(&store)
        .refresh(tenant, roadmap_id)
        .await
        .unwrap();
    assert_eq!(outcome.version, VersionTag::new(1, 1));
}

/// With an outcome but a single snapshot, the two-snapshot minimum holds
/// and no outcomes section is generated.
#[tokio::test]
async fn single_snapshot_skips_outcomes_section() {
    let store = Arc::new(MemoryStore::new());
    let tenant = TenantId::new();
    let roadmap = Roadmap::new(tenant, UserId::new());
    let roadmap_id = roadmap.id;
    store.insert(roadmap).await.unwrap();
    store.upsert(section(roadmap_id, 1, "Intake")).await.unwrap();
    store.seed_pack(TicketPack::new(tenant, roadmap_id, "pack"));

    let (baseline, _) = baseline_snapshots(tenant, roadmap_id);
    store.seed_snapshot(baseline);
    store.seed_outcome(sample_outcome(tenant, roadmap_id));
    store.seed_agent_config(AgentConfig::new(tenant, "Roadmap Copilot"));

    let outcome = memory_service(&store)
        .refresh(tenant, roadmap_id)
        .await
        .unwrap();

    let sections = store
        .list_for_roadmap(outcome.new_roadmap_id)
        .await
        .unwrap();
    assert_eq!(sections.len(), 1);
    assert!(sections.iter().all(|s| s.section_number != 10));

    let events = store.audit_events();
    assert_eq!(events.len(), 1);
    assert!(!events[0].outcomes_included);
    assert_eq!(events[0].section_count, 1);
}

/// Tenants without an agent configuration get no audit trail, and that
/// is not an error.
#[tokio::test]
async fn missing_agent_config_skips_audit_silently() {
    let store = Arc::new(MemoryStore::new());
    let tenant = TenantId::new();
    let roadmap = Roadmap::new(tenant, UserId::new());
    let roadmap_id = roadmap.id;
    store.insert(roadmap).await.unwrap();
    store.seed_pack(TicketPack::new(tenant, roadmap_id, "pack"));

    let outcome = memory_service(&store)
        .refresh(tenant, roadmap_id)
        .await
        .unwrap();

    assert_eq!(outcome.version, VersionTag::new(1, 1));
    assert!(store.audit_events().is_empty());
}

/// Configuration moves the outcomes section without touching the rest of
/// the pipeline.
#[tokio::test]
async fn config_overrides_outcomes_placement() {
    let store = Arc::new(MemoryStore::new());
    let seeded = seed_portfolio(&store).await;
    let service = RefreshService::from_memory(&store).with_config(
        RefreshConfig::new()
            .with_outcomes_section_number(99)
            .with_outcomes_section_name("Retrospective"),
    );

    let outcome = service.refresh(seeded.tenant, seeded.roadmap).await.unwrap();
    let sections = store
        .list_for_roadmap(outcome.new_roadmap_id)
        .await
        .unwrap();
    let last = sections.last().unwrap();
    assert_eq!(last.section_number, 99);
    assert_eq!(last.section_name, "Retrospective");
}
