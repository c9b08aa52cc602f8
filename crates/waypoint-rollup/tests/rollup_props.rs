//! Property tests for the rollup invariants
//!
//! These pin down the contracts the refresh service leans on:
//! - every item lands in exactly one group and group totals sum to the input
//! - completion percentages stay inside `[0, 100]` with exact endpoints
//! - the projector is total over the percentage range

use proptest::prelude::*;
use waypoint_domain::{CompletionStat, SectionStatus, TicketPackId, WorkItem, WorkItemStatus};
use waypoint_rollup::{aggregate, group_key, project, GroupKey};

fn status_strategy() -> impl Strategy<Value = WorkItemStatus> {
    prop_oneof![
        Just(WorkItemStatus::NotStarted),
        Just(WorkItemStatus::InProgress),
        Just(WorkItemStatus::Blocked),
        Just(WorkItemStatus::Done),
    ]
}

fn external_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Well-formed system ids
        (0u32..200, 0u32..50).prop_map(|(n, m)| format!("T{n}.{m}")),
        (0u32..200, 0u32..50, 0u32..10).prop_map(|(n, m, p)| format!("T{n}.{m}.{p}")),
        // Free-form ids that must fall into Other
        "[a-z]{1,8}(-[a-z]{1,8})?",
    ]
}

fn item_strategy() -> impl Strategy<Value = WorkItem> {
    (external_id_strategy(), status_strategy())
        .prop_map(|(id, status)| WorkItem::new(TicketPackId::new(), id).with_status(status))
}

proptest! {
    #[test]
    fn group_totals_sum_to_input_length(items in proptest::collection::vec(item_strategy(), 0..64)) {
        let stats = aggregate(&items);
        let total: usize = stats.values().map(|s| s.total).sum();
        prop_assert_eq!(total, items.len());
    }

    #[test]
    fn well_formed_ids_group_by_system_number(n in 0u32..500, m in 0u32..50) {
        let id = format!("T{n}.{m}");
        prop_assert_eq!(group_key(&id), GroupKey::System(n));
    }

    #[test]
    fn done_counts_never_exceed_totals(items in proptest::collection::vec(item_strategy(), 0..64)) {
        for stat in aggregate(&items).values() {
            prop_assert!(stat.done <= stat.total);
        }
    }

    #[test]
    fn percent_stays_in_bounds(done in 0usize..1000, extra in 0usize..1000) {
        let total = done + extra;
        let stat = CompletionStat::of(done, total);
        prop_assert!(stat.percent <= 100);
        if total > 0 {
            prop_assert_eq!(stat.percent == 0, done == 0);
            prop_assert_eq!(stat.percent == 100, done == total);
        }
    }

    #[test]
    fn projector_is_total_over_percent_range(done in 0usize..=100) {
        let stat = CompletionStat::of(done, 100);
        let projected = project(Some(&stat), SectionStatus::Planned);
        let expected = match stat.percent {
            0 => SectionStatus::Planned,
            100 => SectionStatus::Implemented,
            _ => SectionStatus::InProgress,
        };
        prop_assert_eq!(projected, expected);
    }

    #[test]
    fn projector_never_moves_sections_without_a_stat(
        current in prop_oneof![
            Just(SectionStatus::Planned),
            Just(SectionStatus::InProgress),
            Just(SectionStatus::Implemented),
        ]
    ) {
        prop_assert_eq!(project(None, current), current);
    }
}
