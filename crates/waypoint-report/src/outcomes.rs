//! Outcomes report
//!
//! Synthesizes the "Outcomes & Learning" section: a KPI movement table
//! comparing the baseline snapshot against the latest one, the realized
//! ROI figures, and a templated next-steps list. Requires at least two
//! snapshots; with fewer there is nothing to compare and no report is
//! produced.

use std::fmt::Write as _;
use waypoint_domain::{MetricSnapshot, Outcome};

/// Improvement arrow for a delta, given the metric's direction
fn arrow(delta: f64, lower_is_better: bool) -> &'static str {
    let improved = if lower_is_better { delta <= 0.0 } else { delta >= 0.0 };
    if improved {
        "📈"
    } else {
        "📉"
    }
}

struct KpiRow {
    name: &'static str,
    baseline: String,
    latest: String,
    change: String,
}

impl KpiRow {
    fn plain(name: &'static str, baseline: f64, latest: f64, lower_is_better: bool) -> Self {
        let delta = latest - baseline;
        Self {
            name,
            baseline: format!("{baseline:.1}"),
            latest: format!("{latest:.1}"),
            change: format!("{} {delta:+.1}", arrow(delta, lower_is_better)),
        }
    }

    /// Rates are stored in `[0, 1]` and shown as percentages
    fn rate(name: &'static str, baseline: f64, latest: f64) -> Self {
        let delta = (latest - baseline) * 100.0;
        Self {
            name,
            baseline: format!("{:.1}%", baseline * 100.0),
            latest: format!("{:.1}%", latest * 100.0),
            change: format!("{} {delta:+.1}%", arrow(delta, false)),
        }
    }
}

/// Render the outcomes report, or `None` with fewer than two snapshots
///
/// The baseline is the first snapshot by array position and the latest is
/// the last; callers supply snapshots in chronological order.
#[must_use]
pub fn render_outcomes(snapshots: &[MetricSnapshot], outcome: &Outcome) -> Option<String> {
    if snapshots.len() < 2 {
        return None;
    }
    let baseline = snapshots.first()?;
    let latest = snapshots.last()?;

    let rows = [
        KpiRow::plain(
            "Response time (ms)",
            baseline.response_time_ms,
            latest.response_time_ms,
            true,
        ),
        KpiRow::rate(
            "Conversion rate",
            baseline.conversion_rate,
            latest.conversion_rate,
        ),
        KpiRow::rate("Adoption rate", baseline.adoption_rate, latest.adoption_rate),
        KpiRow::plain(
            "Ops hours / week",
            baseline.ops_hours_per_week,
            latest.ops_hours_per_week,
            true,
        ),
        KpiRow::plain(
            "Satisfaction (1-10)",
            baseline.satisfaction_score,
            latest.satisfaction_score,
            false,
        ),
    ];

    let mut report = format!(
        "Realized results for this roadmap, comparing the \"{}\" measurement against \"{}\".\n\n",
        baseline.label, latest.label
    );

    report.push_str("| Metric | Baseline | Latest | Change |\n");
    report.push_str("|--------|----------|--------|--------|\n");
    for row in &rows {
        let _ = writeln!(
            report,
            "| {} | {} | {} | {} |",
            row.name, row.baseline, row.latest, row.change
        );
    }

    let _ = write!(
        report,
        "\n### Realized ROI\n\n\
         - Time savings: {:.1} hours/week\n\
         - Revenue impact: ${:.0}\n\
         - Cost avoidance: ${:.0}\n\
         - Net ROI: {:.0}%\n\n\
         **Assessment:** {}\n\n\
         ### Next steps\n\n",
        outcome.time_savings_hours_per_week,
        outcome.revenue_impact,
        outcome.cost_avoidance,
        outcome.net_roi_percent,
        outcome.qualitative_status,
    );

    let roi_step = if outcome.net_roi_percent >= 50.0 {
        "Present these results to the steering group and green-light the next wave of automation candidates."
    } else {
        "Revisit the scope and cost profile of the current wave before committing further investment."
    };
    let adoption_step = if latest.adoption_rate >= 0.5 {
        "Document the rollout playbook while the launch context is fresh."
    } else {
        "Run a focused adoption push with the teams that have not picked up the new workflows."
    };
    let satisfaction_step = if latest.satisfaction_score >= 7.0 {
        "Keep the monthly pulse survey running to catch regressions early."
    } else {
        "Schedule stakeholder interviews to find out what is dragging satisfaction down."
    };

    let _ = writeln!(report, "- {roi_step}");
    let _ = writeln!(report, "- {adoption_step}");
    let _ = writeln!(report, "- {satisfaction_step}");

    Some(report)
}
