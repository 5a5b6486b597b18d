//! Summary and weekly aggregation.
//!
//! `build_summary` composes the goal table, BMI classifier, streak
//! walk, and recommendation engine into a single immutable value
//! object. `weekly_aggregate` computes per-kind averages over the
//! trailing 7-day window.

use crate::{goals, recommend, streak, MetricKind, MetricProgress, MetricStore, Profile, Result,
            Summary, WeeklyAggregate};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Build the full health summary for a profile as of `today`.
///
/// Per-kind totals are lifetime sums with no date bound; only the
/// weekly report is windowed. Errors from the store or the classifier
/// propagate untouched.
pub fn build_summary(
    store: &impl MetricStore,
    profile: &Profile,
    today: NaiveDate,
) -> Result<Summary> {
    let mut progress = BTreeMap::new();
    for kind in MetricKind::ALL {
        let total = store.sum_by_kind(profile.id, kind, None)?;
        let target = goals::target(kind);
        progress.insert(
            kind,
            MetricProgress {
                total,
                target,
                met: total >= target,
            },
        );
    }

    let (bmi, bmi_category) = crate::bmi::classify(profile.weight_kg, profile.height_cm)?;
    let water_streak_days = streak::streak(store, profile.id, MetricKind::Water, today)?;
    let recommendation = recommend::recommend(bmi_category, profile.age);

    tracing::info!(
        "Built summary for {}: bmi {:.2} ({}), water streak {} days",
        profile.name,
        bmi,
        bmi_category,
        water_streak_days
    );

    Ok(Summary {
        progress,
        bmi,
        bmi_category,
        water_streak_days,
        recommendation,
    })
}

/// Per-kind averages over entries from the trailing 7 days.
///
/// The window is `date >= today - 7 days`: an entry exactly 7 days old
/// is included, an 8-day-old entry is not. Kinds with no in-window
/// entries are absent from the result.
pub fn weekly_aggregate(
    store: &impl MetricStore,
    user_id: Uuid,
    today: NaiveDate,
) -> Result<WeeklyAggregate> {
    let since = today - Duration::days(7);
    let averages = store.average_by_kind_since(user_id, since)?;
    Ok(WeeklyAggregate { since, averages })
}
