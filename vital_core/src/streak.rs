//! Consecutive-day streak calculation.
//!
//! A streak is the number of consecutive calendar days ending at
//! `as_of` with at least one logged entry of a given kind. Presence is
//! an existence check, not a sum-threshold check.

use crate::{MetricKind, MetricStore, Result};
use chrono::{Duration, NaiveDate};
use uuid::Uuid;

/// Maximum number of days the streak walk looks back.
///
/// Known limitation: a full 7-day streak and any longer streak are
/// indistinguishable. This matches the lookback window used by the
/// weekly report and is kept on purpose.
pub const STREAK_WINDOW_DAYS: u32 = 7;

/// Count consecutive days with at least one entry of `kind`, walking
/// backward from `as_of`.
///
/// If `as_of` itself has no entry the streak is 0, even when earlier
/// days are populated; there is no entry-in-progress semantics.
pub fn streak(
    store: &impl MetricStore,
    user_id: Uuid,
    kind: MetricKind,
    as_of: NaiveDate,
) -> Result<u32> {
    let mut count = 0;

    for offset in 0..STREAK_WINDOW_DAYS {
        let day = as_of - Duration::days(i64::from(offset));
        if store.exists_on_date(user_id, kind, day)? {
            count += 1;
        } else {
            break;
        }
    }

    tracing::debug!("{} streak for {} as of {}: {} days", kind, user_id, as_of, count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JsonlLedger, LogEntry};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    fn ledger_with_water_days(user: Uuid, days_ago: &[i64]) -> (tempfile::TempDir, JsonlLedger) {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut ledger = JsonlLedger::new(temp_dir.path());
        for &ago in days_ago {
            let entry =
                LogEntry::new(user, MetricKind::Water, 500.0, day() - Duration::days(ago)).unwrap();
            ledger.append(&entry).unwrap();
        }
        (temp_dir, ledger)
    }

    #[test]
    fn test_streak_counts_until_first_gap() {
        let user = Uuid::new_v4();
        // today, -1, -2 present; -3 absent; -4 present but unreachable
        let (_dir, ledger) = ledger_with_water_days(user, &[0, 1, 2, 4]);

        let count = streak(&ledger, user, MetricKind::Water, day()).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_no_entry_today_means_zero() {
        let user = Uuid::new_v4();
        let (_dir, ledger) = ledger_with_water_days(user, &[1, 2, 3]);

        let count = streak(&ledger, user, MetricKind::Water, day()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_streak_caps_at_window() {
        let user = Uuid::new_v4();
        // 10 unbroken days; only 7 are visible
        let (_dir, ledger) = ledger_with_water_days(user, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let count = streak(&ledger, user, MetricKind::Water, day()).unwrap();
        assert_eq!(count, STREAK_WINDOW_DAYS);
    }

    #[test]
    fn test_streak_is_per_kind() {
        let user = Uuid::new_v4();
        let (_dir, ledger) = ledger_with_water_days(user, &[0, 1]);

        let count = streak(&ledger, user, MetricKind::Sleep, day()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_empty_ledger_streak_is_zero() {
        let user = Uuid::new_v4();
        let (_dir, ledger) = ledger_with_water_days(user, &[]);

        let count = streak(&ledger, user, MetricKind::Water, day()).unwrap();
        assert_eq!(count, 0);
    }
}
