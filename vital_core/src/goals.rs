//! Fixed daily goal targets and per-entry advisory thresholds.
//!
//! The goal table is a process-wide constant: water in ml, sleep in
//! hours, exercise in minutes. It is not configurable on purpose.

use crate::MetricKind;

/// Daily water target in millilitres
pub const WATER_TARGET_ML: f64 = 2500.0;

/// Daily sleep target in hours
pub const SLEEP_TARGET_HRS: f64 = 7.0;

/// Daily exercise target in minutes
pub const EXERCISE_TARGET_MINS: f64 = 30.0;

/// Daily target for the given metric kind.
///
/// Total over the enum; unknown-kind failures happen at the string
/// parse boundary (`MetricKind::from_str`), not here.
pub fn target(kind: MetricKind) -> f64 {
    match kind {
        MetricKind::Water => WATER_TARGET_ML,
        MetricKind::Sleep => SLEEP_TARGET_HRS,
        MetricKind::Exercise => EXERCISE_TARGET_MINS,
    }
}

/// Advisory warning for a single entry that falls below the
/// per-entry threshold. Returns None when the value is fine.
pub fn entry_warning(kind: MetricKind, value: f64) -> Option<&'static str> {
    match kind {
        MetricKind::Water if value < 500.0 => Some("Low water intake for this entry"),
        MetricKind::Sleep if value < SLEEP_TARGET_HRS => Some("Sleep less than recommended"),
        MetricKind::Exercise if value < EXERCISE_TARGET_MINS => Some("Try to exercise more"),
        _ => None,
    }
}

/// Warning shown when a lifetime total falls short of the daily target.
pub fn shortfall_warning(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::Water => "Low water intake",
        MetricKind::Sleep => "Sleep is insufficient",
        MetricKind::Exercise => "Low physical activity",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        assert_eq!(target(MetricKind::Water), 2500.0);
        assert_eq!(target(MetricKind::Sleep), 7.0);
        assert_eq!(target(MetricKind::Exercise), 30.0);
    }

    #[test]
    fn test_entry_warning_thresholds() {
        assert!(entry_warning(MetricKind::Water, 499.0).is_some());
        assert!(entry_warning(MetricKind::Water, 500.0).is_none());
        assert!(entry_warning(MetricKind::Sleep, 6.5).is_some());
        assert!(entry_warning(MetricKind::Sleep, 7.0).is_none());
        assert!(entry_warning(MetricKind::Exercise, 29.0).is_some());
        assert!(entry_warning(MetricKind::Exercise, 30.0).is_none());
    }
}
