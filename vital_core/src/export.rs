//! Report export.
//!
//! Writes the raw ledger entries as CSV and renders a plain-text
//! report body composing profile, BMI, recommendations, and weekly
//! averages. Document layout (PDF, pagination) is out of scope.

use crate::{goals, LogEntry, MetricKind, Profile, Result, Summary, WeeklyAggregate};
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    date: String,
    kind: String,
    value: f64,
    unit: &'static str,
}

impl From<&LogEntry> for CsvRow {
    fn from(entry: &LogEntry) -> Self {
        CsvRow {
            date: entry.date.to_string(),
            kind: entry.kind.to_string(),
            value: entry.value,
            unit: entry.kind.unit(),
        }
    }
}

/// Write all log entries to a CSV file.
///
/// The export is a full snapshot: an existing file is truncated and
/// rewritten so repeated exports never duplicate rows. The file is
/// fsynced before returning.
pub fn write_entries_csv(entries: &[LogEntry], csv_path: &Path) -> Result<usize> {
    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(csv_path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(file);

    for entry in entries {
        writer.serialize(CsvRow::from(entry))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} entries to {:?}", entries.len(), csv_path);
    Ok(entries.len())
}

/// Render the plain-text report body.
pub fn render_report(
    profile: &Profile,
    summary: &Summary,
    weekly: &WeeklyAggregate,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "HEALTH REPORT: {}", profile.name);
    let _ = writeln!(
        out,
        "BMI: {:.2} | Status: {}",
        summary.bmi, summary.bmi_category
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "LIFETIME TOTALS:");
    for kind in MetricKind::ALL {
        let progress = &summary.progress[&kind];
        let _ = writeln!(
            out,
            "  {}: {} / {} {}",
            kind,
            progress.total,
            progress.target,
            kind.unit()
        );
        if !progress.met {
            let _ = writeln!(out, "    ! {}", goals::shortfall_warning(kind));
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Water streak: {} days", summary.water_streak_days);
    let _ = writeln!(out);

    let _ = writeln!(out, "WEEKLY AVERAGES (since {}):", weekly.since);
    if weekly.is_empty() {
        let _ = writeln!(out, "  No logs found in last 7 days");
    } else {
        for (kind, avg) in &weekly.averages {
            let _ = writeln!(out, "  {}: {:.2} {}", kind, avg, kind.unit());
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "DIET SUGGESTION");
    let _ = writeln!(out, "{}", summary.recommendation.diet);
    let _ = writeln!(out);
    let _ = writeln!(out, "EXERCISE SUGGESTION");
    let _ = writeln!(out, "{}", summary.recommendation.exercise);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{summary, JsonlLedger, MetricStore};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    #[test]
    fn test_csv_export_row_count() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("report.csv");
        let user = Uuid::new_v4();

        let entries: Vec<_> = (0..3)
            .map(|i| LogEntry::new(user, MetricKind::Water, 500.0 + f64::from(i), day()).unwrap())
            .collect();

        let count = write_entries_csv(&entries, &csv_path).unwrap();
        assert_eq!(count, 3);

        let reader = csv::Reader::from_path(&csv_path).unwrap();
        assert_eq!(reader.into_records().count(), 3);
    }

    #[test]
    fn test_csv_export_is_a_snapshot_not_an_append() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("report.csv");
        let user = Uuid::new_v4();

        // Exporting the same one-entry ledger twice must not duplicate rows
        let entry = LogEntry::new(user, MetricKind::Sleep, 7.0, day()).unwrap();
        write_entries_csv(std::slice::from_ref(&entry), &csv_path).unwrap();
        write_entries_csv(std::slice::from_ref(&entry), &csv_path).unwrap();

        let reader = csv::Reader::from_path(&csv_path).unwrap();
        assert_eq!(reader.into_records().count(), 1);
    }

    #[test]
    fn test_csv_export_replaces_stale_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("report.csv");
        let user = Uuid::new_v4();

        let old: Vec<_> = (0..3)
            .map(|_| LogEntry::new(user, MetricKind::Water, 500.0, day()).unwrap())
            .collect();
        write_entries_csv(&old, &csv_path).unwrap();

        let fresh = [LogEntry::new(user, MetricKind::Exercise, 30.0, day()).unwrap()];
        write_entries_csv(&fresh, &csv_path).unwrap();

        let mut reader = csv::Reader::from_path(&csv_path).unwrap();
        let rows: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "exercise");
    }

    #[test]
    fn test_csv_export_empty_entries() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("report.csv");

        let count = write_entries_csv(&[], &csv_path).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_report_body_contains_sections() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut ledger = JsonlLedger::new(temp_dir.path());
        let profile = Profile::new("reza", 45, 90.0, 170.0).unwrap();

        let entry = LogEntry::new(profile.id, MetricKind::Water, 800.0, day()).unwrap();
        ledger.append(&entry).unwrap();

        let summary = summary::build_summary(&ledger, &profile, day()).unwrap();
        let weekly = summary::weekly_aggregate(&ledger, profile.id, day()).unwrap();

        let body = render_report(&profile, &summary, &weekly);
        assert!(body.contains("HEALTH REPORT: reza"));
        assert!(body.contains("Status: Overweight"));
        assert!(body.contains("DIET SUGGESTION"));
        assert!(body.contains("EXERCISE SUGGESTION"));
        assert!(body.contains("Focus on yoga & flexibility"));
        assert!(body.contains("water: 800 / 2500 ml"));
    }

    #[test]
    fn test_report_body_empty_week() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ledger = JsonlLedger::new(temp_dir.path());
        let profile = Profile::new("a", 30, 70.0, 175.0).unwrap();

        let summary = summary::build_summary(&ledger, &profile, day()).unwrap();
        let weekly = summary::weekly_aggregate(&ledger, profile.id, day()).unwrap();

        let body = render_report(&profile, &summary, &weekly);
        assert!(body.contains("No logs found in last 7 days"));
    }
}
