//! Append-only metrics ledger.
//!
//! Entries are appended to JSONL (JSON Lines) files with file locking
//! so that a single append is atomic with respect to concurrent reads.
//! The core consumes the ledger through the narrow [`MetricStore`]
//! trait; aggregation logic never touches files directly.

use crate::{LogEntry, MetricKind, MoodEntry, Result};
use chrono::NaiveDate;
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Narrow storage seam between the aggregation core and persistence.
pub trait MetricStore {
    /// Append a metric entry to the ledger.
    fn append(&mut self, entry: &LogEntry) -> Result<()>;

    /// Append a mood entry. Write-only: nothing in the core reads
    /// moods back.
    fn append_mood(&mut self, entry: &MoodEntry) -> Result<()>;

    /// Sum of all entries of a kind for a user. `since` of None means
    /// lifetime (no date bound).
    fn sum_by_kind(&self, user_id: Uuid, kind: MetricKind, since: Option<NaiveDate>)
        -> Result<f64>;

    /// Whether at least one entry of a kind exists on the given day.
    fn exists_on_date(&self, user_id: Uuid, kind: MetricKind, date: NaiveDate) -> Result<bool>;

    /// Per-kind averages over entries dated on or after `since`.
    /// Kinds without any in-window entry are absent from the map.
    fn average_by_kind_since(
        &self,
        user_id: Uuid,
        since: NaiveDate,
    ) -> Result<BTreeMap<MetricKind, f64>>;

    /// All entries for a user, oldest first. Used by report export.
    fn entries(&self, user_id: Uuid) -> Result<Vec<LogEntry>>;
}

/// JSONL-backed ledger with file locking.
pub struct JsonlLedger {
    metrics_path: PathBuf,
    moods_path: PathBuf,
}

impl JsonlLedger {
    /// Create a ledger rooted at the given directory. Files are
    /// created lazily on first append.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            metrics_path: dir.join("metrics.jsonl"),
            moods_path: dir.join("moods.jsonl"),
        }
    }

    pub fn metrics_path(&self) -> &Path {
        &self.metrics_path
    }

    fn append_line<T: serde::Serialize>(path: &Path, record: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        // Exclusive lock keeps a single append atomic w.r.t. readers
        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(record)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;
        Ok(())
    }

    fn load_entries(&self) -> Result<Vec<LogEntry>> {
        read_entries(&self.metrics_path)
    }
}

impl MetricStore for JsonlLedger {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        Self::append_line(&self.metrics_path, entry)?;
        tracing::debug!(
            "Appended {} entry ({} {}) for {}",
            entry.kind,
            entry.value,
            entry.kind.unit(),
            entry.date
        );
        Ok(())
    }

    fn append_mood(&mut self, entry: &MoodEntry) -> Result<()> {
        Self::append_line(&self.moods_path, entry)?;
        tracing::debug!("Appended mood {} for {}", entry.score, entry.date);
        Ok(())
    }

    fn sum_by_kind(
        &self,
        user_id: Uuid,
        kind: MetricKind,
        since: Option<NaiveDate>,
    ) -> Result<f64> {
        let sum = self
            .load_entries()?
            .iter()
            .filter(|e| e.user_id == user_id && e.kind == kind)
            .filter(|e| since.map_or(true, |s| e.date >= s))
            .map(|e| e.value)
            .sum();
        Ok(sum)
    }

    fn exists_on_date(&self, user_id: Uuid, kind: MetricKind, date: NaiveDate) -> Result<bool> {
        Ok(self
            .load_entries()?
            .iter()
            .any(|e| e.user_id == user_id && e.kind == kind && e.date == date))
    }

    fn average_by_kind_since(
        &self,
        user_id: Uuid,
        since: NaiveDate,
    ) -> Result<BTreeMap<MetricKind, f64>> {
        let mut sums: BTreeMap<MetricKind, (f64, u32)> = BTreeMap::new();

        for entry in self.load_entries()? {
            if entry.user_id != user_id || entry.date < since {
                continue;
            }
            let slot = sums.entry(entry.kind).or_insert((0.0, 0));
            slot.0 += entry.value;
            slot.1 += 1;
        }

        Ok(sums
            .into_iter()
            .map(|(kind, (sum, count))| (kind, sum / f64::from(count)))
            .collect())
    }

    fn entries(&self, user_id: Uuid) -> Result<Vec<LogEntry>> {
        let mut entries: Vec<_> = self
            .load_entries()?
            .into_iter()
            .filter(|e| e.user_id == user_id)
            .collect();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }
}

/// Read all entries from a ledger file.
///
/// Unparseable lines are logged and skipped so one corrupt line never
/// takes the whole ledger down.
pub fn read_entries(path: &Path) -> Result<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    // Shared lock for reading
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut entries = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<LogEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Failed to parse ledger line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} entries from ledger", entries.len());
    Ok(entries)
}
