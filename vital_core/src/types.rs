//! Core domain types for the Vital health-logging system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Metric kinds and log entries
//! - Mood entries
//! - The user profile
//! - BMI classification results
//! - Derived summary / weekly aggregate value objects

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Metric Types
// ============================================================================

/// The three tracked measurement categories.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Water,
    Sleep,
    Exercise,
}

impl MetricKind {
    /// All kinds, in display order.
    pub const ALL: [MetricKind; 3] = [MetricKind::Water, MetricKind::Sleep, MetricKind::Exercise];

    /// Measurement unit for this kind.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Water => "ml",
            MetricKind::Sleep => "hrs",
            MetricKind::Exercise => "mins",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::Water => write!(f, "water"),
            MetricKind::Sleep => write!(f, "sleep"),
            MetricKind::Exercise => write!(f, "exercise"),
        }
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "water" => Ok(MetricKind::Water),
            "sleep" => Ok(MetricKind::Sleep),
            "exercise" => Ok(MetricKind::Exercise),
            other => Err(Error::UnknownMetricKind(other.to_string())),
        }
    }
}

/// A single logged measurement.
///
/// Multiple entries per user per day per kind are allowed; aggregation
/// always sums them, it never overwrites.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: MetricKind,
    pub value: f64,
    pub date: NaiveDate,
}

impl LogEntry {
    /// Create a validated entry. Values must be finite and non-negative.
    pub fn new(user_id: Uuid, kind: MetricKind, value: f64, date: NaiveDate) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidMetricValue(value));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            value,
            date,
        })
    }
}

/// A daily mood rating on a 1..=5 scale. Write-only: no aggregation
/// logic reads these back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoodEntry {
    pub user_id: Uuid,
    pub score: u8,
    pub date: NaiveDate,
}

impl MoodEntry {
    /// Create a validated mood entry (score must be within 1..=5).
    pub fn new(user_id: Uuid, score: i64, date: NaiveDate) -> Result<Self> {
        if !(1..=5).contains(&score) {
            return Err(Error::InvalidMoodScore(score));
        }
        Ok(Self {
            user_id,
            score: score as u8,
            date,
        })
    }
}

// ============================================================================
// Profile
// ============================================================================

/// The single user's profile. Immutable after creation; `profile set`
/// replaces it wholesale.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a validated profile. Weight and height must be positive.
    pub fn new(name: impl Into<String>, age: u32, weight_kg: f64, height_cm: f64) -> Result<Self> {
        crate::bmi::validate_anthropometrics(weight_kg, height_cm)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            weight_kg,
            height_cm,
            created_at: Utc::now(),
        })
    }
}

// ============================================================================
// Derived Value Objects
// ============================================================================

/// BMI classification tier.
///
/// Three tiers only: everything at or above 25 is Overweight. There is
/// deliberately no Obese tier; this matches the behavior this tool has
/// always had rather than the standard 4-tier classification.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::Normal => write!(f, "Normal"),
            BmiCategory::Overweight => write!(f, "Overweight"),
        }
    }
}

/// Diet and exercise guidance text, selected by BMI category with
/// age-band overlays applied.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub diet: String,
    pub exercise: String,
}

/// Lifetime progress against the daily target for one metric kind.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetricProgress {
    pub total: f64,
    pub target: f64,
    pub met: bool,
}

/// The full health summary. Recomputed on every request, never cached.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Summary {
    pub progress: BTreeMap<MetricKind, MetricProgress>,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub water_streak_days: u32,
    pub recommendation: Recommendation,
}

/// Per-kind averages over the trailing 7-day window.
///
/// Kinds with no entries in the window are absent from the map, not
/// reported as zero.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeeklyAggregate {
    pub since: NaiveDate,
    pub averages: BTreeMap<MetricKind, f64>,
}

impl WeeklyAggregate {
    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }
}
