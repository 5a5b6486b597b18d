#![forbid(unsafe_code)]

//! Core domain model and business logic for the Vital health tracker.
//!
//! This crate provides:
//! - Domain types (metric kinds, log entries, mood, profile)
//! - The append-only metrics ledger and its storage trait
//! - Goal policy, streak calculation, BMI classification
//! - Diet/exercise recommendations
//! - Summary composition and weekly aggregation
//! - Report export (CSV + text)

pub mod types;
pub mod error;
pub mod goals;
pub mod config;
pub mod logging;
pub mod ledger;
pub mod profile;
pub mod streak;
pub mod bmi;
pub mod recommend;
pub mod summary;
pub mod export;
pub mod tips;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use ledger::{JsonlLedger, MetricStore};
pub use streak::{streak as metric_streak, STREAK_WINDOW_DAYS};
pub use bmi::classify as classify_bmi;
pub use recommend::recommend;
pub use summary::{build_summary, weekly_aggregate};
pub use export::{render_report, write_entries_csv};
pub use tips::pick_tip;
