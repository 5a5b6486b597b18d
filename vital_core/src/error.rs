//! Error types for the vital_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for vital_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Metric kind string is not one of water / sleep / exercise
    #[error("unknown metric kind: {0}")]
    UnknownMetricKind(String),

    /// Weight or height is non-positive (or not a finite number)
    #[error("invalid anthropometrics: weight {weight_kg} kg, height {height_cm} cm")]
    InvalidAnthropometrics { weight_kg: f64, height_cm: f64 },

    /// Mood score outside the 1..=5 scale
    #[error("invalid mood score {0}, expected 1..=5")]
    InvalidMoodScore(i64),

    /// Metric value is negative or not a finite number
    #[error("invalid metric value: {0}")]
    InvalidMetricValue(f64),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Opaque storage-layer failure
    #[error("Storage error: {0}")]
    Storage(String),
}
