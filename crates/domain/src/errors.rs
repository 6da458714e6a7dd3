//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for DayWindow
///
/// A meeting that does not fit its window is *not* an error; callers get
/// `Ok(false)` (or a non-`Fits` outcome) for that. Every variant here means
/// the question itself could not be answered.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DayWindowError {
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("Invalid window configuration: day start {day_start} is after day end {day_end}")]
    InvalidWindowConfiguration { day_start: String, day_end: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DayWindowError {
    /// True for errors caused by the per-call input rather than setup.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidTimeFormat(_) | Self::InvalidDuration(_))
    }
}

/// Result type alias for DayWindow operations
pub type Result<T> = std::result::Result<T, DayWindowError>;
