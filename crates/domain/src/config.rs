//! Configuration structures
//!
//! Every field carries a serde default so a partial TOML/JSON file (or an
//! empty one) yields the reference behaviour: a 07:30-17:45 window and
//! `info` logging.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DAY_END, DEFAULT_DAY_START, DEFAULT_LOG_LEVEL};
use crate::errors::Result;
use crate::types::AvailabilityWindow;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Check the parts that can be invalid on their own.
    ///
    /// # Errors
    /// Whatever [`WindowConfig::to_window`] reports.
    pub fn validate(&self) -> Result<()> {
        self.window.to_window().map(|_| ())
    }
}

/// Daily availability bounds, kept as the raw `H:MM`/`HH:MM` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_day_start")]
    pub day_start: String,
    #[serde(default = "default_day_end")]
    pub day_end: String,
}

impl WindowConfig {
    /// Parse both bounds into a validated window.
    ///
    /// # Errors
    /// `InvalidTimeFormat` or `InvalidWindowConfiguration`.
    pub fn to_window(&self) -> Result<AvailabilityWindow> {
        AvailabilityWindow::parse(&self.day_start, &self.day_end)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { day_start: default_day_start(), day_end: default_day_end() }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_day_start() -> String {
    DEFAULT_DAY_START.to_string()
}

fn default_day_end() -> String {
    DEFAULT_DAY_END.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
