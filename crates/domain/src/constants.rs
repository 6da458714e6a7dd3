//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Default availability window
pub const DEFAULT_DAY_START: &str = "07:30";
pub const DEFAULT_DAY_END: &str = "17:45";

// Clock arithmetic
pub const MINUTES_PER_HOUR: u16 = 60;
pub const HOURS_PER_DAY: u16 = 24;
pub const MINUTES_PER_DAY: u16 = MINUTES_PER_HOUR * HOURS_PER_DAY;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Environment variables read by the configuration loader
pub const ENV_DAY_START: &str = "DAYWINDOW_DAY_START";
pub const ENV_DAY_END: &str = "DAYWINDOW_DAY_END";
pub const ENV_LOG_LEVEL: &str = "DAYWINDOW_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "DAYWINDOW_LOG_JSON";
