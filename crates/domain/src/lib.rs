//! # DayWindow Domain
//!
//! Value types for daily availability checks.
//!
//! This crate contains:
//! - `TimeOfDay` and `MeetingDuration` (parsed once, compared structurally)
//! - `AvailabilityWindow`, `MeetingRequest` and `FitOutcome`
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other DayWindow crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
