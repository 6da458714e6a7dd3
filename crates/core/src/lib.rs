//! # DayWindow Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The meeting-window validator
//! - Port interfaces (traits) for supplying the window
//!
//! ## Architecture Principles
//! - Only depends on `daywindow-domain`
//! - No file, environment or platform code
//! - Synchronous and side-effect free apart from `tracing` events

pub mod scheduling;

pub use scheduling::{is_within_window, MeetingWindowValidator, WindowProvider};
