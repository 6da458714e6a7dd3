//! Meeting-window validation
//!
//! The validator owns an immutable [`AvailabilityWindow`] and answers
//! whether a proposed meeting fits inside it.
//!
//! [`AvailabilityWindow`]: daywindow_domain::AvailabilityWindow

pub mod ports;
pub mod service;

pub use ports::WindowProvider;
pub use service::{is_within_window, MeetingWindowValidator};
