//! Domain types and models

pub mod time_of_day;
pub mod window;

pub use time_of_day::{MeetingDuration, TimeOfDay};
pub use window::{AvailabilityWindow, FitOutcome, MeetingRequest};
