//! Availability window, meeting requests and fit outcomes

use serde::{Deserialize, Serialize};

use super::time_of_day::{MeetingDuration, TimeOfDay};
use crate::constants::{DEFAULT_DAY_END, DEFAULT_DAY_START};
use crate::errors::{DayWindowError, Result};
use crate::impl_domain_status_conversions;

/// Why a meeting request does or does not fit a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitOutcome {
    Fits,
    StartsBeforeWindow,
    EndsAfterWindow,
    SpillsPastMidnight,
}

impl_domain_status_conversions!(FitOutcome {
    Fits => "fits",
    StartsBeforeWindow => "starts_before_window",
    EndsAfterWindow => "ends_after_window",
    SpillsPastMidnight => "spills_past_midnight",
});

impl FitOutcome {
    /// True only for [`FitOutcome::Fits`].
    pub const fn fits(&self) -> bool {
        matches!(self, Self::Fits)
    }
}

/// Inclusive same-day interval in which meetings may be scheduled.
///
/// Invariant: `day_start <= day_end`. The window never wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AvailabilityWindow {
    day_start: TimeOfDay,
    day_end: TimeOfDay,
}

impl AvailabilityWindow {
    /// # Errors
    /// `InvalidWindowConfiguration` when `day_start` is after `day_end`.
    pub fn new(day_start: TimeOfDay, day_end: TimeOfDay) -> Result<Self> {
        if day_start > day_end {
            return Err(DayWindowError::InvalidWindowConfiguration {
                day_start: day_start.to_string(),
                day_end: day_end.to_string(),
            });
        }
        Ok(Self { day_start, day_end })
    }

    /// Parse both endpoints independently and validate the pair.
    ///
    /// # Errors
    /// `InvalidTimeFormat` for a malformed endpoint, otherwise as
    /// [`Self::new`].
    pub fn parse(day_start: &str, day_end: &str) -> Result<Self> {
        let start = day_start.parse::<TimeOfDay>()?;
        let end = day_end.parse::<TimeOfDay>()?;
        Self::new(start, end)
    }

    /// Earliest allowed meeting start.
    pub const fn day_start(&self) -> TimeOfDay {
        self.day_start
    }

    /// Latest allowed meeting end.
    pub const fn day_end(&self) -> TimeOfDay {
        self.day_end
    }

    /// Whether `time` falls inside the window, endpoints included.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.day_start <= time && time <= self.day_end
    }

    /// Explain how `request` relates to this window.
    pub fn assess(&self, request: &MeetingRequest) -> FitOutcome {
        let Some(end) = request.end() else {
            return FitOutcome::SpillsPastMidnight;
        };
        if request.start < self.day_start {
            FitOutcome::StartsBeforeWindow
        } else if end > self.day_end {
            FitOutcome::EndsAfterWindow
        } else {
            FitOutcome::Fits
        }
    }

    /// Shorthand for `self.assess(request).fits()`.
    pub fn fits(&self, request: &MeetingRequest) -> bool {
        self.assess(request).fits()
    }
}

impl Default for AvailabilityWindow {
    fn default() -> Self {
        // Unreachable with the shipped constants.
        Self::parse(DEFAULT_DAY_START, DEFAULT_DAY_END).unwrap_or(Self {
            day_start: TimeOfDay::MIDNIGHT,
            day_end: TimeOfDay::LAST_MINUTE,
        })
    }
}

#[derive(Deserialize)]
struct RawWindow {
    day_start: TimeOfDay,
    day_end: TimeOfDay,
}

impl<'de> Deserialize<'de> for AvailabilityWindow {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawWindow::deserialize(deserializer)?;
        Self::new(raw.day_start, raw.day_end).map_err(serde::de::Error::custom)
    }
}

/// A proposed meeting: start time plus length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub start: TimeOfDay,
    pub duration: MeetingDuration,
}

impl MeetingRequest {
    /// Build a request from already parsed parts.
    pub const fn new(start: TimeOfDay, duration: MeetingDuration) -> Self {
        Self { start, duration }
    }

    /// Parse a raw start string and a signed minute count.
    ///
    /// # Errors
    /// `InvalidTimeFormat` for a malformed start, `InvalidDuration` for a
    /// negative duration. The start is checked first.
    pub fn parse(start: &str, duration_minutes: i64) -> Result<Self> {
        let start = start.parse::<TimeOfDay>()?;
        let duration = MeetingDuration::try_from(duration_minutes)?;
        Ok(Self { start, duration })
    }

    /// End of the meeting, `None` if it would run into the next day.
    pub fn end(&self) -> Option<TimeOfDay> {
        self.start.checked_add(self.duration)
    }
}
