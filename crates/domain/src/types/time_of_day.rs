//! Wall-clock time and meeting duration value types

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::constants::{HOURS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::errors::{DayWindowError, Result};

/// A point within one calendar day, minute precision.
///
/// Ordering is lexicographic on `(hour, minute)`, which the derive gives us
/// because of the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// First minute of the day.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };
    /// Last representable minute of the day.
    pub const LAST_MINUTE: Self = Self { hour: 23, minute: 59 };

    /// Build a time from its parts.
    ///
    /// # Errors
    /// `InvalidTimeFormat` when `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if u16::from(hour) >= HOURS_PER_DAY || u16::from(minute) >= MINUTES_PER_HOUR {
            return Err(DayWindowError::InvalidTimeFormat(format!(
                "{hour}:{minute:02} is outside 00:00-23:59"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Hour of the day, `0..=23`.
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour, `0..=59`.
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since 00:00.
    pub fn minutes_since_midnight(&self) -> u16 {
        u16::from(self.hour) * MINUTES_PER_HOUR + u16::from(self.minute)
    }

    /// Inverse of [`Self::minutes_since_midnight`]; `None` past 23:59.
    pub fn from_minutes_since_midnight(minutes: u16) -> Option<Self> {
        if minutes >= MINUTES_PER_DAY {
            return None;
        }
        let hour = u8::try_from(minutes / MINUTES_PER_HOUR).ok()?;
        let minute = u8::try_from(minutes % MINUTES_PER_HOUR).ok()?;
        Some(Self { hour, minute })
    }

    /// Add a duration without wrapping.
    ///
    /// Returns `None` when the result would land on the next day.
    pub fn checked_add(&self, duration: MeetingDuration) -> Option<Self> {
        let total = u32::from(self.minutes_since_midnight()).checked_add(duration.minutes())?;
        Self::from_minutes_since_midnight(u16::try_from(total).ok()?)
    }

    /// The same instant as a chrono time, seconds zeroed.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl FromStr for TimeOfDay {
    type Err = DayWindowError;

    /// Parses `H:MM` or `HH:MM` (24-hour clock).
    ///
    /// The minute must always have two digits; signs, seconds and any other
    /// separator are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DayWindowError::InvalidTimeFormat(s.to_string());
        let trimmed = s.trim();

        let (hour_part, minute_part) = trimmed.split_once(':').ok_or_else(invalid)?;

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        let hour_ok = matches!(hour_part.len(), 1 | 2) && all_digits(hour_part);
        let minute_ok = minute_part.len() == 2 && all_digits(minute_part);
        if !hour_ok || !minute_ok {
            return Err(invalid());
        }

        let hour: u8 = hour_part.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_part.parse().map_err(|_| invalid())?;

        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DayWindowError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(value: TimeOfDay) -> Self {
        value.to_naive_time()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Non-negative meeting length in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingDuration(u32);

impl MeetingDuration {
    /// A zero-length meeting.
    pub const ZERO: Self = Self(0);

    /// Wrap an already non-negative minute count.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Length in whole minutes.
    pub const fn minutes(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for MeetingDuration {
    type Error = DayWindowError;

    fn try_from(minutes: i64) -> Result<Self> {
        u32::try_from(minutes).map(Self).map_err(|_| DayWindowError::InvalidDuration(minutes))
    }
}

impl fmt::Display for MeetingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}
