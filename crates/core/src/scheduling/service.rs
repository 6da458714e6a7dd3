//! Meeting-window validator - core business logic

use daywindow_domain::{AvailabilityWindow, FitOutcome, MeetingRequest, Result};
use tracing::debug;

use super::ports::WindowProvider;

/// Checks meeting requests against one fixed availability window.
///
/// Holds no mutable state, so a single instance can be shared across
/// threads freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeetingWindowValidator {
    window: AvailabilityWindow,
}

impl MeetingWindowValidator {
    /// Create a validator for an already validated window
    pub const fn new(window: AvailabilityWindow) -> Self {
        Self { window }
    }

    /// Create a validator from raw `H:MM`/`HH:MM` bounds.
    ///
    /// # Errors
    /// `InvalidTimeFormat` for a malformed bound,
    /// `InvalidWindowConfiguration` when `day_start` is after `day_end`.
    pub fn from_bounds(day_start: &str, day_end: &str) -> Result<Self> {
        AvailabilityWindow::parse(day_start, day_end).map(Self::new)
    }

    /// Create a validator from whatever window the provider supplies.
    ///
    /// # Errors
    /// Propagates the provider's error.
    pub fn from_provider(provider: &dyn WindowProvider) -> Result<Self> {
        let window = provider.availability_window()?;
        debug!(day_start = %window.day_start(), day_end = %window.day_end(), "Validator configured");
        Ok(Self::new(window))
    }

    /// The window every request is checked against.
    pub const fn window(&self) -> &AvailabilityWindow {
        &self.window
    }

    /// Whether a meeting starting at `start` and lasting `duration_minutes`
    /// lies entirely inside the window.
    ///
    /// `Ok(false)` is an ordinary answer; `Err` means the request was
    /// malformed.
    ///
    /// # Errors
    /// `InvalidTimeFormat` for an unparseable start, `InvalidDuration` for a
    /// negative duration.
    pub fn is_within_window(&self, start: &str, duration_minutes: i64) -> Result<bool> {
        self.evaluate(start, duration_minutes).map(|outcome| outcome.fits())
    }

    /// Like [`Self::is_within_window`] but reports why a meeting does not
    /// fit.
    ///
    /// # Errors
    /// Same as [`Self::is_within_window`].
    pub fn evaluate(&self, start: &str, duration_minutes: i64) -> Result<FitOutcome> {
        let request = MeetingRequest::parse(start, duration_minutes).map_err(|err| {
            debug!(start, duration_minutes, error = %err, "Rejected malformed meeting request");
            err
        })?;
        Ok(self.check(&request))
    }

    /// Assess an already parsed request.
    pub fn check(&self, request: &MeetingRequest) -> FitOutcome {
        let outcome = self.window.assess(request);
        debug!(
            start = %request.start,
            duration = %request.duration,
            end = ?request.end().map(|end| end.to_string()),
            day_start = %self.window.day_start(),
            day_end = %self.window.day_end(),
            outcome = %outcome,
            "Assessed meeting request"
        );
        outcome
    }
}

/// One-shot form of [`MeetingWindowValidator::is_within_window`].
///
/// # Errors
/// Same as [`MeetingWindowValidator::is_within_window`].
pub fn is_within_window(
    window: &AvailabilityWindow,
    start: &str,
    duration_minutes: i64,
) -> Result<bool> {
    MeetingWindowValidator::new(*window).is_within_window(start, duration_minutes)
}
