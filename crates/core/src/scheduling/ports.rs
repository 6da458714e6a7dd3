//! Port interfaces for availability windows
//!
//! These traits define the boundary between the validator and wherever the
//! window configuration actually lives.

use daywindow_domain::{AvailabilityWindow, Result};

/// Source of the availability window a validator is built from
pub trait WindowProvider: Send + Sync {
    /// Produce a validated window.
    ///
    /// Called once per validator construction, never per request.
    fn availability_window(&self) -> Result<AvailabilityWindow>;
}

impl WindowProvider for AvailabilityWindow {
    fn availability_window(&self) -> Result<AvailabilityWindow> {
        Ok(*self)
    }
}
