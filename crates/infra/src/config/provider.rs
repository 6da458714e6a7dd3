//! `WindowProvider` adapter backed by loaded configuration

use daywindow_core::WindowProvider;
use daywindow_domain::{AvailabilityWindow, Config, Result, WindowConfig};

/// Supplies the availability window from a [`WindowConfig`]
#[derive(Debug, Clone, Default)]
pub struct ConfigWindowProvider {
    window: WindowConfig,
}

impl ConfigWindowProvider {
    /// Wrap raw window bounds; they are validated on each lookup.
    pub fn new(window: WindowConfig) -> Self {
        Self { window }
    }
}

impl From<&Config> for ConfigWindowProvider {
    fn from(config: &Config) -> Self {
        Self::new(config.window.clone())
    }
}

impl WindowProvider for ConfigWindowProvider {
    fn availability_window(&self) -> Result<AvailabilityWindow> {
        self.window.to_window()
    }
}
