//! `tracing-subscriber` setup

use daywindow_domain::{DayWindowError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Resolve the filter: `RUST_LOG` wins over the configured level.
///
/// # Errors
/// `DayWindowError::Config` when the configured directive does not parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| {
        DayWindowError::Config(format!("Invalid log level '{}': {e}", config.level))
    })
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed; that is not
/// treated as an error so tests and embedders can call this freely.
///
/// # Errors
/// Propagates [`build_filter`] errors.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "Tracing initialised");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert_eq!(init_tracing(&config), Ok(false));
    }

    #[test]
    fn filter_accepts_target_directives() {
        let config = LoggingConfig { level: "daywindow_core=debug,warn".into(), json: false };
        assert!(build_filter(&config).is_ok());
    }
}
