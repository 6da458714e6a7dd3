//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Falls back to built-in defaults when no file exists anywhere
//!
//! Whatever the source, the window is validated before the configuration is
//! handed out.
//!
//! ## Environment Variables
//! - `DAYWINDOW_DAY_START`: Lower bound of daily availability (`H:MM`)
//! - `DAYWINDOW_DAY_END`: Upper bound of daily availability (`H:MM`)
//! - `DAYWINDOW_LOG_LEVEL`: Log filter directive (default `info`)
//! - `DAYWINDOW_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./daywindow.toml` or `./daywindow.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names one and two directories up
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use daywindow_domain::constants::{
    DEFAULT_LOG_LEVEL, ENV_DAY_END, ENV_DAY_START, ENV_LOG_JSON, ENV_LOG_LEVEL,
};
use daywindow_domain::{Config, DayWindowError, LoggingConfig, Result, WindowConfig};

const CONFIG_FILE_NAMES: &[&str] =
    &["daywindow.toml", "daywindow.json", "config.toml", "config.json"];
const SEARCH_PREFIXES: &[&str] = &[".", "..", "../.."];

/// Load configuration with automatic fallback strategy
///
/// Environment first, then the first config file found by
/// [`probe_config_paths`], then [`Config::default`]. A complete but invalid
/// environment window is reported rather than skipped.
///
/// # Errors
/// Returns `DayWindowError::Config` if a config file exists but cannot be
/// read or parsed, and the window errors if the loaded window is invalid.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(DayWindowError::Config(reason)) => {
            tracing::debug!(reason, "Environment incomplete, trying config file");
        }
        // Bounds were supplied but are unusable; do not mask that with a file.
        Err(e) => return Err(e),
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No config file found, using built-in defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// Both window bounds must be present. Logging settings are optional.
///
/// # Errors
/// Returns `DayWindowError::Config` if a bound is missing, or the window
/// errors if the bounds do not form a valid window.
pub fn load_from_env() -> Result<Config> {
    let day_start = env_var(ENV_DAY_START)?;
    let day_end = env_var(ENV_DAY_END)?;
    let level = std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    let json = env_bool(ENV_LOG_JSON, false);

    let config = Config {
        window: WindowConfig { day_start, day_end },
        logging: LoggingConfig { level, json },
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DayWindowError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
///
/// and the window errors if the file describes an invalid window.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DayWindowError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DayWindowError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DayWindowError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DayWindowError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DayWindowError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(DayWindowError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory and its two parents, then the
/// executable's directory and its two parents.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let roots = [
        std::env::current_dir().ok(),
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)),
    ];

    roots.into_iter().flatten().flat_map(|root| candidates_under(&root)).find(|path| path.exists())
}

fn candidates_under(root: &Path) -> Vec<PathBuf> {
    SEARCH_PREFIXES
        .iter()
        .flat_map(|prefix| CONFIG_FILE_NAMES.iter().map(move |name| root.join(prefix).join(name)))
        .collect()
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DayWindowError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::{Builder, NamedTempFile};

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn temp_config(contents: &str, suffix: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    /// Switches the working directory for the lifetime of the guard.
    struct CurrentDirGuard {
        previous: PathBuf,
    }

    impl CurrentDirGuard {
        fn enter(dir: &Path) -> Self {
            let previous = std::env::current_dir().unwrap();
            std::env::set_current_dir(dir).unwrap();
            Self { previous }
        }
    }

    impl Drop for CurrentDirGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.previous);
        }
    }

    fn clear_window_env() {
        std::env::remove_var(ENV_DAY_START);
        std::env::remove_var(ENV_DAY_END);
        std::env::remove_var(ENV_LOG_LEVEL);
        std::env::remove_var(ENV_LOG_JSON);
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        for (key, value) in [
            ("DW_TEST_BOOL_1", "1"),
            ("DW_TEST_BOOL_TRUE", "true"),
            ("DW_TEST_BOOL_YES", "Yes"),
            ("DW_TEST_BOOL_ON", " on "),
        ] {
            std::env::set_var(key, value);
            assert!(env_bool(key, false), "{value:?} should be true");
            std::env::remove_var(key);
        }

        for (key, value) in [("DW_TEST_BOOL_0", "0"), ("DW_TEST_BOOL_OFF", "off")] {
            std::env::set_var(key, value);
            assert!(!env_bool(key, true), "{value:?} should be false");
            std::env::remove_var(key);
        }

        std::env::remove_var("DW_TEST_BOOL_MISSING");
        assert!(env_bool("DW_TEST_BOOL_MISSING", true));
        assert!(!env_bool("DW_TEST_BOOL_MISSING", false));
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_window_env();

        std::env::set_var(ENV_DAY_START, "8:00");
        std::env::set_var(ENV_DAY_END, "16:30");
        std::env::set_var(ENV_LOG_LEVEL, "debug");
        std::env::set_var(ENV_LOG_JSON, "true");

        let config = load_from_env().unwrap();
        assert_eq!(config.window.day_start, "8:00");
        assert_eq!(config.window.day_end, "16:30");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);

        clear_window_env();
    }

    #[test]
    fn test_load_from_env_logging_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_window_env();

        std::env::set_var(ENV_DAY_START, "07:30");
        std::env::set_var(ENV_DAY_END, "17:45");

        let config = load_from_env().unwrap();
        assert_eq!(config.logging, LoggingConfig::default());

        clear_window_env();
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_window_env();

        std::env::set_var(ENV_DAY_START, "07:30");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, DayWindowError::Config(_)), "Should be a Config error");

        clear_window_env();
    }

    #[test]
    fn test_load_from_env_inverted_window() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_window_env();

        std::env::set_var(ENV_DAY_START, "18:00");
        std::env::set_var(ENV_DAY_END, "09:00");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, DayWindowError::InvalidWindowConfiguration { .. }));

        clear_window_env();
    }

    #[test]
    fn test_load_reports_invalid_env_window_instead_of_falling_back() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_window_env();

        std::env::set_var(ENV_DAY_START, "17:45");
        std::env::set_var(ENV_DAY_END, "07:30");

        let err = load().unwrap_err();
        assert!(matches!(err, DayWindowError::InvalidWindowConfiguration { .. }));

        clear_window_env();
    }

    #[test]
    fn test_load_from_env_malformed_bound() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_window_env();

        std::env::set_var(ENV_DAY_START, "7h30");
        std::env::set_var(ENV_DAY_END, "17:45");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, DayWindowError::InvalidTimeFormat(_)));

        clear_window_env();
    }

    #[test]
    fn test_load_from_file_toml() {
        let file = temp_config(
            "[window]\nday_start = \"06:45\"\nday_end = \"15:00\"\n\n[logging]\nlevel = \"warn\"\n",
            ".toml",
        );

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.window.day_start, "06:45");
        assert_eq!(config.window.day_end, "15:00");
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_from_file_json() {
        let file = temp_config(r#"{"window": {"day_start": "9:00", "day_end": "17:00"}}"#, ".json");

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.window.day_start, "9:00");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_from_file_rejects_inverted_window() {
        let file = temp_config("[window]\nday_start = \"17:00\"\nday_end = \"08:00\"\n", ".toml");

        let err = load_from_file(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, DayWindowError::InvalidWindowConfiguration { .. }));
    }

    #[test]
    fn test_load_from_file_not_found() {
        let err = load_from_file(Some(PathBuf::from("/nonexistent/daywindow.toml"))).unwrap_err();
        assert!(matches!(err, DayWindowError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let file = temp_config(r#"{ "window": "#, ".json");

        let err = load_from_file(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, DayWindowError::Config(_)));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("window: {}", &PathBuf::from("daywindow.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }

    #[test]
    fn test_candidates_cover_all_names_and_prefixes() {
        let candidates = candidates_under(Path::new("/srv/app"));
        assert_eq!(candidates.len(), CONFIG_FILE_NAMES.len() * SEARCH_PREFIXES.len());
        assert_eq!(candidates[0], Path::new("/srv/app/./daywindow.toml"));
        assert!(candidates.contains(&PathBuf::from("/srv/app/../../config.json")));
    }

    #[test]
    fn test_load_uses_defaults_without_env_or_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_window_env();

        let outer = tempfile::tempdir().unwrap();
        let empty = outer.path().join("a").join("b");
        std::fs::create_dir_all(&empty).unwrap();
        let _cwd = CurrentDirGuard::enter(&empty);

        assert_eq!(probe_config_paths(), None);
        assert_eq!(load().unwrap(), Config::default());
    }

    #[test]
    fn test_load_falls_back_to_file_when_env_incomplete() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_window_env();

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("daywindow.toml"),
            "[window]\nday_start = \"10:00\"\nday_end = \"14:00\"\n",
        )
        .unwrap();
        let _cwd = CurrentDirGuard::enter(dir.path());

        std::env::set_var(ENV_DAY_START, "08:00");

        let config = load().unwrap();
        assert_eq!(config.window.day_start, "10:00");
        assert_eq!(config.window.day_end, "14:00");

        clear_window_env();
    }

    #[test]
    fn test_load_prefers_complete_env_over_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_window_env();

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("daywindow.toml"),
            "[window]\nday_start = \"10:00\"\nday_end = \"14:00\"\n",
        )
        .unwrap();
        let _cwd = CurrentDirGuard::enter(dir.path());

        std::env::set_var(ENV_DAY_START, "08:00");
        std::env::set_var(ENV_DAY_END, "12:00");

        let config = load().unwrap();
        assert_eq!(config.window.day_start, "08:00");
        assert_eq!(config.window.day_end, "12:00");

        clear_window_env();
    }
}
