//! Configuration loading and management
//!
//! This module provides utilities for loading application configuration
//! from environment variables and files, and for feeding the resulting
//! window into the core validator.

pub mod loader;
pub mod provider;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
pub use provider::ConfigWindowProvider;
