//! # DayWindow Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment, TOML/JSON files, defaults)
//! - The config-backed `WindowProvider`
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `daywindow-core`
//! - Contains all "impure" code (environment, file system, global logger)

pub mod config;
pub mod observability;

// Re-export commonly used items
pub use config::ConfigWindowProvider;
pub use observability::init_tracing;
