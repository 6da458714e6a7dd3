//! Observability infrastructure
//!
//! Core and infra emit `tracing` events; this module installs the subscriber
//! that turns them into log lines. Logs go to stderr so command output on
//! stdout stays machine-readable.

pub mod logging;

pub use logging::{build_filter, init_tracing};
