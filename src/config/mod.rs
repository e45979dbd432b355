//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts, display limits)
//! - CLI option types and parsing
//! - The lookup client configuration object

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ApiConfig, Cli, LogFormat, LogLevel};
