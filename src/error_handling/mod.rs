//! Error handling.
//!
//! This module provides the error types for startup (`InitializationError`),
//! for individual lookups (`LookupError`), and for a whole run (`RunError`).

mod types;

// Re-export public API
pub use types::{BoxError, InitializationError, LookupError, RunError};
