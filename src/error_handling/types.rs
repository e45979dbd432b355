//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::API_KEY_ENV_VAR;

/// Boxed error used as the source of transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Reasons a single DNS lookup can fail.
///
/// Every variant is terminal for the call that produced it: lookups are never
/// retried and never return partial results.
#[derive(Error, Debug)]
pub enum LookupError {
    /// No usable API credential is configured. Raised before any network I/O.
    #[error("API key not configured. Set the {env} environment variable or pass --api-key", env = API_KEY_ENV_VAR)]
    Configuration,

    /// The request could not be built or the network call failed.
    #[error("{context}: {source}")]
    Transport {
        /// Which step failed
        context: &'static str,
        /// Underlying URL or HTTP error
        #[source]
        source: BoxError,
    },

    /// The response body could not be fully read.
    #[error("Failed to read response: {0}")]
    ResponseRead(#[source] ReqwestError),

    /// The body is not JSON matching the expected envelope.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a non-success status.
    #[error("{0}")]
    Api(String),
}

/// Errors that stop the application outside of a lookup.
#[derive(Error, Debug)]
pub enum RunError {
    /// The lookup client could not be created.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl LookupError {
    pub(crate) fn transport(context: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            context,
            source: source.into(),
        }
    }

    /// Short category name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupError::Configuration => "configuration",
            LookupError::Transport { .. } => "transport",
            LookupError::ResponseRead(_) => "response_read",
            LookupError::Decode(_) => "decode",
            LookupError::Api(_) => "api",
        }
    }
}
