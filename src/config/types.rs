//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring the lookup client.

use std::fmt;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    API_ENDPOINT_ENV_VAR, API_KEY_ENV_VAR, DEFAULT_API_ENDPOINT, DEFAULT_TIMEOUT_SECS,
    PLACEHOLDER_API_KEY,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Lookup client configuration (no CLI dependencies).
///
/// Built once at startup and handed to
/// [`DnsLookupClient::new`](crate::DnsLookupClient::new). Tests construct it
/// directly to point the client at a mock server.
///
/// # Examples
///
/// ```no_run
/// use dns_lookup::ApiConfig;
///
/// let config = ApiConfig {
///     api_key: Some("my-key".to_string()),
///     ..Default::default()
/// };
/// assert!(config.credential().is_some());
/// ```
#[derive(Clone)]
pub struct ApiConfig {
    /// API credential sent in the `x-api-key` header
    pub api_key: Option<String>,

    /// DNS lookup endpoint URL
    pub endpoint: String,

    /// Total per-request timeout
    pub timeout: Duration,
}

impl ApiConfig {
    /// Returns the credential if one is usable.
    ///
    /// Missing, blank, and placeholder keys all yield `None`.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// The credential never reaches log output.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Command-line options.
///
/// With a `DOMAIN` argument the tool performs one lookup and exits; without
/// one it starts the interactive prompt.
///
/// # Examples
///
/// ```bash
/// # Single lookup
/// APIVERVE_API_KEY=... dns_lookup google.com
///
/// # Interactive mode with a longer timeout
/// dns_lookup --api-key ... --timeout-seconds 20
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dns_lookup",
    about = "Looks up DNS records for a domain using the APIVerve DNS lookup API."
)]
pub struct Cli {
    /// Domain to look up (omit to start interactive mode)
    #[arg(value_parser)]
    pub domain: Option<String>,

    /// APIVerve API key (get one at https://dashboard.apiverve.com)
    #[arg(long, env = API_KEY_ENV_VAR, hide_env_values = true)]
    pub api_key: Option<String>,

    /// DNS lookup endpoint URL
    #[arg(long, env = API_ENDPOINT_ENV_VAR, default_value = DEFAULT_API_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Builds the lookup client configuration from the parsed options.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}
