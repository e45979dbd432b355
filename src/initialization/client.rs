//! HTTP client initialization.

use crate::config::{ApiConfig, CONNECT_TIMEOUT, DEFAULT_USER_AGENT};
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for API requests.
///
/// Creates a `reqwest::Client` configured with:
/// - Total request timeout from `config.timeout`
/// - TCP connect timeout (`CONNECT_TIMEOUT`, capped by the total timeout)
/// - The crate User-Agent
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails (e.g. the TLS backend
/// cannot be initialized).
pub fn init_client(config: &ApiConfig) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(config.timeout))
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}
