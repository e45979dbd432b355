//! Configuration constants.
//!
//! This module defines the fixed values used by the lookup client and the
//! report renderer: API endpoint and wire markers, timeouts, and display limits.

use std::time::Duration;

// APIVerve DNS lookup API
/// Default DNS lookup endpoint.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.apiverve.com/v1/dnslookup";
/// Request header carrying the API credential.
pub const API_KEY_HEADER: &str = "x-api-key";
/// Query parameter carrying the normalized domain.
pub const DOMAIN_QUERY_PARAM: &str = "domain";
/// Environment variable the credential is read from.
pub const API_KEY_ENV_VAR: &str = "APIVERVE_API_KEY";
/// Environment variable overriding the endpoint (used by tests and proxies).
pub const API_ENDPOINT_ENV_VAR: &str = "APIVERVE_DNS_ENDPOINT";
/// Placeholder credential shipped in sample configuration files.
///
/// A key equal to this value is treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key-here";
/// Envelope `status` value marking a successful lookup.
pub const API_STATUS_OK: &str = "ok";
/// Message used when the API reports a failure without an `error` text.
pub const API_ERROR_FALLBACK: &str = "DNS lookup failed";

// Network operation timeouts
/// Total request timeout in seconds (connect, send and body read)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// User-Agent sent with every API request.
pub const DEFAULT_USER_AGENT: &str = concat!("dns_lookup/", env!("CARGO_PKG_VERSION"));

// Report layout
/// TXT values longer than this many characters are cut for display
pub const MAX_TXT_DISPLAY_CHARS: usize = 60;
/// Marker appended to truncated TXT values
pub const TRUNCATION_MARKER: &str = "...";
/// Width of the `=` rules bracketing a report
pub const REPORT_RULE_WIDTH: usize = 55;
/// Width of the `-` rule under each section header
pub const SECTION_RULE_WIDTH: usize = 51;
/// Placeholder printed for an empty section
pub const EMPTY_SECTION_PLACEHOLDER: &str = "(none)";

// Interactive mode
/// Case-insensitive command that ends the interactive loop
pub const QUIT_COMMAND: &str = "quit";
/// Prompt shown before each read
pub const PROMPT: &str = "Enter domain (e.g., google.com): ";

// Process exit codes
/// Lookup (or graceful interactive session) succeeded
pub const EXIT_SUCCESS: i32 = 0;
/// Single-shot lookup failed
pub const EXIT_LOOKUP_FAILED: i32 = 1;
