//! dns_lookup library: DNS record lookups through the APIVerve DNS lookup API
//!
//! This library normalizes a user-supplied domain, fetches its A, AAAA, MX, NS,
//! TXT and CNAME records from the API, and renders them as a text report. The
//! `dns_lookup` binary wraps it in a single-shot and an interactive mode.
//!
//! # Example
//!
//! ```no_run
//! use dns_lookup::{format_report, ApiConfig, DnsLookupClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig {
//!     api_key: std::env::var("APIVERVE_API_KEY").ok(),
//!     ..Default::default()
//! };
//! let client = DnsLookupClient::new(config)?;
//!
//! let records = client.lookup("example.com").await?;
//! print!("{}", format_report("example.com", &records));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async and need a Tokio runtime. The binary uses a
//! single-threaded runtime; nothing here spawns tasks.

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod domain;
mod error_handling;
pub mod initialization;
mod lookup;
mod models;
mod report;

// Re-export public API
pub use app::{run, Mode};
pub use config::{ApiConfig, Cli, LogFormat, LogLevel};
pub use domain::normalize_domain;
pub use error_handling::{BoxError, InitializationError, LookupError, RunError};
pub use lookup::{DnsLookupClient, RecordLookup};
pub use models::{MxRecord, RecordSet};
pub use report::{format_report, truncate_txt};
