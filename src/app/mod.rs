//! Main application modules.
//!
//! This module provides the two run modes (single-shot and interactive), the
//! mode selection, and the terminal messages they share.

pub mod interactive;
pub mod output;
pub mod single_shot;

use log::debug;

use crate::config::{Cli, EXIT_SUCCESS};
use crate::error_handling::RunError;
use crate::lookup::DnsLookupClient;

// Re-export public API
pub use interactive::{run_interactive, SessionEnd, SessionSummary};
pub use single_shot::run_single_shot;

/// Run mode, chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Look up the given domain and exit
    SingleShot(String),
    /// Prompt for domains until `quit` or end of input
    Interactive,
}

impl Mode {
    /// Single-shot when a domain argument was given, interactive otherwise.
    pub fn from_args(domain: Option<String>) -> Self {
        match domain {
            Some(domain) => Mode::SingleShot(domain),
            None => Mode::Interactive,
        }
    }
}

/// Runs the tool for the parsed command line and returns the exit code.
///
/// Lookup failures are reported on stdout and reflected in the exit code;
/// only client construction and stdout write failures are returned as errors.
///
/// # Errors
///
/// Returns `RunError` if the HTTP client cannot be built or stdout cannot be
/// written.
pub async fn run(cli: Cli) -> Result<i32, RunError> {
    let config = cli.api_config();
    debug!("Starting with {:?}", config);
    let client = DnsLookupClient::new(config)?;

    let mut stdout = std::io::stdout();
    match Mode::from_args(cli.domain) {
        Mode::SingleShot(domain) => Ok(run_single_shot(&client, &domain, &mut stdout).await?),
        Mode::Interactive => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let summary = run_interactive(&client, stdin, &mut stdout).await?;
            debug!(
                "Interactive session ended ({:?}) after {} lookups, {} failed",
                summary.end, summary.lookups, summary.failures
            );
            Ok(EXIT_SUCCESS)
        }
    }
}
