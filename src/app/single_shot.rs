//! Single-shot mode: one lookup from the command-line argument, then exit.

use std::io::{self, Write};

use log::info;

use super::output::{write_error, EMPTY_INPUT_MESSAGE};
use crate::config::{EXIT_LOOKUP_FAILED, EXIT_SUCCESS};
use crate::domain::normalize_domain;
use crate::lookup::RecordLookup;
use crate::report::format_report;

/// Looks up `raw_domain`, writes the report or the error, and returns the
/// process exit code.
///
/// Input that normalizes to an empty domain is rejected without calling the
/// client.
///
/// # Errors
///
/// Only fails if writing to `out` fails.
pub async fn run_single_shot<L: RecordLookup>(
    client: &L,
    raw_domain: &str,
    out: &mut impl Write,
) -> io::Result<i32> {
    let domain = raw_domain.trim();
    if normalize_domain(domain).is_empty() {
        write_error(out, &EMPTY_INPUT_MESSAGE)?;
        out.flush()?;
        return Ok(EXIT_LOOKUP_FAILED);
    }

    match client.lookup(domain).await {
        Ok(records) => {
            write!(out, "{}", format_report(domain, &records))?;
            out.flush()?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            info!("Lookup for {domain} failed ({}): {e}", e.as_str());
            write_error(out, &e)?;
            out.flush()?;
            Ok(EXIT_LOOKUP_FAILED)
        }
    }
}
