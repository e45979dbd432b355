//! Interactive mode: prompt, read, look up, print, repeat.
//!
//! The loop ends on the `quit` command (any case) or when input is closed.
//! A failed lookup is reported inline and never ends the session.

use std::io::{self, Write};

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::output::{write_banner, write_error, EMPTY_INPUT_MESSAGE, FAREWELL_MESSAGE};
use crate::config::{PROMPT, QUIT_COMMAND};
use crate::domain::normalize_domain;
use crate::lookup::RecordLookup;
use crate::report::format_report;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed the quit command
    Quit,
    /// Input was closed (Ctrl-D, end of a piped file)
    #[default]
    EndOfInput,
}

/// Counters for a finished interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lookups issued
    pub lookups: usize,
    /// Lookups that returned an error
    pub failures: usize,
    /// Why the loop stopped
    pub end: SessionEnd,
}

/// What one line of input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Empty,
    Lookup(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let input = line.trim();
    if input.eq_ignore_ascii_case(QUIT_COMMAND) {
        Command::Quit
    } else if normalize_domain(input).is_empty() {
        Command::Empty
    } else {
        Command::Lookup(input)
    }
}

/// Runs the prompt loop until `quit` or end of input.
///
/// Reads lines from `input` and writes prompts, reports and errors to `out`.
/// A read error on `input` is logged and ends the session like end of input.
///
/// # Errors
///
/// Only fails if writing to `out` fails.
pub async fn run_interactive<L, R, W>(
    client: &L,
    input: R,
    out: &mut W,
) -> io::Result<SessionSummary>
where
    L: RecordLookup,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();

    write_banner(out)?;

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("Input closed, ending interactive session");
                // Keep the farewell off the prompt line
                writeln!(out)?;
                summary.end = SessionEnd::EndOfInput;
                break;
            }
            Err(e) => {
                warn!("Failed to read input: {e}");
                writeln!(out)?;
                summary.end = SessionEnd::EndOfInput;
                break;
            }
        };

        match parse_command(&line) {
            Command::Quit => {
                summary.end = SessionEnd::Quit;
                break;
            }
            Command::Empty => {
                writeln!(out, "{EMPTY_INPUT_MESSAGE}")?;
                writeln!(out)?;
            }
            Command::Lookup(domain) => {
                summary.lookups += 1;
                match client.lookup(domain).await {
                    Ok(records) => write!(out, "{}", format_report(domain, &records))?,
                    Err(e) => {
                        summary.failures += 1;
                        info!("Lookup for {domain} failed ({}): {e}", e.as_str());
                        write_error(out, &e)?;
                    }
                }
            }
        }
    }

    writeln!(out, "{FAREWELL_MESSAGE}")?;
    out.flush()?;
    Ok(summary)
}
