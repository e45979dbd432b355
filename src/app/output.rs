//! Terminal messages shared by both modes.

use std::fmt::Display;
use std::io::{self, Write};

use crate::config::REPORT_RULE_WIDTH;

/// Message shown when the input has no domain in it.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a domain.";
/// Message printed when the interactive session ends.
pub const FAREWELL_MESSAGE: &str = "Goodbye!";

/// Writes an error as an indented block surrounded by blank lines.
pub fn write_error(out: &mut impl Write, error: &impl Display) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  ❌ Error: {error}")?;
    writeln!(out)
}

/// Writes the interactive-mode banner and usage hints.
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    let rule = "=".repeat(REPORT_RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "  DNS Lookup Tool")?;
    writeln!(out, "  Powered by APIVerve")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(out, "Look up DNS records for any domain")?;
    writeln!(out, "Type 'quit' to exit")?;
    writeln!(out)
}
