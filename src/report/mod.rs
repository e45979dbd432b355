//! Text report of a record set.
//!
//! Section order is fixed: A, AAAA, MX, NS, TXT, then CNAME. The CNAME
//! section only appears when it has entries; every other section is always
//! printed and shows `(none)` when empty.

use std::fmt::Write;

use crate::config::{
    EMPTY_SECTION_PLACEHOLDER, MAX_TXT_DISPLAY_CHARS, REPORT_RULE_WIDTH, SECTION_RULE_WIDTH,
    TRUNCATION_MARKER,
};
use crate::models::RecordSet;

/// Renders the report for `domain` as a string.
///
/// `domain` is printed as given (the caller passes the user's input, not
/// the normalized query).
pub fn format_report(domain: &str, records: &RecordSet) -> String {
    let rule = "=".repeat(REPORT_RULE_WIDTH);
    let mut out = String::new();

    out.push('\n');
    push_line(&mut out, &rule);
    push_line(&mut out, &format!("  DNS Records: {domain}"));
    push_line(&mut out, &rule);

    push_section(&mut out, "A Records (IPv4)", records.a.iter().cloned());
    push_section(&mut out, "AAAA Records (IPv6)", records.aaaa.iter().cloned());
    push_section(
        &mut out,
        "MX Records (Mail)",
        records
            .mx
            .iter()
            .map(|mx| format!("[{}] {}", mx.priority, mx.exchange)),
    );
    push_section(&mut out, "NS Records (Nameservers)", records.ns.iter().cloned());
    push_section(
        &mut out,
        "TXT Records",
        records.txt.iter().map(|txt| truncate_txt(txt)),
    );
    if !records.cname.is_empty() {
        push_section(&mut out, "CNAME Records", records.cname.iter().cloned());
    }

    out.push('\n');
    push_line(&mut out, &rule);
    out.push('\n');
    out
}

/// Cuts a TXT value to `MAX_TXT_DISPLAY_CHARS` characters plus a marker.
///
/// Counts characters, not bytes, so multi-byte values never split mid-char.
pub fn truncate_txt(value: &str) -> String {
    match value.char_indices().nth(MAX_TXT_DISPLAY_CHARS) {
        Some((cut, _)) => format!("{}{}", &value[..cut], TRUNCATION_MARKER),
        None => value.to_string(),
    }
}

fn push_section(out: &mut String, title: &str, entries: impl Iterator<Item = String>) {
    out.push('\n');
    push_line(out, &format!("  {title}"));
    push_line(out, &format!("  {}", "-".repeat(SECTION_RULE_WIDTH)));

    let mut any = false;
    for entry in entries {
        any = true;
        push_line(out, &format!("    {entry}"));
    }
    if !any {
        push_line(out, &format!("    {EMPTY_SECTION_PLACEHOLDER}"));
    }
}

fn push_line(out: &mut String, line: &str) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{line}");
}
