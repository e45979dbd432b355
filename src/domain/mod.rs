//! Domain normalization.
//!
//! User input is accepted loosely (pasted URLs, mixed case, stray whitespace)
//! and reduced to the bare host string the lookup API expects:
//!
//! - surrounding whitespace is trimmed
//! - the string is lower-cased
//! - a leading `https://` is removed, then a leading `http://`
//! - everything from the first `/` on is dropped
//!
//! Nothing else is validated; malformed names are passed to the API as-is.

/// Normalizes raw user input into a domain query.
///
/// The result may be empty (e.g. for `"   "` or `"https://"`); rejecting empty
/// queries is the caller's job.
///
/// Normalization is idempotent: `normalize_domain(&normalize_domain(s)) ==
/// normalize_domain(s)`.
///
/// # Examples
///
/// ```
/// use dns_lookup::normalize_domain;
///
/// assert_eq!(normalize_domain("HTTPS://Example.com/path"), "example.com");
/// assert_eq!(normalize_domain("  rust-lang.org "), "rust-lang.org");
/// assert_eq!(normalize_domain("https://http://example.com"), "example.com");
/// ```
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let without_https = lowered.strip_prefix("https://").unwrap_or(&lowered);
    let without_scheme = without_https
        .strip_prefix("http://")
        .unwrap_or(without_https);
    without_scheme
        .split('/')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
