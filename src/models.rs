//! DNS record data returned by the lookup API.

use serde::{Deserialize, Deserializer};

/// A mail exchange record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MxRecord {
    /// Mail server host name
    pub exchange: String,
    /// Preference value (lower is preferred)
    pub priority: u16,
}

/// The DNS records of one domain, in the order the API returned them.
///
/// A record type the API omitted (or sent as `null`) is an empty vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordSet {
    /// IPv4 addresses
    #[serde(rename = "A", default, deserialize_with = "null_as_empty")]
    pub a: Vec<String>,
    /// IPv6 addresses
    #[serde(rename = "AAAA", default, deserialize_with = "null_as_empty")]
    pub aaaa: Vec<String>,
    /// Mail exchangers (not re-sorted by priority)
    #[serde(rename = "MX", default, deserialize_with = "null_as_empty")]
    pub mx: Vec<MxRecord>,
    /// Text records
    #[serde(rename = "TXT", default, deserialize_with = "null_as_empty")]
    pub txt: Vec<String>,
    /// Canonical name targets
    #[serde(rename = "CNAME", default, deserialize_with = "null_as_empty")]
    pub cname: Vec<String>,
    /// Authoritative name servers
    #[serde(rename = "NS", default, deserialize_with = "null_as_empty")]
    pub ns: Vec<String>,
}

impl RecordSet {
    /// Total number of records across all types.
    pub fn len(&self) -> usize {
        self.a.len()
            + self.aaaa.len()
            + self.mx.len()
            + self.txt.len()
            + self.cname.len()
            + self.ns.len()
    }

    /// Returns `true` if no record of any type is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
