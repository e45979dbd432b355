//! DNS lookup API client.
//!
//! One call to [`DnsLookupClient::lookup`] is one round trip:
//! credential check, domain normalization, a single `GET`, envelope decoding.
//! There are no retries and no caching.

mod envelope;

use log::debug;
use url::Url;

use crate::config::{ApiConfig, API_KEY_HEADER, DOMAIN_QUERY_PARAM};
use crate::domain::normalize_domain;
use crate::error_handling::{InitializationError, LookupError};
use crate::initialization::init_client;
use crate::models::RecordSet;

use envelope::parse_envelope;

/// Something that can resolve a user-supplied domain into a [`RecordSet`].
///
/// Implemented by [`DnsLookupClient`]; the interactive driver is generic over
/// it so it can be exercised without a network.
#[allow(async_fn_in_trait)] // Only driven on a single-threaded runtime
pub trait RecordLookup {
    /// Looks up the records of `raw_domain` (normalized by the implementation).
    async fn lookup(&self, raw_domain: &str) -> Result<RecordSet, LookupError>;
}

/// Client for the APIVerve DNS lookup endpoint.
#[derive(Debug, Clone)]
pub struct DnsLookupClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl DnsLookupClient {
    /// Creates a client for the given configuration.
    ///
    /// A missing credential is not an error here; it is reported by every
    /// [`lookup`](Self::lookup) call instead.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client
    /// cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, InitializationError> {
        let http = init_client(&config)?;
        Ok(Self { config, http })
    }

    /// Looks up the DNS records of `raw_domain`.
    ///
    /// The input is normalized with [`normalize_domain`] before it is sent.
    /// The caller is expected to reject input that normalizes to an empty
    /// string.
    ///
    /// # Errors
    ///
    /// - `LookupError::Configuration` if no usable API key is configured (no
    ///   request is made)
    /// - `LookupError::Transport` if the URL cannot be built or the request fails
    /// - `LookupError::ResponseRead` if the body cannot be read
    /// - `LookupError::Decode` if the body is not the expected JSON
    /// - `LookupError::Api` if the API reports a failure
    pub async fn lookup(&self, raw_domain: &str) -> Result<RecordSet, LookupError> {
        let api_key = self.config.credential().ok_or(LookupError::Configuration)?;

        let domain = normalize_domain(raw_domain);
        let url = build_request_url(&self.config.endpoint, &domain)
            .map_err(|e| LookupError::transport("Failed to create request", e))?;

        debug!("Looking up DNS records for {domain}");
        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|e| LookupError::transport("API request failed", e))?;

        // The API reports failures in the envelope, so the status code is only logged
        debug!("API responded with HTTP {} for {domain}", response.status());

        let body = response.bytes().await.map_err(LookupError::ResponseRead)?;
        let records = parse_envelope(&body)?;

        debug!(
            "Received {} records for {domain} (A={}, AAAA={}, MX={}, NS={}, TXT={}, CNAME={})",
            records.len(),
            records.a.len(),
            records.aaaa.len(),
            records.mx.len(),
            records.ns.len(),
            records.txt.len(),
            records.cname.len()
        );
        Ok(records)
    }
}

impl RecordLookup for DnsLookupClient {
    async fn lookup(&self, raw_domain: &str) -> Result<RecordSet, LookupError> {
        DnsLookupClient::lookup(self, raw_domain).await
    }
}

/// Builds `<endpoint>?domain=<domain>` with the domain percent-encoded.
fn build_request_url(endpoint: &str, domain: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(endpoint, &[(DOMAIN_QUERY_PARAM, domain)])
}
