//! Wire format of the lookup API response.

use log::debug;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

use crate::config::{API_ERROR_FALLBACK, API_STATUS_OK};
use crate::error_handling::LookupError;
use crate::models::RecordSet;

/// Top-level JSON object returned by the API.
///
/// Only lives for the duration of [`parse_envelope`]. Unknown fields are ignored
/// and a `null` status counts as a failed lookup.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<ApiData>,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    records: Option<RecordSet>,
}

impl ApiEnvelope {
    fn into_records(self) -> Result<RecordSet, LookupError> {
        if self.status.as_deref() != Some(API_STATUS_OK) {
            let message = self
                .error
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| API_ERROR_FALLBACK.to_string());
            return Err(LookupError::Api(message));
        }

        let data = self.data.unwrap_or(ApiData {
            domain: None,
            records: None,
        });
        if let Some(domain) = &data.domain {
            debug!("API returned records for {domain}");
        }
        Ok(data.records.unwrap_or_default())
    }
}

/// Decodes a response body into the record set it carries.
///
/// # Errors
///
/// - `LookupError::Decode` if the body is not a JSON envelope
/// - `LookupError::Api` if the envelope status is not `"ok"`
pub(crate) fn parse_envelope(body: &[u8]) -> Result<RecordSet, LookupError> {
    let value: Value = serde_json::from_slice(body)?;
    // Derived struct decoding also accepts sequences, so the shape is checked first
    if !value.is_object() {
        return Err(shape_error("response"));
    }
    if let Some(data) = value.get("data") {
        require_object_or_null(data, "data")?;
        if let Some(records) = data.get("records") {
            require_object_or_null(records, "records")?;
        }
    }
    let envelope: ApiEnvelope = serde_json::from_value(value)?;
    envelope.into_records()
}

fn require_object_or_null(value: &Value, field: &str) -> Result<(), LookupError> {
    match value {
        Value::Object(_) | Value::Null => Ok(()),
        _ => Err(shape_error(field)),
    }
}

fn shape_error(field: &str) -> LookupError {
    LookupError::Decode(serde_json::Error::custom(format!(
        "expected {field} to be a JSON object"
    )))
}
