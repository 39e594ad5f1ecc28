//! Request header composition.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::credentials::Credentials;
use crate::error::AutumnError;
use crate::options::LATEST_API_VERSION;

/// Header carrying the API version.
pub const API_VERSION_HEADER: &str = "x-api-version";

/// Build the header set sent with every request.
///
/// Explicit headers are kept verbatim apart from `x-api-version`, which is
/// always set (replacing any entry with the same name in another case).
/// Without explicit headers, `Authorization` uses the secret key when present
/// and the publishable key otherwise.
#[must_use]
pub fn compose_headers(
    credentials: &Credentials,
    explicit: Option<&BTreeMap<String, String>>,
    version: Option<&str>,
) -> BTreeMap<String, String> {
    let mut headers = explicit.cloned().unwrap_or_else(|| {
        let mut synthesized = BTreeMap::new();
        if let Some(key) = credentials.bearer() {
            synthesized.insert("Authorization".to_string(), format!("Bearer {key}"));
        }
        synthesized.insert("Content-Type".to_string(), "application/json".to_string());
        synthesized
    });

    headers.retain(|name, _| !name.eq_ignore_ascii_case(API_VERSION_HEADER));
    headers.insert(
        API_VERSION_HEADER.to_string(),
        version
            .filter(|v| !v.is_empty())
            .unwrap_or(LATEST_API_VERSION)
            .to_string(),
    );
    headers
}

/// Convert composed headers into wire headers.
///
/// Header names are case-insensitive on the wire, so two entries that differ
/// only in case are rejected rather than letting one replace the other.
///
/// # Errors
///
/// Returns [`AutumnError::Configuration`] for a name or value that is not a
/// legal HTTP header, or for a name given more than once.
pub(crate) fn to_header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap, AutumnError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            AutumnError::Configuration(format!("invalid header name {name:?}: {e}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            AutumnError::Configuration(format!("invalid value for header {name}: {e}"))
        })?;
        if map.contains_key(&header_name) {
            return Err(AutumnError::Configuration(format!(
                "header {header_name} is set more than once"
            )));
        }
        map.insert(header_name, header_value);
    }
    Ok(map)
}
