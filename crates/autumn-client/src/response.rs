//! Normalization of backend responses into [`ApiResult`].

use autumn_core::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AutumnError;
use crate::logger::Logger;

/// Turn a received response into exactly one [`ApiResult`].
///
/// - The body is parsed as JSON; an unparseable body counts as `null`.
/// - 2xx decodes into `T`. A body of the wrong shape becomes an error with
///   code `invalid_response`.
/// - Any other status becomes an error built from the body's `message` and
///   `code` (see [`ApiError::from_body`]).
///
/// Every error result is reported to `logger` with the request path.
pub fn normalize<T: DeserializeOwned>(
    status: u16,
    body: &[u8],
    path: &str,
    logger: &dyn Logger,
) -> ApiResult<T> {
    let json = serde_json::from_slice::<Value>(body).unwrap_or(Value::Null);

    let result: ApiResult<T> = if (200..300).contains(&status) {
        serde_json::from_value::<T>(json)
            .map_err(|e| ApiError::invalid_response(status, e))
            .into()
    } else {
        ApiResult::Error(ApiError::from_body(status, &json))
    };

    if let ApiResult::Error(error) = &result {
        logger.error(&format!(
            "{path} failed with status {}: {} ({})",
            error.status_code, error.message, error.code
        ));
    }
    result
}

/// Read the body of `response` and normalize it.
///
/// # Errors
///
/// Returns [`AutumnError::Http`] if the body cannot be read.
pub(crate) async fn from_response<T: DeserializeOwned>(
    response: reqwest::Response,
    path: &str,
    logger: &dyn Logger,
) -> Result<ApiResult<T>, AutumnError> {
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    tracing::debug!(path = %path, status, bytes = body.len(), "Received Autumn response");
    Ok(normalize(status, &body, path, logger))
}
