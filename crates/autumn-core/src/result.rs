//! The discriminated result returned by every Autumn operation.
//!
//! A request that reached the backend always produces an [`ApiResult`]:
//! either the decoded payload or an [`ApiError`] describing what the backend
//! rejected. Callers branch on the variant and never look at status codes.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Error code fallback used when the backend body carries no code.
pub const UNKNOWN_ERROR_CODE: &str = "unknown";

/// Error code used when a 2xx body does not match the expected shape.
pub const INVALID_RESPONSE_CODE: &str = "invalid_response";

/// Outcome of one backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    /// The backend answered with a 2xx status.
    Data(T),
    /// The backend answered with an error status or an unexpected body.
    Error(ApiError),
}

impl<T> ApiResult<T> {
    /// Returns `true` for the success variant.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// Returns `true` for the failure variant.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Borrow the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Borrow the error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Data(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Convert into a standard `Result` so `?` can be used on API errors.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of the failure variant.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Data(data) => Ok(data),
            Self::Error(error) => Err(error),
        }
    }

    /// Map the payload, leaving an error untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            Self::Data(data) => ApiResult::Data(f(data)),
            Self::Error(error) => ApiResult::Error(error),
        }
    }
}

impl<T> From<Result<T, ApiError>> for ApiResult<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Data(data),
            Err(error) => Self::Error(error),
        }
    }
}

/// Serializes as `{ "data": .., "error": .. }` with the unused side `null`.
impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResult", 2)?;
        match self {
            Self::Data(data) => {
                state.serialize_field("data", data)?;
                state.serialize_field("error", &Option::<ApiError>::None)?;
            }
            Self::Error(error) => {
                state.serialize_field("data", &Option::<T>::None)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// Error code reported by the backend.
///
/// The backend mostly sends string codes, but some legacy endpoints send
/// numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    /// A string code such as `"not_found"`.
    Text(String),
    /// A numeric code.
    Number(i64),
}

impl ErrorCode {
    /// Return the code as a string slice, if it is textual.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(code) => Some(code),
            Self::Number(_) => None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(code) => Some(Self::Text(code.clone())),
            Value::Number(number) => number.as_i64().map(Self::Number),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(code) => f.write_str(code),
            Self::Number(code) => write!(f, "{code}"),
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::Text(code.to_string())
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        Self::Number(code)
    }
}

/// An error the backend reported (or a body the client could not accept).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message} (code={code}, status={status_code})")]
pub struct ApiError {
    /// Human readable message.
    pub message: String,
    /// Machine readable code.
    pub code: ErrorCode,
    /// HTTP status of the response.
    pub status_code: u16,
}

impl ApiError {
    /// Build an error from a non-2xx response body.
    ///
    /// Recognizes `{ "message", "code" }` at the top level and nested under
    /// `"error"`. A plain string `"error"` is used as the message. Missing
    /// fields fall back to `HTTP <status>` and [`UNKNOWN_ERROR_CODE`].
    #[must_use]
    pub fn from_body(status_code: u16, body: &Value) -> Self {
        let nested = body.get("error").filter(|error| error.is_object());
        let field = |name: &str| {
            body.get(name)
                .filter(|value| !value.is_null())
                .or_else(|| nested.and_then(|error| error.get(name)))
        };

        let message = field("message")
            .and_then(Value::as_str)
            .or_else(|| body.get("error").and_then(Value::as_str))
            .map_or_else(|| format!("HTTP {status_code}"), ToString::to_string);
        let code = field("code")
            .and_then(ErrorCode::from_value)
            .unwrap_or_else(|| ErrorCode::from(UNKNOWN_ERROR_CODE));

        Self {
            message,
            code,
            status_code,
        }
    }

    /// Build an error for a 2xx body that did not decode into the expected type.
    #[must_use]
    pub fn invalid_response(status_code: u16, reason: impl fmt::Display) -> Self {
        Self {
            message: format!("unexpected response body: {reason}"),
            code: ErrorCode::from(INVALID_RESPONSE_CODE),
            status_code,
        }
    }
}
