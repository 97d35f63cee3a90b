//! Error handling module
//!
//! Defines the two error kinds surfaced by the client: configuration
//! problems detected before any request, and API failures.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum NatarisError {
    /// Missing or invalid configuration (detected before any network call)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration error caused by the API key itself (missing, empty or malformed)
    #[error("Configuration error: {0}")]
    Credential(String),

    /// Non-success HTTP response, transport failure or undecodable body
    #[error("API Error: {0}")]
    Api(String),
}

/// Error body returned by the Nataris API
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Human readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Error type (optional)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl NatarisError {
    /// Build an API error carrying only the status text
    pub fn from_status(status: StatusCode) -> Self {
        NatarisError::Api(status_text(status))
    }

    /// Build an API error from a failed response's status and raw body.
    ///
    /// Uses `error.message` from a JSON error body when present, otherwise
    /// the status text.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|response| response.error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| status_text(status));

        NatarisError::Api(message)
    }

    /// Whether this error was raised before any request went out
    pub fn is_config(&self) -> bool {
        matches!(self, NatarisError::Config(_) | NatarisError::Credential(_))
    }

    /// Whether the API key is what needs fixing
    pub fn is_credential(&self) -> bool {
        matches!(self, NatarisError::Credential(_))
    }
}

impl From<reqwest::Error> for NatarisError {
    fn from(err: reqwest::Error) -> Self {
        NatarisError::Api(err.to_string())
    }
}

/// Reason phrase for a status, falling back to the numeric code
pub fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Result type alias
pub type NatarisResult<T> = Result<T, NatarisError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create configuration error
    pub fn config_error(message: impl Into<String>) -> NatarisError {
        NatarisError::Config(message.into())
    }

    /// Create credential error
    pub fn credential_error(message: impl Into<String>) -> NatarisError {
        NatarisError::Credential(message.into())
    }

    /// Create API error
    pub fn api_error(message: impl Into<String>) -> NatarisError {
        NatarisError::Api(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_message() {
        let err = NatarisError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"message":"Insufficient balance"}}"#,
        );
        assert_eq!(err.to_string(), "API Error: Insufficient balance");
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status_text() {
        let err = NatarisError::from_response(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err.to_string(), "API Error: Bad Gateway");
    }

    #[test]
    fn test_missing_message_falls_back_to_status_text() {
        let err = NatarisError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"error":{"type":"auth"}}"#,
        );
        assert_eq!(err.to_string(), "API Error: Unauthorized");
    }

    #[test]
    fn test_from_status_ignores_body() {
        let err = NatarisError::from_status(StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "API Error: Forbidden");
    }

    #[test]
    fn test_status_text_without_reason() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_text(status), "599");
    }

    #[test]
    fn test_helpers() {
        assert!(helpers::config_error("bad format").is_config());
        assert!(!helpers::config_error("bad format").is_credential());
        assert!(helpers::credential_error("missing key").is_config());
        assert!(helpers::credential_error("missing key").is_credential());
        assert!(!helpers::api_error("boom").is_config());
    }
}
