/*
[INPUT]:  Error sources (config, validation, HTTP, remote envelopes, decoding)
[OUTPUT]: Structured error types with status and classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Coinbase adapter
#[derive(Error, Debug)]
pub enum CoinbaseError {
    /// Missing or invalid client configuration (e.g. empty credentials)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required request parameter is missing
    #[error("Invalid request parameters: {0}")]
    Validation(String),

    /// Network-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status without a recognizable error payload
    #[error("HTTP status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Error payload returned by the API
    #[error("API error (status {status}): {}", .messages.join("; "))]
    Remote {
        status: StatusCode,
        messages: Vec<String>,
    },

    /// Response body does not match the expected schema
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Response decoded but carries an unusable value
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request body serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl CoinbaseError {
    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CoinbaseError::Status { status, .. } | CoinbaseError::Remote { status, .. } => {
                Some(*status)
            }
            CoinbaseError::Http(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, CoinbaseError::Remote { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            CoinbaseError::Decode { .. } | CoinbaseError::InvalidResponse(_)
        )
    }

    /// Human readable message; never empty for remote errors
    pub fn message(&self) -> String {
        match self {
            CoinbaseError::Remote { status, messages } => {
                let joined = messages
                    .iter()
                    .map(|m| m.trim())
                    .filter(|m| !m.is_empty())
                    .collect::<Vec<_>>()
                    .join("; ");
                if joined.is_empty() {
                    let reason = if status.is_success() {
                        None
                    } else {
                        status.canonical_reason()
                    };
                    reason.unwrap_or("remote error").to_string()
                } else {
                    joined
                }
            }
            other => other.to_string(),
        }
    }

    /// Create a remote error from status code and message
    pub fn remote(status: StatusCode, message: impl Into<String>) -> Self {
        CoinbaseError::Remote {
            status,
            messages: vec![message.into()],
        }
    }
}

/// Result type alias for Coinbase operations
pub type Result<T> = std::result::Result<T, CoinbaseError>;
