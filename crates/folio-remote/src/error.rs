//! Remote store errors

use reqwest::StatusCode;
use serde::Deserialize;

/// Errors talking to the remote file repository
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Token missing, expired or lacking permission
    #[error("remote rejected the access token (HTTP {status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// Revision marker is stale
    #[error("remote file {path} changed since it was read: {message}")]
    Conflict { path: String, message: String },

    /// Any other non-success response
    #[error("remote API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Response body not in the expected shape
    #[error("could not decode remote response: {0}")]
    Decode(String),

    /// Client cannot be built from the current settings
    #[error("remote access is not configured: {0}")]
    NotConfigured(String),
}

#[derive(Deserialize)]
struct ApiMessage {
    message: Option<String>,
}

impl RemoteError {
    /// Map a non-success response to an error, keeping the API's `message`
    #[must_use]
    pub fn from_response(status: StatusCode, path: &str, body: &str) -> Self {
        let message = serde_json::from_str::<ApiMessage>(body)
            .ok()
            .and_then(|m| m.message)
            .unwrap_or_else(|| format!("HTTP {status}"));

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized {
                status: status.as_u16(),
                message,
            },
            StatusCode::CONFLICT => Self::Conflict {
                path: path.to_string(),
                message,
            },
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the operator has to fix the token before retrying
    #[inline]
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::NotConfigured(_))
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
