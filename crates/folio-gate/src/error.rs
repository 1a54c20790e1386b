//! Error types for the gate and credential store

use std::path::PathBuf;

/// Gate and credential errors
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Hash primitive not reachable; fatal to the gate
    #[error("password hashing is unavailable: {0}")]
    DigestUnavailable(String),

    /// Nothing entered (after trimming)
    #[error("please enter a password")]
    EmptyPassword,

    /// New password below the minimum length
    #[error("password must be at least {min} characters long (got {actual})")]
    PasswordTooShort { min: usize, actual: usize },

    /// Confirmation differs from the new password
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Stored or supplied digest is not 64 hex characters
    #[error("invalid password digest: {0}")]
    InvalidDigest(String),

    /// Nothing entered as remote-access token
    #[error("please enter a remote access token")]
    TokenMissing,

    /// Token fails the length sanity check
    #[error("token appears to be invalid: expected at least {min} characters, got {actual}")]
    TokenTooShort { min: usize, actual: usize },

    /// Credential persistence failed
    #[error("credential store error: {0}")]
    Store(#[from] StoreError),
}

impl GateError {
    /// Validation errors the operator can fix by re-entering input
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EmptyPassword
                | Self::PasswordTooShort { .. }
                | Self::PasswordMismatch
                | Self::TokenMissing
                | Self::TokenTooShort { .. }
        )
    }
}

/// Errors reading or writing the credential store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error on the backing file
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file is not a JSON string map
    #[error("malformed credential file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
