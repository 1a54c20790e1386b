//! The remote file store contract

use crate::error::RemoteError;
use async_trait::async_trait;
use std::fmt;
use tracing::debug;

/// A file as held by the remote repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub path: String,
    /// Decoded file bytes
    pub content: Vec<u8>,
    /// Revision marker to pass back when overwriting
    pub sha: String,
}

/// Result of a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutReceipt {
    pub path: String,
    /// New revision marker, when the remote reports one
    pub sha: Option<String>,
    /// True if the file did not exist before
    pub created: bool,
}

/// Path-addressed remote file storage with optimistic revisions.
///
/// Writes without a revision create files; writes with a stale revision
/// fail with [`RemoteError::Conflict`] and are never retried here.
#[async_trait]
pub trait RemoteStore: Send + Sync + fmt::Debug {
    /// Fetch a file, `None` when it does not exist
    ///
    /// # Errors
    /// Returns error on transport, auth or decoding failure
    async fn get_file(&self, path: &str) -> Result<Option<RemoteFile>, RemoteError>;

    /// Create or overwrite a file
    ///
    /// # Errors
    /// Returns error on transport, auth or revision failure
    async fn put_file(
        &self,
        path: &str,
        content: &[u8],
        message: &str,
        revision: Option<&str>,
    ) -> Result<PutReceipt, RemoteError>;

    /// Read the current revision, then write against it
    ///
    /// # Errors
    /// Returns the first error of the read or the write
    async fn upsert_file(
        &self,
        path: &str,
        content: &[u8],
        message: &str,
    ) -> Result<PutReceipt, RemoteError> {
        let existing = self.get_file(path).await?;
        let revision = existing.as_ref().map(|f| f.sha.as_str());
        debug!(path, exists = revision.is_some(), "Writing remote file");
        self.put_file(path, content, message, revision).await
    }
}
