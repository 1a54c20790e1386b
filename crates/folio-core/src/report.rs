//! Operation reports shown to the operator

use folio_model::PictureRecord;
use folio_remote::{PutReceipt, RemoteError};
use std::fmt::{self, Display, Formatter};

/// What happened to the catalog document after a local edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Pushed to the remote repository
    Pushed(PutReceipt),
    /// No token configured; the operator commits the JSON by hand
    Manual,
    /// Push failed; the edit is kept locally
    Failed(RemoteError),
}

impl SyncOutcome {
    #[inline]
    #[must_use]
    pub fn is_pushed(&self) -> bool {
        matches!(self, Self::Pushed(_))
    }
}

impl Display for SyncOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pushed(receipt) => write!(f, "{} updated in the remote repository", receipt.path),
            Self::Manual => f.write_str(
                "no remote access token configured; export the JSON (`folio export`) and commit it manually",
            ),
            Self::Failed(e) => write!(
                f,
                "changes kept locally, but the remote update failed: {e}; export the JSON and commit it manually"
            ),
        }
    }
}

/// Kind of catalog edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Added,
    Updated,
    Deleted,
}

impl Display for EditKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Added => "added",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        })
    }
}

/// Result of add / edit / delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
    pub kind: EditKind,
    pub section: String,
    /// Record after the edit (before it, for deletions)
    pub record: PictureRecord,
    /// Raw URL of an image uploaded as part of the edit
    pub uploaded_image: Option<String>,
    pub sync: SyncOutcome,
}

impl Display for EditReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Picture {} {} in {}",
            self.record.id, self.kind, self.section
        )?;
        if let Some(url) = &self.uploaded_image {
            write!(f, " (image uploaded to {url})")?;
        }
        write!(f, "; {}", self.sync)
    }
}

/// Result of a full publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub catalog: PutReceipt,
    /// Page files written
    pub pushed: Vec<String>,
    /// Page files that failed, with the reason
    pub failed: Vec<(String, RemoteError)>,
}

impl PublishReport {
    #[inline]
    #[must_use]
    pub fn saved_count(&self) -> usize {
        self.pushed.len()
    }

    #[inline]
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Display for PublishReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            write!(
                f,
                "Saved {} and {} HTML file(s)",
                self.catalog.path,
                self.saved_count()
            )
        } else {
            write!(
                f,
                "Saved {} and {} HTML file(s); {} file(s) failed to save",
                self.catalog.path,
                self.saved_count(),
                self.failed_count()
            )
        }
    }
}

/// Result of pulling the catalog from the remote repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullReport {
    pub path: String,
    pub sections: usize,
    pub pictures: usize,
}

impl Display for PullReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pulled {}: {} picture(s) in {} section(s)",
            self.path, self.pictures, self.sections
        )
    }
}
