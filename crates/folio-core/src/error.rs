//! Control panel errors

use crate::config::ConfigError;
use folio_gate::{GateError, StoreError};
use folio_model::CatalogError;
use folio_remote::RemoteError;
use std::path::PathBuf;

/// Main error type for control panel operations
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Catalog push failed during publish, before any page was pushed
    #[error(
        "publish stopped before any page was pushed: {0}; local changes are kept, export the JSON (`folio export`) and commit it manually"
    )]
    PublishAborted(#[source] RemoteError),

    /// Local file error
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operation needs a remote-access token
    #[error("a remote access token is required to {0}; set one with `folio token set`")]
    TokenRequired(&'static str),

    /// Selected upload is not an image file
    #[error("not an image file: {0}")]
    NotAnImage(PathBuf),

    /// No page metadata for the section
    #[error("no page metadata for section {0}")]
    MetadataMissing(String),

    /// File absent from the remote repository
    #[error("{0} does not exist in the remote repository")]
    RemoteFileMissing(String),

    /// Remote file is not UTF-8 text
    #[error("{0} is not valid UTF-8")]
    NotText(String),
}

impl PanelError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<StoreError> for PanelError {
    fn from(e: StoreError) -> Self {
        Self::Gate(GateError::Store(e))
    }
}
