//! Folio Core - the gallery control panel
//!
//! Ties the catalog model, the password gate, the page renderer and the
//! remote file store together:
//!
//! - Parses `folio.toml` into [`FolioConfig`]
//! - Loads and saves the local catalog document
//! - Adds, edits and deletes pictures, uploading images on request
//! - Keeps the repository copy of the catalog in sync after each edit
//! - Publishes the catalog and every generated page
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_core::{ControlPanel, FolioConfig};
//! use folio_gate::Unlock;
//! use folio_model::{Medium, NewPicture};
//!
//! # async fn example() -> Result<(), folio_core::PanelError> {
//! let mut panel = ControlPanel::open(FolioConfig::new()).await?;
//! let gate = panel.gate();
//! let Unlock::Granted(session) = gate.unlock("my password")? else {
//!     return Ok(());
//! };
//!
//! let picture = NewPicture::new("The Joker", "https://example.com/joker.jpg", Medium::Oil);
//! let report = panel.add_picture(&session, "dc-characters", picture, None).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod config;
pub mod error;
pub mod panel;
pub mod report;
pub mod upload;

// Re-exports for convenience
pub use config::{ConfigError, FolioConfig, StorageConfig, DEFAULT_CONFIG_FILE};
pub use error::PanelError;
pub use panel::{load_catalog, ControlPanel, CATALOG_COMMIT_MESSAGE};
pub use report::{EditKind, EditReport, PublishReport, PullReport, SyncOutcome};
pub use upload::{image_extension, sanitize_stem, upload_file_name, IMAGE_EXTENSIONS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
