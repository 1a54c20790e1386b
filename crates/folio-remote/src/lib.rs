//! Folio Remote - repository file persistence
//!
//! [`RemoteStore`] is the seam between the control panel and wherever the
//! site's files live. [`GitHubContents`] implements it over the GitHub REST
//! contents API.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_remote::{GitHubConfig, GitHubContents, RemoteStore};
//!
//! # async fn example() -> Result<(), folio_remote::RemoteError> {
//! let store = GitHubContents::new(GitHubConfig::default(), "ghp_...")?;
//! let receipt = store
//!     .upsert_file("gallery-data.json", b"{}", "Update gallery data")
//!     .await?;
//! println!("wrote {} (new: {})", receipt.path, receipt.created);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod error;
mod github;
mod store;

// Re-exports
pub use error::RemoteError;
pub use github::{GitHubConfig, GitHubContents};
pub use store::{PutReceipt, RemoteFile, RemoteStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
