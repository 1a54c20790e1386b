//! Folio Gate - password gate and credential store
//!
//! A deterrent, not a security boundary: the operator's password is hashed
//! with SHA-256 and compared with a stored reference digest.
//!
//! # Core Concepts
//!
//! - [`Gate`]: verify, change and unlock
//! - [`PasswordDigest`]: 32-byte digest rendered as lowercase hex
//! - [`CredentialStore`]: key-value persistence ([`FileStore`], [`MemoryStore`])
//! - [`Credentials`]: reference digest and remote-access token on a store
//!
//! # Example
//!
//! ```rust
//! use folio_gate::{Credentials, Gate, MemoryStore, Unlock};
//! use std::sync::Arc;
//!
//! let gate = Gate::new(Credentials::new(Arc::new(MemoryStore::new())));
//! gate.change_password("correct horse", Some("correct horse")).unwrap();
//!
//! match gate.unlock("correct horse").unwrap() {
//!     Unlock::Granted(session) => assert!(!session.kept_default_password()),
//!     _ => unreachable!(),
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod credentials;
mod digest;
mod error;
mod gate;
mod store;

// Re-exports
pub use credentials::{mask_token, Credentials, TokenStatus, MIN_TOKEN_LEN};
pub use digest::{DigestBackend, PasswordDigest, Sha256Backend, DEFAULT_PASSWORD_DIGEST};
pub use error::{GateError, StoreError};
pub use gate::{Gate, PendingChange, Session, Unlock, Verification, MIN_PASSWORD_LEN};
pub use store::{CredentialStore, FileStore, MemoryStore, ACCESS_TOKEN_KEY, PASSWORD_DIGEST_KEY};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn password_change_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        {
            let store = FileStore::open(&path).unwrap();
            let gate = Gate::new(Credentials::new(Arc::new(store)));
            gate.change_password("persisted-pass", None).unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        let gate = Gate::new(Credentials::new(Arc::new(store)));
        assert!(gate.verify("persisted-pass").unwrap().granted);
        assert!(!gate.reference_digest().unwrap().is_factory_default());
    }
}
