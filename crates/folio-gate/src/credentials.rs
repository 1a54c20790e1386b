//! Typed access to the two persisted credentials

use crate::digest::PasswordDigest;
use crate::error::GateError;
use crate::store::{CredentialStore, ACCESS_TOKEN_KEY, PASSWORD_DIGEST_KEY};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Minimum accepted length of a remote-access token
pub const MIN_TOKEN_LEN: usize = 20;

const MASK_VISIBLE_CHARS: usize = 8;

/// Display-safe summary of the stored token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStatus {
    /// Whether a token is stored
    pub configured: bool,
    /// First characters of the token followed by `...`
    pub masked: Option<String>,
}

impl TokenStatus {
    fn of(token: Option<&str>) -> Self {
        Self {
            configured: token.is_some(),
            masked: token.map(mask_token),
        }
    }
}

/// Mask a token for display: first eight characters plus `...`
#[must_use]
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(MASK_VISIBLE_CHARS).collect();
    format!("{visible}...")
}

/// Reference digest and access token on top of a [`CredentialStore`]
#[derive(Debug, Clone)]
pub struct Credentials {
    store: Arc<dyn CredentialStore>,
}

impl Credentials {
    /// Wrap a store
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Current reference digest.
    ///
    /// Falls back to the factory default when nothing is stored or the
    /// stored value does not parse.
    ///
    /// # Errors
    /// Returns error if the store cannot be read
    pub fn reference_digest(&self) -> Result<PasswordDigest, GateError> {
        match self.store.get(PASSWORD_DIGEST_KEY)? {
            None => Ok(PasswordDigest::factory_default()),
            Some(stored) => match stored.parse() {
                Ok(digest) => Ok(digest),
                Err(e) => {
                    warn!(error = %e, "Stored password digest is unreadable, using factory default");
                    Ok(PasswordDigest::factory_default())
                }
            },
        }
    }

    /// Persist a new reference digest
    ///
    /// # Errors
    /// Returns error if the store cannot be written
    pub fn set_reference_digest(&self, digest: &PasswordDigest) -> Result<(), GateError> {
        self.store.set(PASSWORD_DIGEST_KEY, &digest.to_hex())?;
        debug!("Reference digest updated");
        Ok(())
    }

    /// Stored access token, if any
    ///
    /// # Errors
    /// Returns error if the store cannot be read
    pub fn token(&self) -> Result<Option<String>, GateError> {
        Ok(self
            .store
            .get(ACCESS_TOKEN_KEY)?
            .filter(|t| !t.trim().is_empty()))
    }

    /// Validate and persist an access token
    ///
    /// # Errors
    /// - [`GateError::TokenMissing`] if the token is empty after trimming
    /// - [`GateError::TokenTooShort`] if it has fewer than [`MIN_TOKEN_LEN`] characters
    pub fn set_token(&self, token: &str) -> Result<TokenStatus, GateError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(GateError::TokenMissing);
        }
        let actual = token.chars().count();
        if actual < MIN_TOKEN_LEN {
            return Err(GateError::TokenTooShort {
                min: MIN_TOKEN_LEN,
                actual,
            });
        }
        self.store.set(ACCESS_TOKEN_KEY, token)?;
        info!("Remote access token saved");
        Ok(TokenStatus::of(Some(token)))
    }

    /// Remove the access token
    ///
    /// # Errors
    /// Returns error if the store cannot be written
    pub fn clear_token(&self) -> Result<(), GateError> {
        self.store.remove(ACCESS_TOKEN_KEY)?;
        info!("Remote access token cleared");
        Ok(())
    }

    /// Masked summary of the token
    ///
    /// # Errors
    /// Returns error if the store cannot be read
    pub fn token_status(&self) -> Result<TokenStatus, GateError> {
        let token = self.token()?;
        Ok(TokenStatus::of(token.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn credentials() -> Credentials {
        Credentials::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn missing_digest_falls_back_to_default() {
        let creds = credentials();
        assert!(creds.reference_digest().unwrap().is_factory_default());
    }

    #[test]
    fn garbage_digest_falls_back_to_default() {
        let creds = credentials();
        creds.store().set(PASSWORD_DIGEST_KEY, "not-a-digest").unwrap();
        assert!(creds.reference_digest().unwrap().is_factory_default());
    }

    #[test]
    fn token_validation() {
        let creds = credentials();
        assert!(matches!(creds.set_token("   "), Err(GateError::TokenMissing)));
        assert!(matches!(
            creds.set_token("ghp_short"),
            Err(GateError::TokenTooShort { min: 20, actual: 9 })
        ));
        assert!(!creds.token_status().unwrap().configured);

        let status = creds.set_token("  ghp_abcdefghijklmnopqrstuvwxyz  ").unwrap();
        assert!(status.configured);
        assert_eq!(status.masked.as_deref(), Some("ghp_abcd..."));
        assert_eq!(
            creds.token().unwrap().as_deref(),
            Some("ghp_abcdefghijklmnopqrstuvwxyz")
        );

        creds.clear_token().unwrap();
        assert_eq!(creds.token().unwrap(), None);
        assert_eq!(
            creds.token_status().unwrap(),
            TokenStatus {
                configured: false,
                masked: None
            }
        );
    }

    #[test]
    fn mask_handles_short_and_multibyte() {
        assert_eq!(mask_token("abc"), "abc...");
        assert_eq!(mask_token("ééééééééééé"), "éééééééé...");
    }
}
