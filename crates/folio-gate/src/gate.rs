//! The password gate
//!
//! [`Gate::unlock`] is the entry point for every mutating command. It yields
//! a [`Session`] directly, or a [`PendingChange`] when the factory password
//! was accepted; a pending change has to be resolved explicitly before a
//! session exists.

use crate::credentials::Credentials;
use crate::digest::{DigestBackend, PasswordDigest, Sha256Backend};
use crate::error::GateError;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Minimum accepted length of a new password
pub const MIN_PASSWORD_LEN: usize = 8;

/// Outcome of [`Gate::verify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    /// Digest matched the reference
    pub granted: bool,
    /// Granted with the factory-default password
    pub is_default_password: bool,
}

/// Proof that the operator passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    kept_default: bool,
}

impl Session {
    /// True when the operator chose to keep the factory password
    #[inline]
    #[must_use]
    pub fn kept_default_password(&self) -> bool {
        self.kept_default
    }
}

/// Access was granted with the factory password; a decision is owed
#[derive(Debug)]
#[must_use = "a pending change must be resolved to obtain a session"]
pub struct PendingChange<'g> {
    gate: &'g Gate,
}

impl PendingChange<'_> {
    /// Replace the factory password and open the session
    ///
    /// # Errors
    /// Same validation errors as [`Gate::change_password`]
    pub fn change_password(
        &self,
        new_password: &str,
        confirmation: Option<&str>,
    ) -> Result<Session, GateError> {
        self.gate.change_password(new_password, confirmation)?;
        Ok(Session {
            kept_default: false,
        })
    }

    /// Proceed with the factory password still in place
    pub fn continue_with_default(self) -> Session {
        warn!("Continuing with the factory-default password; change it with `folio passwd`");
        Session { kept_default: true }
    }
}

/// Result of [`Gate::unlock`]
#[derive(Debug)]
pub enum Unlock<'g> {
    /// Digest mismatch
    Denied,
    /// Access granted
    Granted(Session),
    /// Access granted with the factory password
    ChangeRequired(PendingChange<'g>),
}

/// Digest-comparing password gate
#[derive(Debug, Clone)]
pub struct Gate {
    credentials: Credentials,
    backend: Arc<dyn DigestBackend>,
}

impl Gate {
    /// Gate hashing with SHA-256
    pub fn new(credentials: Credentials) -> Self {
        Self::with_backend(credentials, Arc::new(Sha256Backend))
    }

    /// Gate with a custom digest backend
    pub fn with_backend(credentials: Credentials, backend: Arc<dyn DigestBackend>) -> Self {
        Self {
            credentials,
            backend,
        }
    }

    /// Underlying credentials
    #[inline]
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Digest of `password` exactly as given
    ///
    /// # Errors
    /// Returns [`GateError::DigestUnavailable`] if the backend cannot hash
    pub fn compute_digest(&self, password: &str) -> Result<PasswordDigest, GateError> {
        self.backend.digest(password)
    }

    /// Current reference digest
    ///
    /// # Errors
    /// Returns error if the credential store cannot be read
    pub fn reference_digest(&self) -> Result<PasswordDigest, GateError> {
        self.credentials.reference_digest()
    }

    /// Overwrite the reference digest
    ///
    /// # Errors
    /// Returns error if the credential store cannot be written
    pub fn set_reference_digest(&self, digest: &PasswordDigest) -> Result<(), GateError> {
        self.credentials.set_reference_digest(digest)
    }

    /// Compare a password against the reference digest
    ///
    /// # Errors
    /// - [`GateError::EmptyPassword`] if nothing remains after trimming
    /// - [`GateError::DigestUnavailable`] if hashing fails
    pub fn verify(&self, password: &str) -> Result<Verification, GateError> {
        let password = password.trim();
        if password.is_empty() {
            return Err(GateError::EmptyPassword);
        }

        let digest = self.compute_digest(password)?;
        let reference = self.reference_digest()?;
        let granted = digest == reference;
        let is_default_password = granted && digest.is_factory_default();

        debug!(granted, is_default_password, "Password verified");
        Ok(Verification {
            granted,
            is_default_password,
        })
    }

    /// Set a new password after validation
    ///
    /// # Errors
    /// - [`GateError::EmptyPassword`] if nothing remains after trimming
    /// - [`GateError::PasswordTooShort`] below [`MIN_PASSWORD_LEN`] characters
    /// - [`GateError::PasswordMismatch`] if a confirmation is given and differs
    pub fn change_password(
        &self,
        new_password: &str,
        confirmation: Option<&str>,
    ) -> Result<PasswordDigest, GateError> {
        let new_password = new_password.trim();
        if new_password.is_empty() {
            return Err(GateError::EmptyPassword);
        }

        let actual = new_password.chars().count();
        if actual < MIN_PASSWORD_LEN {
            return Err(GateError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
                actual,
            });
        }

        if let Some(confirmation) = confirmation {
            if confirmation.trim() != new_password {
                return Err(GateError::PasswordMismatch);
            }
        }

        let digest = self.compute_digest(new_password)?;
        self.set_reference_digest(&digest)?;
        info!("Password changed");
        Ok(digest)
    }

    /// Run the access flow for one session
    ///
    /// # Errors
    /// Propagates [`Gate::verify`] errors
    pub fn unlock(&self, password: &str) -> Result<Unlock<'_>, GateError> {
        let verification = self.verify(password)?;
        if !verification.granted {
            warn!("Access denied");
            return Ok(Unlock::Denied);
        }
        if verification.is_default_password {
            warn!("Factory-default password accepted; a password change is required");
            return Ok(Unlock::ChangeRequired(PendingChange { gate: self }));
        }
        info!("Access granted");
        Ok(Unlock::Granted(Session {
            kept_default: false,
        }))
    }
}
