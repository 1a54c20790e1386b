//! Password digests
//!
//! Provides [`PasswordDigest`], a strongly-typed 32-byte SHA-256 output,
//! and the [`DigestBackend`] seam the gate hashes through.

use crate::error::GateError;
use sha2::{Digest, Sha256};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Digest of the factory-default password.
///
/// Accepting this digest forces the change-password prompt.
pub const DEFAULT_PASSWORD_DIGEST: &str =
    "751d3802f3db8cd910f2a6cacbbf1faf820b218cb8c3c0dd6a06188ce737c5c2";

const DEFAULT_DIGEST_BYTES: [u8; 32] = [
    0x75, 0x1d, 0x38, 0x02, 0xf3, 0xdb, 0x8c, 0xd9,
    0x10, 0xf2, 0xa6, 0xca, 0xcb, 0xbf, 0x1f, 0xaf,
    0x82, 0x0b, 0x21, 0x8c, 0xb8, 0xc3, 0xc0, 0xdd,
    0x6a, 0x06, 0x18, 0x8c, 0xe7, 0x37, 0xc5, 0xc2,
];

/// A 32-byte password digest (SHA-256)
///
/// Displayed and persisted as 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordDigest([u8; 32]);

impl PasswordDigest {
    /// Create a digest from raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Create digest from byte slice
    ///
    /// # Errors
    /// Returns error if slice length is not exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, GateError> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| GateError::InvalidDigest(format!("expected 32 bytes, got {}", bytes.len())))?;
        Ok(Self(arr))
    }

    /// The baked-in factory-default digest
    #[inline]
    #[must_use]
    pub const fn factory_default() -> Self {
        Self(DEFAULT_DIGEST_BYTES)
    }

    /// True for the factory-default digest
    #[inline]
    #[must_use]
    pub fn is_factory_default(&self) -> bool {
        *self == Self::factory_default()
    }

    /// Lowercase hex rendering
    #[inline]
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Display for PasswordDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for PasswordDigest {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim()).map_err(|e| GateError::InvalidDigest(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

/// One-way hash primitive used by the gate.
///
/// Implementations fail with [`GateError::DigestUnavailable`] when the
/// primitive cannot be reached.
pub trait DigestBackend: Send + Sync + fmt::Debug {
    /// Hash the UTF-8 bytes of `input`
    ///
    /// # Errors
    /// Returns [`GateError::DigestUnavailable`] if hashing is not possible
    fn digest(&self, input: &str) -> Result<PasswordDigest, GateError>;
}

/// SHA-256 via the `sha2` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Backend;

impl DigestBackend for Sha256Backend {
    fn digest(&self, input: &str) -> Result<PasswordDigest, GateError> {
        let out = Sha256::digest(input.as_bytes());
        Ok(PasswordDigest::new(out.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_default_matches_constant() {
        assert_eq!(PasswordDigest::factory_default().to_hex(), DEFAULT_PASSWORD_DIGEST);
    }

    #[test]
    fn sha256_known_vector() {
        let digest = Sha256Backend.digest("password").unwrap();
        assert_eq!(
            digest.to_string(),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn factory_password_hashes_to_default() {
        let digest = Sha256Backend.digest("&Can1989non").unwrap();
        assert!(digest.is_factory_default());
    }

    #[test]
    fn display_and_parse_roundtrip() {
        let digest = Sha256Backend.digest("hello world").unwrap();
        let parsed: PasswordDigest = digest.to_string().parse().unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            "zz".parse::<PasswordDigest>(),
            Err(GateError::InvalidDigest(_))
        ));
        assert!(matches!(
            "abcd".parse::<PasswordDigest>(),
            Err(GateError::InvalidDigest(_))
        ));
    }

    #[test]
    fn display_is_lowercase_hex() {
        let digest = PasswordDigest::new([0xAB; 32]);
        assert_eq!(digest.to_string(), "ab".repeat(32));
    }
}
