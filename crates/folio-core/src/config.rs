//! `folio.toml` configuration
//!
//! Every field has a default, so an empty or missing file is a valid
//! configuration for the production site.

use folio_remote::GitHubConfig;
use folio_render::SiteProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Local file locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Local catalog document
    pub catalog_path: PathBuf,
    /// Credential key-value file
    pub credentials_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("gallery-data.json"),
            credentials_path: PathBuf::from(".folio/credentials.json"),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub site: SiteProfile,
    pub remote: GitHubConfig,
    pub storage: StorageConfig,
}

impl FolioConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not a valid configuration
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path`, or defaults when it does not exist
    ///
    /// # Errors
    /// Returns error if an existing file cannot be read or parsed
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            debug!(path = %path.display(), "Loading configuration");
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Serialize to TOML
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// With site profile
    #[inline]
    #[must_use]
    pub fn with_site(mut self, site: SiteProfile) -> Self {
        self.site = site;
        self
    }

    /// With remote repository settings
    #[inline]
    #[must_use]
    pub fn with_remote(mut self, remote: GitHubConfig) -> Self {
        self.remote = remote;
        self
    }

    /// With local catalog path
    #[inline]
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage.catalog_path = path.into();
        self
    }

    /// With credential file path
    #[inline]
    #[must_use]
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage.credentials_path = path.into();
        self
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_production_defaults() {
        let config = FolioConfig::from_toml("").unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.remote.owner, "Cannon-Art");
        assert_eq!(config.remote.data_file, "gallery-data.json");
        assert_eq!(config.storage.credentials_path, PathBuf::from(".folio/credentials.json"));
        assert_eq!(config.site.base_url, "https://cannon-art.github.io/Files");
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = FolioConfig::from_toml(
            r#"
            [remote]
            owner = "someone"
            branch = "gh-pages"

            [storage]
            catalog_path = "data/catalog.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.remote.owner, "someone");
        assert_eq!(config.remote.repo, "Files");
        assert_eq!(config.remote.branch, "gh-pages");
        assert_eq!(config.storage.catalog_path, PathBuf::from("data/catalog.json"));
        assert_eq!(config.site.name, "Cannon Art");
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(matches!(
            FolioConfig::from_toml("[remote]\ntimeout_secs = \"soon\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn toml_roundtrip() {
        let config = FolioConfig::new().with_catalog_path("x.json");
        let text = config.to_toml().unwrap();
        assert_eq!(FolioConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load_or_default(&dir.path().join("folio.toml")).unwrap();
        assert_eq!(config, FolioConfig::default());
    }
}
