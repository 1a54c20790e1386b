//! Site-wide constants stamped into every page

use serde::{Deserialize, Serialize};

/// Identity of the published site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    /// Public base URL pages are served under, without trailing slash
    pub base_url: String,
    /// Site and artist name used for author, creator and logo
    pub name: String,
    /// Share image when a section has no pictures
    pub fallback_image: String,
    pub contact_email: String,
    /// Cache-busting version of `styles.css`
    pub styles_version: u32,
    /// Cache-busting version of `gallery-styles.css`
    pub gallery_styles_version: u32,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            base_url: "https://cannon-art.github.io/Files".to_string(),
            name: "Cannon Art".to_string(),
            fallback_image:
                "https://raw.githubusercontent.com/Cannon-Art/Files/CannonArt-patch-1/OIP.jpg"
                    .to_string(),
            contact_email: "CannonNo1@iCloud.com".to_string(),
            styles_version: 8,
            gallery_styles_version: 12,
        }
    }
}

impl SiteProfile {
    /// Set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set site name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Public URL of a page file
    #[must_use]
    pub fn page_url(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.base_url.trim_end_matches('/'))
    }
}
