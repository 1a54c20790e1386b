//! Folio Render - static gallery pages
//!
//! Turns a section's pictures plus its metadata into a complete HTML page
//! with navigation, gallery cards and an embedded JSON-LD block.
//!
//! # Core Concepts
//!
//! - [`Renderer`]: `render` one section, `generate_all` for a catalog
//! - [`HtmlRenderer`]: the page template
//! - [`SiteProfile`]: base URL, site name and other site-wide constants
//!
//! All user text is HTML-escaped in markup and JSON-encoded in the
//! structured-data block.
//!
//! # Example
//!
//! ```rust
//! use folio_model::{metadata, Section};
//! use folio_render::{HtmlRenderer, Renderer};
//!
//! let renderer = HtmlRenderer::new().with_year(2025);
//! let meta = metadata::for_section(Section::DcCharacters);
//! let html = renderer.render("dc-characters", &[], &meta);
//! assert!(html.contains("New artwork coming soon..."));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod escape;
mod html;
mod renderer;
mod site;
mod structured_data;

// Re-exports
pub use escape::{escape_html, PREVIEW_CHARS};
pub use html::HtmlRenderer;
pub use renderer::{GeneratedPage, Renderer};
pub use site::SiteProfile;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use folio_model::{metadata, Catalog, Medium, NewPicture, Section};

    #[test]
    fn generate_all_covers_default_sections_in_order() {
        let mut catalog = Catalog::new();
        catalog
            .add_picture(
                Section::RecoveryArt.key(),
                NewPicture::new("Dawn", "https://example.com/dawn.jpg", Medium::Watercolour),
            )
            .unwrap();

        let pages = HtmlRenderer::new()
            .with_year(2024)
            .generate_all(&catalog, &metadata::default_table());

        let keys: Vec<_> = pages.keys().map(String::as_str).collect();
        let expected: Vec<_> = Section::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(keys, expected);
        assert_eq!(pages["recovery-art"].filename, "recovery-art.html");
        assert!(pages["recovery-art"].html.contains("Dawn"));
    }
}
