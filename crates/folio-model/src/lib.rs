//! Folio Catalog Model
//!
//! The in-memory picture catalog and the static per-section metadata that
//! drives page generation.
//!
//! # Core Concepts
//!
//! - [`Catalog`]: ordered mapping from section keys to ordered picture lists
//! - [`PictureRecord`]: one artwork entry (`id`, `name`, `imageUrl`, ...)
//! - [`Section`]: the closed set of known gallery sections
//! - [`SectionMetadata`]: titles, descriptions and keywords for a section
//!
//! # Example
//!
//! ```rust
//! use folio_model::{Catalog, Medium, NewPicture, Section};
//!
//! let mut catalog = Catalog::new();
//! let added = catalog
//!     .add_picture(
//!         Section::DcCharacters.key(),
//!         NewPicture::new("The Joker", "https://example.com/joker.jpg", Medium::Oil),
//!     )
//!     .unwrap();
//! assert_eq!(added.id, "dc-001");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod catalog;
mod error;
mod picture;
mod section;

/// Static section metadata
pub mod metadata;

// Re-exports
pub use catalog::{Catalog, SectionFilter, SectionView};
pub use error::CatalogError;
pub use metadata::{MetadataTable, SectionMetadata};
pub use picture::{Medium, NewPicture, PictureField, PictureRecord};
pub use section::{id_prefix_for, label_for, Section};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn catalog_roundtrip_keeps_records_and_metadata_lookup() {
        let mut catalog = Catalog::new();
        catalog
            .add_picture(
                Section::MusicLegends.key(),
                NewPicture::new("Stones", "https://example.com/stones.png", Medium::MixedMedia)
                    .with_year("1969"),
            )
            .unwrap();

        let json = catalog.to_json_pretty().unwrap();
        let reloaded = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog, reloaded);

        let table = metadata::default_table();
        for (key, _) in reloaded.sections() {
            assert!(table.contains_key(key), "missing metadata for {key}");
        }
    }
}
