//! Renderer interface and whole-catalog generation

use folio_model::{Catalog, MetadataTable, PictureRecord, SectionMetadata};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

/// One generated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPage {
    /// `{section}.html`
    pub filename: String,
    pub html: String,
}

/// Section pages from catalog data
pub trait Renderer: Send + Sync {
    /// Render one section page. Pure: equal inputs give equal output.
    fn render(&self, section_id: &str, pictures: &[PictureRecord], metadata: &SectionMetadata) -> String;

    /// Render every catalog section that has metadata, in catalog order.
    ///
    /// Sections without metadata are skipped with a warning.
    fn generate_all(&self, catalog: &Catalog, metadata: &MetadataTable) -> IndexMap<String, GeneratedPage> {
        let mut pages = IndexMap::new();
        for (section_id, pictures) in catalog.sections() {
            let Some(meta) = metadata.get(section_id) else {
                warn!(section = section_id, "No metadata found for section, skipping page");
                continue;
            };
            debug!(section = section_id, pictures = pictures.len(), "Rendering section page");
            pages.insert(
                section_id.to_string(),
                GeneratedPage {
                    filename: format!("{section_id}.html"),
                    html: self.render(section_id, pictures, meta),
                },
            );
        }
        pages
    }
}
