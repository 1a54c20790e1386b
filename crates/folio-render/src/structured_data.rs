//! JSON-LD `CollectionPage` block

use crate::escape::escape_json_for_script;
use folio_model::{PictureRecord, SectionMetadata};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::error;

#[derive(Serialize)]
struct CollectionPage<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    description: &'a str,
    url: &'a str,
    #[serde(rename = "mainEntity")]
    main_entity: ItemList<'a>,
}

#[derive(Serialize)]
struct ItemList<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "itemListElement")]
    items: Vec<VisualArtwork<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VisualArtwork<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    position: usize,
    name: &'a str,
    image: &'a str,
    creator: Person<'a>,
    art_medium: &'static str,
    copyright_year: CopyrightYear<'a>,
}

#[derive(Serialize)]
struct Person<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

/// Year text when the record has one, otherwise the numeric current year
#[derive(Serialize)]
#[serde(untagged)]
enum CopyrightYear<'a> {
    Text(&'a str),
    Number(i32),
}

/// Inputs of the structured-data block
pub(crate) struct StructuredData<'a> {
    pub(crate) site_name: &'a str,
    pub(crate) page_url: &'a str,
    pub(crate) year: i32,
    pub(crate) metadata: &'a SectionMetadata,
    pub(crate) pictures: &'a [PictureRecord],
}

impl StructuredData<'_> {
    /// Serialize with 4-space indentation, script-safe
    pub(crate) fn to_script_json(&self) -> String {
        let page = CollectionPage {
            context: "https://schema.org",
            kind: "CollectionPage",
            name: format!("{} Collection - {}", self.metadata.hero_title, self.site_name),
            description: &self.metadata.og_description,
            url: self.page_url,
            main_entity: ItemList {
                kind: "ItemList",
                items: self
                    .pictures
                    .iter()
                    .enumerate()
                    .map(|(index, pic)| VisualArtwork {
                        kind: "VisualArtwork",
                        position: index + 1,
                        name: &pic.name,
                        image: &pic.image_url,
                        creator: Person {
                            kind: "Person",
                            name: self.site_name,
                        },
                        art_medium: pic.medium.as_str(),
                        copyright_year: match pic.year.as_deref() {
                            Some(year) if !year.is_empty() => CopyrightYear::Text(year),
                            _ => CopyrightYear::Number(self.year),
                        },
                    })
                    .collect(),
            },
        };

        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        if let Err(e) = page.serialize(&mut ser) {
            error!(error = %e, "Failed to serialize structured data");
            return "{}".to_string();
        }
        escape_json_for_script(&String::from_utf8_lossy(&buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{metadata, Medium, Section};
    use serde_json::Value;

    fn picture(name: &str, year: Option<&str>) -> PictureRecord {
        PictureRecord {
            id: "dc-001".into(),
            name: name.into(),
            image_url: "https://example.com/a.jpg".into(),
            medium: Medium::Acrylic,
            notes: None,
            year: year.map(Into::into),
        }
    }

    #[test]
    fn block_shape_and_year_fallback() {
        let meta = metadata::for_section(Section::DcCharacters);
        let pictures = vec![picture("Bat", Some("1999")), picture("Joker", None)];
        let json = StructuredData {
            site_name: "Cannon Art",
            page_url: "https://cannon-art.github.io/Files/dc-characters.html",
            year: 2031,
            metadata: &meta,
            pictures: &pictures,
        }
        .to_script_json();

        assert!(json.starts_with("{\n    \"@context\": \"https://schema.org\""));
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@type"], "CollectionPage");
        assert_eq!(value["name"], "DC Characters Collection - Cannon Art");
        let items = value["mainEntity"]["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["copyrightYear"], "1999");
        assert_eq!(items[1]["copyrightYear"], 2031);
        assert_eq!(items[1]["artMedium"], "Acrylic");
        assert_eq!(items[1]["creator"]["@type"], "Person");
    }
}
