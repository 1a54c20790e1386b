//! The picture catalog
//!
//! A [`Catalog`] is loaded wholesale from the catalog document, mutated in
//! place by add / edit / delete, and serialized wholesale again. Section
//! order and picture order are display order and are always preserved.

use crate::error::CatalogError;
use crate::picture::{NewPicture, PictureField, PictureRecord};
use crate::section::{id_prefix_for, label_for, Section};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Ordered section → pictures mapping plus any extra top-level keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_sections", deserialize_with = "sections_or_default")]
    sections: IndexMap<String, Vec<PictureRecord>>,
    /// Unknown top-level keys, kept for round-trip
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Which sections a listing covers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SectionFilter {
    #[default]
    All,
    Only(String),
}

/// Borrowed view of one section for listings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionView<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub pictures: &'a [PictureRecord],
}

impl Catalog {
    /// Empty catalog with the five known sections
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: default_sections(),
            extra: Map::new(),
        }
    }

    /// Parse a catalog document
    ///
    /// # Errors
    /// Returns error if the document is not valid catalog JSON
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as pretty JSON with two-space indentation
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sections in document order
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[PictureRecord])> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Section keys in document order
    pub fn section_keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Pictures of one section
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&[PictureRecord]> {
        self.sections.get(key).map(Vec::as_slice)
    }

    /// Find a picture by section and id
    #[must_use]
    pub fn picture(&self, section: &str, id: &str) -> Option<&PictureRecord> {
        self.section(section)?.iter().find(|p| p.id == id)
    }

    /// Total number of pictures across all sections
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// True when no section holds a picture
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Next free id for a section.
    ///
    /// Probes `{prefix}-001`, `{prefix}-002`, ... and returns the first one
    /// not used in the section, so freed ids are handed out again.
    #[must_use]
    pub fn generate_id(&self, section: &str) -> String {
        let prefix = id_prefix_for(section);
        let existing: HashSet<&str> = self
            .section(section)
            .unwrap_or_default()
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        let mut counter: u32 = 1;
        loop {
            let candidate = format!("{prefix}-{counter:03}");
            if !existing.contains(candidate.as_str()) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Append a new picture, creating the section if needed
    ///
    /// # Errors
    /// Returns error if the name or image URL is blank
    pub fn add_picture(
        &mut self,
        section: &str,
        picture: NewPicture,
    ) -> Result<PictureRecord, CatalogError> {
        let id = self.generate_id(section);
        let record = picture.into_record(id)?;
        self.sections
            .entry(section.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    /// Replace one field of a picture; the value is trimmed first
    ///
    /// # Errors
    /// Returns error if the picture is missing or the value is invalid
    pub fn update_field(
        &mut self,
        section: &str,
        id: &str,
        field: PictureField,
        value: &str,
    ) -> Result<PictureRecord, CatalogError> {
        let picture = self.picture_mut(section, id)?;
        picture.apply_edit(field, value)?;
        Ok(picture.clone())
    }

    /// Remove a picture and return it
    ///
    /// # Errors
    /// Returns error if the section or picture is missing
    pub fn delete_picture(&mut self, section: &str, id: &str) -> Result<PictureRecord, CatalogError> {
        let pictures = self
            .sections
            .get_mut(section)
            .ok_or_else(|| CatalogError::SectionNotFound(section.to_string()))?;
        let index = pictures
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::picture_not_found(section, id))?;
        Ok(pictures.remove(index))
    }

    /// Sections selected by `filter`, in document order.
    ///
    /// `Only` on a key missing from the catalog yields one empty view so
    /// callers can report "nothing here yet".
    #[must_use]
    pub fn filter<'a>(&'a self, filter: &'a SectionFilter) -> Vec<SectionView<'a>> {
        match filter {
            SectionFilter::All => self
                .sections
                .iter()
                .map(|(key, pictures)| SectionView {
                    key,
                    label: label_for(key),
                    pictures,
                })
                .collect(),
            SectionFilter::Only(key) => vec![SectionView {
                key,
                label: label_for(key),
                pictures: self.section(key).unwrap_or_default(),
            }],
        }
    }

    fn picture_mut(&mut self, section: &str, id: &str) -> Result<&mut PictureRecord, CatalogError> {
        self.sections
            .get_mut(section)
            .ok_or_else(|| CatalogError::SectionNotFound(section.to_string()))?
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::picture_not_found(section, id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn default_sections() -> IndexMap<String, Vec<PictureRecord>> {
    Section::ALL
        .into_iter()
        .map(|s| (s.key().to_string(), Vec::new()))
        .collect()
}

/// A `null` sections object counts as missing.
fn sections_or_default<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, Vec<PictureRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, Vec<PictureRecord>>>::deserialize(deserializer)?;
    Ok(raw.unwrap_or_else(default_sections))
}
