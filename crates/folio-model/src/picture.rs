//! Picture records
//!
//! [`PictureRecord`] mirrors one entry of the catalog document. Optional
//! text fields are written as `""` when absent so the document keeps the
//! same shape the published site already reads.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Artwork medium, a fixed enumeration
///
/// Documents are read with the same leniency as [`FromStr`]; they are
/// always written with the canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Medium {
    Oil,
    Watercolour,
    Acrylic,
    Pencil,
    #[serde(rename = "Mixed Media")]
    MixedMedia,
}

impl Medium {
    /// All media in form order
    pub const ALL: [Medium; 5] = [
        Medium::Oil,
        Medium::Watercolour,
        Medium::Acrylic,
        Medium::Pencil,
        Medium::MixedMedia,
    ];

    /// Display and serialized spelling
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oil => "Oil",
            Self::Watercolour => "Watercolour",
            Self::Acrylic => "Acrylic",
            Self::Pencil => "Pencil",
            Self::MixedMedia => "Mixed Media",
        }
    }
}

impl Display for Medium {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medium {
    type Err = CatalogError;

    /// Case-insensitive; accepts `mixed-media` for the two-word medium.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| CatalogError::UnknownMedium(trimmed.to_string()))
    }
}

impl TryFrom<String> for Medium {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One artwork in a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureRecord {
    /// `{prefix}-{counter}`, unique within the section
    pub id: String,
    /// Display name, never empty
    pub name: String,
    /// Absolute image URL
    #[serde(default)]
    pub image_url: String,
    pub medium: Medium,
    /// Free text, may span several lines
    #[serde(default, with = "blank_as_none")]
    pub notes: Option<String>,
    /// Free text year, e.g. `2024` or `c. 1990`
    #[serde(default, with = "blank_as_none")]
    pub year: Option<String>,
}

impl PictureRecord {
    /// Notes that carry visible text
    #[must_use]
    pub fn visible_notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// Build the replacement value for `field` without touching `self`.
    fn edited(&self, field: PictureField, value: &str) -> Result<Self, CatalogError> {
        let value = value.trim();
        let mut next = self.clone();
        match field {
            PictureField::Name => {
                if value.is_empty() {
                    return Err(CatalogError::EmptyName);
                }
                next.name = value.to_string();
            }
            PictureField::ImageUrl => {
                if value.is_empty() {
                    return Err(CatalogError::EmptyImageUrl);
                }
                next.image_url = value.to_string();
            }
            PictureField::Medium => next.medium = value.parse()?,
            PictureField::Year => next.year = non_blank(value),
            PictureField::Notes => next.notes = non_blank(value),
        }
        Ok(next)
    }

    /// Apply a single-field edit; on error the record is unchanged.
    ///
    /// # Errors
    /// Returns error if the new value is invalid for the field
    pub fn apply_edit(&mut self, field: PictureField, value: &str) -> Result<(), CatalogError> {
        *self = self.edited(field, value)?;
        Ok(())
    }
}

/// Input for [`crate::Catalog::add_picture`]; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPicture {
    pub name: String,
    pub image_url: String,
    pub medium: Medium,
    pub year: Option<String>,
    pub notes: Option<String>,
}

impl NewPicture {
    /// Create input with the required fields
    #[must_use]
    pub fn new(name: impl Into<String>, image_url: impl Into<String>, medium: Medium) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            medium,
            year: None,
            notes: None,
        }
    }

    /// With year
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// With notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub(crate) fn into_record(self, id: String) -> Result<PictureRecord, CatalogError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        let image_url = self.image_url.trim();
        if image_url.is_empty() {
            return Err(CatalogError::EmptyImageUrl);
        }
        Ok(PictureRecord {
            id,
            name: name.to_string(),
            image_url: image_url.to_string(),
            medium: self.medium,
            notes: self.notes.as_deref().and_then(|n| non_blank(n.trim())),
            year: self.year.as_deref().and_then(|y| non_blank(y.trim())),
        })
    }
}

/// Editable picture fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PictureField {
    Name,
    ImageUrl,
    Medium,
    Year,
    Notes,
}

impl FromStr for PictureField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "imageUrl" | "image-url" | "image_url" => Ok(Self::ImageUrl),
            "medium" => Ok(Self::Medium),
            "year" => Ok(Self::Year),
            "notes" => Ok(Self::Notes),
            other => Err(CatalogError::UnknownField(other.to_string())),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// `""` on the wire, `None` in memory.
mod blank_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}
