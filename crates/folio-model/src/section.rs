//! Gallery sections
//!
//! Provides [`Section`], the closed set of categories the site publishes a
//! page for. Catalog documents may carry other keys; those are kept but get
//! the generic `pic` id prefix and no page.

use crate::error::CatalogError;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Id prefix for section keys outside the known set
const FALLBACK_PREFIX: &str = "pic";

/// A known gallery section, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    DcCharacters,
    MarvelCharacters,
    MusicLegends,
    RecoveryArt,
    Miscellaneous,
}

impl Section {
    /// All sections in navigation order
    pub const ALL: [Section; 5] = [
        Section::DcCharacters,
        Section::MarvelCharacters,
        Section::MusicLegends,
        Section::RecoveryArt,
        Section::Miscellaneous,
    ];

    /// Catalog key (also the page file stem)
    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::DcCharacters => "dc-characters",
            Self::MarvelCharacters => "marvel-characters",
            Self::MusicLegends => "music-legends",
            Self::RecoveryArt => "recovery-art",
            Self::Miscellaneous => "miscellaneous",
        }
    }

    /// Human-readable name used in navigation and listings
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DcCharacters => "DC Characters",
            Self::MarvelCharacters => "Marvel Characters",
            Self::MusicLegends => "Music Legends",
            Self::RecoveryArt => "Recovery Art",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Prefix for generated picture ids
    #[inline]
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::DcCharacters => "dc",
            Self::MarvelCharacters => "marvel",
            Self::MusicLegends => "music",
            Self::RecoveryArt => "recovery",
            Self::Miscellaneous => "misc",
        }
    }

    /// Generated page file name (`{key}.html`)
    #[inline]
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.html", self.key())
    }

    /// Look up a section by exact key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| CatalogError::SectionNotFound(s.to_string()))
    }
}

/// Id prefix for any section key, known or not
#[must_use]
pub fn id_prefix_for(key: &str) -> &'static str {
    Section::from_key(key).map_or(FALLBACK_PREFIX, Section::id_prefix)
}

/// Display label for any section key; unknown keys label themselves
#[must_use]
pub fn label_for(key: &str) -> &str {
    match Section::from_key(key) {
        Some(section) => section.label(),
        None => key,
    }
}
