//! Per-section page metadata
//!
//! Fixed configuration that governs everything on a generated page that is
//! not a picture: titles, hero banner, description paragraphs, and the
//! values of the `keywords` / `description` meta tags.

use crate::section::Section;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Page metadata for one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMetadata {
    /// Document `<title>`
    pub title: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    /// "About this collection" paragraphs, in order
    pub description: Vec<String>,
    pub keywords: String,
    /// Meta / Open Graph description
    pub og_description: String,
}

/// Section key → metadata
pub type MetadataTable = IndexMap<String, SectionMetadata>;

/// The metadata table for every known section
#[must_use]
pub fn default_table() -> MetadataTable {
    Section::ALL
        .into_iter()
        .map(|s| (s.key().to_string(), for_section(s)))
        .collect()
}

/// Metadata for one known section
#[must_use]
pub fn for_section(section: Section) -> SectionMetadata {
    match section {
        Section::DcCharacters => build(
            "DC Characters Collection - Batman & Joker Art | Cannon Art",
            "DC Characters",
            "Batman, The Joker, and the heroes and villains of the DC Universe",
            &[
                "This collection explores the iconic characters of the DC Universe, focusing on the eternal struggle between Batman and The Joker. Each piece captures the duality of heroism and villainy that defines these legendary characters.",
                "The artworks blend traditional comic book aesthetics with contemporary artistic techniques, creating a unique visual narrative that honors the legacy of DC's most beloved characters.",
            ],
            "DC characters, Batman art, Joker art, DC Universe, comic book art, superhero art, villain art, Batman vs Joker, Heath Ledger Joker, contemporary art, mixed media",
            "Explore Cannon DC Characters collection featuring Batman, The Joker, and iconic DC Universe heroes and villains.",
        ),
        Section::MarvelCharacters => build(
            "Marvel Characters Collection - Superhero Art | Cannon Art",
            "Marvel Characters",
            "Heroes and villains from the Marvel Universe",
            &[
                "This collection will feature iconic characters from the Marvel Universe. Stay tuned for new artwork celebrating the heroes and villains that have captivated audiences for generations.",
            ],
            "Marvel characters, superhero art, X-Men, Avengers, comic book art, Marvel Universe, contemporary art, mixed media",
            "Explore Cannon Marvel Characters collection featuring iconic heroes and villains from the Marvel Universe.",
        ),
        Section::MusicLegends => build(
            "Music Legends Collection - Rock & Roll Art | Cannon Art",
            "Music Legends",
            "Celebrating the icons of rock and roll history",
            &[
                "This collection pays tribute to the legendary rock bands that defined generations. From The Rolling Stones' timeless rock and roll energy to The Who's pioneering rock opera innovations, each piece captures the spirit and influence of these musical icons.",
                "The mixed media artworks blend contemporary techniques with the raw energy of rock music, creating visual tributes that honor their legendary status and enduring appeal across generations.",
            ],
            "music legends, rock and roll art, The Rolling Stones, The Who, music art, contemporary art, mixed media, rock music",
            "Explore Cannon Music Legends collection celebrating iconic rock and roll bands and musicians.",
        ),
        Section::RecoveryArt => build(
            "Recovery Art Collection - Hope & Transformation | Cannon Art",
            "Recovery Art",
            "Artwork inspired by themes of recovery, hope, and personal transformation",
            &[
                "This collection will feature artwork inspired by themes of recovery, hope, and personal transformation. Each piece will explore the journey of healing and the power of resilience.",
            ],
            "recovery art, addiction recovery, hope, transformation, healing art, contemporary art, mixed media, personal growth",
            "Explore Cannon Recovery Art collection featuring artwork inspired by themes of recovery, hope, and personal transformation.",
        ),
        Section::Miscellaneous => build(
            "Miscellaneous Collection - Diverse Creative Expressions | Cannon Art",
            "Miscellaneous",
            "A diverse collection of creative expressions",
            &[
                "This collection features a diverse range of creative expressions that don't fit into a single category. Each piece represents a unique artistic vision and creative exploration.",
            ],
            "miscellaneous art, diverse art, creative expressions, contemporary art, mixed media, unique artwork",
            "Explore Cannon Miscellaneous collection featuring diverse creative expressions and unique artwork.",
        ),
    }
}

fn build(
    title: &str,
    hero_title: &str,
    hero_subtitle: &str,
    description: &[&str],
    keywords: &str,
    og_description: &str,
) -> SectionMetadata {
    SectionMetadata {
        title: title.to_string(),
        hero_title: hero_title.to_string(),
        hero_subtitle: hero_subtitle.to_string(),
        description: description.iter().map(ToString::to_string).collect(),
        keywords: keywords.to_string(),
        og_description: og_description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_section_in_order() {
        let table = default_table();
        let keys: Vec<_> = table.keys().map(String::as_str).collect();
        let expected: Vec<_> = Section::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn every_entry_has_a_description() {
        for (key, meta) in default_table() {
            assert!(!meta.description.is_empty(), "{key} has no description");
            assert!(meta.title.ends_with("| Cannon Art"), "{key} title");
        }
    }
}
