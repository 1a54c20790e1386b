//! Plain-text rendering of listings and statuses

use folio_gate::TokenStatus;
use folio_model::{PictureRecord, SectionView};
use std::fmt::Write;

/// Listing of the selected sections
#[must_use]
pub fn format_listing(views: &[SectionView<'_>]) -> String {
    let mut out = String::new();
    for view in views {
        if view.pictures.is_empty() {
            let _ = writeln!(out, "No pictures in {} section yet", view.label);
            continue;
        }
        let _ = writeln!(
            out,
            "{} ({}): {} picture(s)",
            view.label,
            view.key,
            view.pictures.len()
        );
        for picture in view.pictures {
            let _ = writeln!(out, "  {}", picture_line(picture));
        }
    }
    out.truncate(out.trim_end().len());
    out
}

fn picture_line(picture: &PictureRecord) -> String {
    let mut line = format!("{}  {} [{}]", picture.id, picture.name, picture.medium);
    if let Some(year) = &picture.year {
        let _ = write!(line, " {year}");
    }
    if picture.visible_notes().is_some() {
        line.push_str(" *");
    }
    line
}

#[must_use]
pub fn format_token_status(status: &TokenStatus) -> String {
    match &status.masked {
        Some(masked) if status.configured => format!("Access token configured: {masked}"),
        _ => "No access token configured; remote features are disabled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::SectionFilter;
    use folio_test_utils::sample_catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn listing_shows_filled_and_empty_sections() {
        let catalog = sample_catalog();
        let filter = SectionFilter::Only("dc-characters".to_string());
        let text = format_listing(&catalog.filter(&filter));
        assert_eq!(
            text,
            "DC Characters (dc-characters): 2 picture(s)\n\
             \x20 dc-001  The Joker [Oil] 2019\n\
             \x20 dc-002  Batman [Oil] *"
        );

        let filter = SectionFilter::Only("recovery-art".to_string());
        assert_eq!(
            format_listing(&catalog.filter(&filter)),
            "No pictures in Recovery Art section yet"
        );
    }

    #[test]
    fn token_status_text() {
        let none = TokenStatus {
            configured: false,
            masked: None,
        };
        assert!(format_token_status(&none).starts_with("No access token"));

        let some = TokenStatus {
            configured: true,
            masked: Some("ghp_0123...".to_string()),
        };
        assert_eq!(format_token_status(&some), "Access token configured: ghp_0123...");
    }
}
