//! Image upload naming
//!
//! Uploaded images are stored as `{image_dir}/{stem}.{ext}` where the stem
//! is derived from the picture name, so re-uploading an image for the same
//! name overwrites the previous file.

use crate::error::PanelError;
use std::path::Path;

/// Accepted image file extensions (compared case-insensitively)
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "svg", "avif", "tif", "tiff",
];

const FALLBACK_STEM: &str = "image";

/// File stem for a picture name: non-alphanumerics become `_`, lowercased
#[must_use]
pub fn sanitize_stem(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

/// Extension of an image file, as written in the file name
///
/// # Errors
/// Returns [`PanelError::NotAnImage`] for missing or non-image extensions
pub fn image_extension(path: &Path) -> Result<&str, PanelError> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|ext| IMAGE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .ok_or_else(|| PanelError::NotAnImage(path.to_path_buf()))
}

/// Remote file name for uploading `source` as the image of `picture_name`
///
/// # Errors
/// Returns [`PanelError::NotAnImage`] if `source` is not an image file
pub fn upload_file_name(picture_name: &str, source: &Path) -> Result<String, PanelError> {
    let ext = image_extension(source)?;
    Ok(format!("{}.{ext}", sanitize_stem(picture_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_replaces_each_special_char() {
        assert_eq!(sanitize_stem("The Joker (2019)!"), "the_joker__2019__");
        assert_eq!(sanitize_stem("  Stones  "), "stones");
        assert_eq!(sanitize_stem("Café"), "caf_");
        assert_eq!(sanitize_stem("   "), "image");
    }

    #[test]
    fn extension_check() {
        assert_eq!(image_extension(Path::new("a/b/photo.JPG")).unwrap(), "JPG");
        assert!(matches!(
            image_extension(Path::new("notes.txt")),
            Err(PanelError::NotAnImage(_))
        ));
        assert!(image_extension(Path::new("no_extension")).is_err());
    }

    #[test]
    fn upload_name_keeps_original_extension() {
        assert_eq!(
            upload_file_name("Music Legends: The Who", Path::new("/tmp/who.webp")).unwrap(),
            "music_legends__the_who.webp"
        );
    }
}
