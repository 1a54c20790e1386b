//! Error types for catalog edits and (de)serialization

/// Errors raised by [`crate::Catalog`] operations.
///
/// Every edit validates its input before touching the catalog, so an error
/// always leaves the catalog exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Section key not present in the catalog
    #[error("section not found: '{0}'")]
    SectionNotFound(String),

    /// No picture with this id in the section
    #[error("picture '{id}' not found in section '{section}'")]
    PictureNotFound { section: String, id: String },

    /// Picture name empty after trimming
    #[error("picture name must not be empty")]
    EmptyName,

    /// Image URL empty after trimming
    #[error("image URL must not be empty")]
    EmptyImageUrl,

    /// Medium outside the fixed enumeration
    #[error("unknown medium: '{0}' (expected one of Oil, Watercolour, Acrylic, Pencil, Mixed Media)")]
    UnknownMedium(String),

    /// Editable field name not recognised
    #[error("unknown picture field: '{0}'")]
    UnknownField(String),

    /// Catalog document could not be parsed or written
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create picture-not-found error
    pub fn picture_not_found(section: impl Into<String>, id: impl Into<String>) -> Self {
        Self::PictureNotFound {
            section: section.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picture_not_found_display() {
        let err = CatalogError::picture_not_found("dc-characters", "dc-009");
        assert_eq!(
            err.to_string(),
            "picture 'dc-009' not found in section 'dc-characters'"
        );
    }

    #[test]
    fn json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CatalogError = parse_err.into();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
