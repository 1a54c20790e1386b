//! Text transforms applied to user-supplied content

/// Notes longer than this get a preview and a read-more control
pub const PREVIEW_CHARS: usize = 150;

/// Escape `& < > " '` for HTML text and attribute contexts alike
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Newlines become paragraph-like breaks
#[must_use]
pub fn nl2br(text: &str) -> String {
    text.replace('\n', "<br><br>")
}

/// First [`PREVIEW_CHARS`] characters, or `None` when the text fits whole
#[must_use]
pub fn preview(text: &str) -> Option<String> {
    text.char_indices()
        .nth(PREVIEW_CHARS)
        .map(|(cut, _)| format!("{}...", &text[..cut]))
}

/// Make serialized JSON safe to embed inside a `<script>` element.
///
/// Only valid for JSON text: `<`, `>` and `&` can appear there solely inside
/// string literals, where the `\uXXXX` form decodes to the same character.
#[must_use]
pub fn escape_json_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_is_not_idempotent_on_entities() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn nl2br_doubles_breaks() {
        assert_eq!(nl2br("a\nb"), "a<br><br>b");
    }

    #[test]
    fn preview_boundaries() {
        assert_eq!(preview(&"x".repeat(150)), None);
        let long = "y".repeat(151);
        assert_eq!(preview(&long), Some(format!("{}...", "y".repeat(150))));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let text = "é".repeat(151);
        let cut = preview(&text).unwrap();
        assert_eq!(cut.chars().count(), 153);
    }

    #[test]
    fn json_escape_roundtrips_through_parser() {
        let raw = serde_json::to_string("</script><b>&").unwrap();
        let escaped = escape_json_for_script(&raw);
        assert!(!escaped.contains('<'));
        let back: String = serde_json::from_str(&escaped).unwrap();
        assert_eq!(back, "</script><b>&");
    }
}
