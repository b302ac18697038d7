//! HTML escaping helpers.

/// Escapes the three characters that can open markup inside a code element.
///
/// Ampersands go first so already-produced entities are not escaped twice.
pub fn escape_code(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes text for use anywhere in an HTML document, attribute values included.
pub fn escape_html(text: &str) -> String {
    escape_code(text)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
