//! Inline emphasis: bold then inline code, each confined to a single line.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Applies bold and inline-code markup to a run of text.
///
/// Inline code content is emitted as-is, without escaping.
pub fn apply_emphasis(text: &str) -> String {
    let bold = BOLD_RE.replace_all(text, "<strong>${1}</strong>");
    INLINE_CODE_RE
        .replace_all(&bold, "<code>${1}</code>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(apply_emphasis("a **b** c **d**"), "a <strong>b</strong> c <strong>d</strong>");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(apply_emphasis("run `cargo test` now"), "run <code>cargo test</code> now");
    }

    #[test]
    fn test_bold_runs_before_inline_code() {
        assert_eq!(apply_emphasis("`**x**`"), "<code><strong>x</strong></code>");
    }

    #[test]
    fn test_does_not_cross_lines() {
        assert_eq!(apply_emphasis("**a\nb**"), "**a\nb**");
        assert_eq!(apply_emphasis("`a\nb`"), "`a\nb`");
    }

    #[test]
    fn test_unmatched_delimiters_stay_literal() {
        assert_eq!(apply_emphasis("**open"), "**open");
        assert_eq!(apply_emphasis("tick ` only"), "tick ` only");
    }
}
