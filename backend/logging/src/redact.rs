//! Log Redaction Layer
//!
//! Scrubs API keys and bearer tokens from strings before they are logged.

use regex::Regex;
use std::sync::LazyLock;

static API_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sk-(?:or-v1-)?[a-zA-Z0-9]{16,}").unwrap());
static BEARER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9\-\._~+/]+=*").unwrap());
static KEY_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)((?:api[_-]?key|token)=)[^&\s]+").unwrap());

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = BEARER_RE.replace_all(input, "Bearer [REDACTED_TOKEN]");
    let redacted = API_KEY_RE.replace_all(&redacted, "[REDACTED_KEY]");
    KEY_PARAM_RE
        .replace_all(&redacted, "${1}[REDACTED]")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction() {
        let raw = "key sk-or-v1-abcdef0123456789abcdef with Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
        let clean = redact_sensitive_data(raw);
        assert!(!clean.contains("abcdef0123456789"));
        assert!(!clean.contains("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"));
        assert!(clean.contains("[REDACTED_KEY]"));
    }

    #[test]
    fn test_query_param_redaction() {
        let clean = redact_sensitive_data("GET /v1?api_key=secret123&x=1");
        assert_eq!(clean, "GET /v1?api_key=[REDACTED]&x=1");
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "How do I write a **for** loop in Rust?";
        assert_eq!(redact_sensitive_data(text), text);
    }
}
