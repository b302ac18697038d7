//! Terminal output utilities: ANSI styling, notes, and the terminal
//! transcript view used by `clawchat chat`.

use std::io::Write;

use once_cell::sync::Lazy;
use regex::Regex;

use clawchat_client::TranscriptView;
use clawchat_core::{Message, Sender};

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

// ---------------------------------------------------------------------------
// Formatted notes
// ---------------------------------------------------------------------------

pub fn note_info(msg: &str) {
    if supports_color() {
        println!("{CYAN}{BOLD}ℹ{RESET} {msg}");
    } else {
        println!("INFO: {msg}");
    }
}

pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

pub fn note_success(msg: &str) {
    if supports_color() {
        println!("{GREEN}{BOLD}✓{RESET} {msg}");
    } else {
        println!("OK: {msg}");
    }
}

// ---------------------------------------------------------------------------
// Reply HTML → terminal text
// ---------------------------------------------------------------------------

static PRE_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<pre><code(?: class="language-([^"]*)")?>"#).unwrap());

/// Renders formatter output as plain or ANSI-styled terminal text.
pub fn html_to_terminal(html: &str, color: bool) -> String {
    let style = |code: &'static str| if color { code } else { "" };
    let (bold, dim, cyan, reset) = (style(BOLD), style(DIM), style(CYAN), style(RESET));

    let text = PRE_OPEN_RE.replace_all(html, |caps: &regex::Captures| match caps.get(1) {
        Some(lang) => format!("\n{dim}[{}]\n", lang.as_str()),
        None => format!("\n{dim}"),
    });
    let text = text
        .replace("</code></pre>", &format!("{reset}\n"))
        .replace("</li><br>", "</li>")
        .replace("<strong>", bold)
        .replace("</strong>", reset)
        .replace("<code>", cyan)
        .replace("</code>", reset)
        .replace("<ul>", "")
        .replace("</ul>", "\n")
        .replace("<li>", "\n  • ")
        .replace("</li>", "")
        .replace("<br>", "\n");

    unescape(&text).trim_matches('\n').to_string()
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

// ---------------------------------------------------------------------------
// Transcript view
// ---------------------------------------------------------------------------

/// Prints transcript entries as they are appended.
pub struct TerminalView<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TranscriptView for TerminalView<W> {
    fn render(&mut self, message: &Message) {
        let (label, colour, body) = match message.sender() {
            Sender::User => ("you", GREEN, message.text().to_string()),
            Sender::Bot => ("bot", MAGENTA, html_to_terminal(message.text(), self.color)),
        };
        let _ = if self.color {
            writeln!(self.out, "{colour}{BOLD}{label} ›{RESET} {body}")
        } else {
            writeln!(self.out, "{label} › {body}")
        };
    }

    fn scroll_to_latest(&mut self) {
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strip ANSI escape codes from a string.
    fn strip_ansi(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    #[test]
    fn strips_ansi() {
        let colored = format!("{GREEN}hello{RESET}");
        assert_eq!(strip_ansi(&colored), "hello");
    }

    #[test]
    fn renders_list_and_emphasis_plain() {
        let html = markdown::format("Steps:\n- **build**\n- `ship`");
        assert_eq!(html_to_terminal(&html, false), "Steps:\n\n  • build\n  • ship");
    }

    #[test]
    fn renders_code_block_plain() {
        let html = markdown::format("```rust\nif a < b {}\n```");
        assert_eq!(html_to_terminal(&html, false), "[rust]\nif a < b {}");
    }

    #[test]
    fn colored_output_strips_back_to_plain() {
        let html = markdown::format("**x** and `y`");
        let colored = html_to_terminal(&html, true);
        assert!(colored.contains(BOLD));
        assert_eq!(strip_ansi(&colored), "x and y");
    }

    #[test]
    fn view_writes_labels() {
        let mut view = TerminalView::new(Vec::new(), false);
        view.render(&Message::user("hi"));
        view.render(&Message::bot("<strong>hello</strong>"));
        view.scroll_to_latest();
        let out = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(out, "you › hi\nbot › hello\n");
    }
}
