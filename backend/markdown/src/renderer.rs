//! Final HTML assembly
//!
//! Joins formatted lines with `<br>`, swaps protected code blocks back in by
//! key, then tidies line breaks around list markup and at the edges.

use std::sync::LazyLock;

use regex::Regex;

use crate::code_block::CodeBlockTable;
use crate::ir::{Fragment, Line};

pub const LINE_BREAK: &str = "<br>";

static BREAK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:<br>){2,}").unwrap());

/// Joins lines with line breaks and restores code blocks.
///
/// Breaks that would directly follow a code block are dropped so blocks never
/// pick up trailing blank space.
pub fn render_lines(lines: &[Line], blocks: &CodeBlockTable) -> String {
    let mut html = String::new();
    let mut after_code_block = false;

    for (index, line) in lines.iter().enumerate() {
        if index > 0 && !after_code_block {
            html.push_str(LINE_BREAK);
        }
        for fragment in line {
            match fragment {
                Fragment::Text(text) if text.is_empty() => {}
                Fragment::Text(text) => {
                    html.push_str(text);
                    after_code_block = false;
                }
                Fragment::CodeBlock(key) => {
                    if let Some(block) = blocks.get(*key) {
                        html.push_str(block);
                    }
                    after_code_block = true;
                }
            }
        }
    }

    html
}

/// Removes redundant line breaks.
pub fn cleanup(html: &str) -> String {
    let html = html
        .replace("<li><br>", "<li>")
        .replace("<br></li>", "</li>")
        .replace("<ul><br>", "<ul>")
        .replace("<br></ul>", "</ul>");
    let collapsed = BREAK_RUN_RE.replace_all(&html, "<br><br>");
    let trimmed: &str = &collapsed;
    let trimmed = trimmed.strip_prefix(LINE_BREAK).unwrap_or(trimmed);
    trimmed.strip_suffix(LINE_BREAK).unwrap_or(trimmed).to_string()
}
