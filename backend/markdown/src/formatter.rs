//! Reply formatter entry point.

use crate::code_block;
use crate::inline::apply_emphasis;
use crate::ir::{split_lines, Fragment};
use crate::list::group_lists;
use crate::renderer::{cleanup, render_lines};

/// Formats chat-reply markdown into an HTML fragment.
///
/// Passes run in a fixed order: fenced code blocks are rendered and set
/// aside, then bold, inline code, bullet lists and line breaks are applied to
/// the remaining text, code blocks are put back and stray breaks are removed.
/// Code blocks are opaque to every later pass, so bold or inline code can
/// never straddle one.
///
/// Only fenced code bodies are escaped. Ordinary text and inline code
/// content pass through verbatim, so the result must not be treated as
/// sanitized HTML when the input is untrusted.
///
/// The function is pure and total: malformed markdown degrades to literal
/// characters.
pub fn format(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let (fragments, blocks) = code_block::extract(markdown);
    let fragments = fragments
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Text(text) => Fragment::Text(apply_emphasis(&text)),
            block => block,
        })
        .collect();

    let lines = group_lists(split_lines(fragments));
    cleanup(&render_lines(&lines, &blocks))
}
