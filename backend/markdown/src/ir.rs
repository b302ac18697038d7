//! Formatting Intermediate Representation
//!
//! A document in flight is a flat sequence of fragments: markup-bearing text
//! and keys into the per-call [`CodeBlockTable`](crate::code_block::CodeBlockTable).
//! Keys are only created by code block extraction, so no input text can ever
//! be confused with a protected block.

/// One piece of a document being formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    CodeBlock(usize),
}

/// The fragments that make up one source line.
pub type Line = Vec<Fragment>;

/// Appends text to a line, merging with a trailing text fragment.
pub fn push_text(line: &mut Line, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Fragment::Text(last)) = line.last_mut() {
        last.push_str(text);
    } else {
        line.push(Fragment::Text(text.to_string()));
    }
}

/// Appends a fragment, merging adjacent text.
pub fn push_fragment(line: &mut Line, fragment: Fragment) {
    match fragment {
        Fragment::Text(text) => push_text(line, &text),
        block @ Fragment::CodeBlock(_) => line.push(block),
    }
}

/// Splits a fragment sequence on `\n`.
///
/// Always yields at least one (possibly empty) line. Code blocks stay on the
/// line where their fence opened.
pub fn split_lines(fragments: Vec<Fragment>) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line::new();

    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => {
                let mut parts = text.split('\n');
                if let Some(first) = parts.next() {
                    push_text(&mut current, first);
                }
                for part in parts {
                    lines.push(std::mem::take(&mut current));
                    push_text(&mut current, part);
                }
            }
            block @ Fragment::CodeBlock(_) => current.push(block),
        }
    }

    lines.push(current);
    lines
}
