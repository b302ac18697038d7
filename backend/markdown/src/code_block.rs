//! Fenced Code Blocks
//!
//! Renders fenced blocks to their final `pre`/`code` elements before any other
//! markdown is interpreted, and keeps them out of reach of later passes.

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_code;
use crate::ir::Fragment;

/// Opening fence, optional language tag, newline, body, closing fence.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[ \t]*([\w+#.-]*)[ \t\r]*\n(.*?)```").unwrap());

/// Rendered code blocks of a single formatting call, keyed by position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeBlockTable {
    blocks: Vec<String>,
}

impl CodeBlockTable {
    pub fn get(&self, key: usize) -> Option<&str> {
        self.blocks.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn insert(&mut self, element: String) -> usize {
        self.blocks.push(element);
        self.blocks.len() - 1
    }
}

/// Builds the `pre`/`code` element for one fenced block.
pub fn render_code_block(language: &str, body: &str) -> String {
    let body = escape_code(body);
    let body = body.trim();
    let language = language.trim();
    if language.is_empty() {
        format!("<pre><code>{body}</code></pre>")
    } else {
        format!("<pre><code class=\"language-{language}\">{body}</code></pre>")
    }
}

/// Replaces every fenced block in `input` with a key into the returned table.
pub fn extract(input: &str) -> (Vec<Fragment>, CodeBlockTable) {
    let mut fragments = Vec::new();
    let mut table = CodeBlockTable::default();
    let mut cursor = 0;

    for caps in FENCE_RE.captures_iter(input) {
        let Some(fence) = caps.get(0) else { continue };
        if fence.start() > cursor {
            fragments.push(Fragment::Text(input[cursor..fence.start()].to_string()));
        }
        let language = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());
        let key = table.insert(render_code_block(language, body));
        fragments.push(Fragment::CodeBlock(key));
        cursor = fence.end();
    }

    if cursor < input.len() {
        fragments.push(Fragment::Text(input[cursor..].to_string()));
    }

    (fragments, table)
}
