//! Flat bullet lists.
//!
//! Lines are folded left to right with a two-state value. Consecutive item
//! lines become one `<ul>` block: an opening line, one `<li>` line per item
//! and a closing line. Anything else closes the open block and passes through
//! untouched. Nesting is not recognised: the indentation of the first item is
//! carried onto the opening tag and later indents are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::ir::{push_fragment, push_text, Fragment, Line};

/// Optional indent, `*` or `-`, at least one blank.
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*)[*-]\s+").unwrap());

enum ListState {
    Outside,
    Inside { indent: String, items: Vec<Line> },
}

enum Classified {
    Item { indent: String, content: Line },
    Plain(Line),
}

impl ListState {
    fn push_item(self, indent: String, content: Line) -> Self {
        match self {
            ListState::Outside => ListState::Inside {
                indent,
                items: vec![content],
            },
            ListState::Inside { indent, mut items } => {
                items.push(content);
                ListState::Inside { indent, items }
            }
        }
    }

    fn close_into(self, output: &mut Vec<Line>) {
        if let ListState::Inside { indent, items } = self {
            output.extend(render_list(&indent, items));
        }
    }
}

fn classify(mut line: Line) -> Classified {
    let prefix = match line.first() {
        Some(Fragment::Text(first)) => LIST_ITEM_RE
            .captures(first)
            .map(|caps| (caps[1].to_string(), caps[0].len())),
        _ => None,
    };
    let Some((indent, prefix_len)) = prefix else {
        return Classified::Plain(line);
    };

    let emptied = match line.first_mut() {
        Some(Fragment::Text(first)) => {
            first.replace_range(..prefix_len, "");
            first.is_empty()
        }
        _ => false,
    };
    if emptied {
        line.remove(0);
    }

    Classified::Item {
        indent,
        content: line,
    }
}

fn render_list(indent: &str, items: Vec<Line>) -> Vec<Line> {
    let mut open = Line::new();
    push_text(&mut open, indent);
    push_text(&mut open, "<ul>");

    let mut lines = vec![open];
    for item in items {
        let mut line = Line::new();
        push_text(&mut line, "<li>");
        for fragment in item {
            push_fragment(&mut line, fragment);
        }
        push_text(&mut line, "</li>");
        lines.push(line);
    }

    let mut close = Line::new();
    push_text(&mut close, "</ul>");
    lines.push(close);
    lines
}

/// Rewrites runs of list-item lines into `<ul>`, `<li>` and `</ul>` lines.
pub fn group_lists(lines: Vec<Line>) -> Vec<Line> {
    let (mut output, state) = lines.into_iter().fold(
        (Vec::new(), ListState::Outside),
        |(mut output, state), line| {
            let state = match classify(line) {
                Classified::Item { indent, content } => state.push_item(indent, content),
                Classified::Plain(line) => {
                    state.close_into(&mut output);
                    output.push(line);
                    ListState::Outside
                }
            };
            (output, state)
        },
    );
    state.close_into(&mut output);
    output
}
