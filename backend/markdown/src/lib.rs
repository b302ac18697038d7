//! Chat Reply Markdown Formatter
//!
//! Converts the constrained markdown subset produced by the hosted model
//! (fenced code, bold, inline code, flat bullet lists, line breaks) into the
//! HTML fragment rendered in chat transcripts.

pub mod code_block;
pub mod escape;
pub mod formatter;
pub mod inline;
pub mod ir;
pub mod list;
pub mod renderer;

pub use code_block::CodeBlockTable;
pub use escape::{escape_code, escape_html};
pub use formatter::format;
pub use ir::Fragment;
