pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::{IoError, read_document, write_document};
pub use parsing::{
    ParsedDoc,
    blocks::{Block, BlockKind, Child},
    parse_blocks, parse_document, split_lines,
};
pub use render::{ElementNode, RenderNode, Tag, render_blocks, sanitize_list_text};

/// Full pipeline: text in, display nodes out.
pub fn render_markdown(text: &str) -> Vec<RenderNode> {
    render_blocks(&parse_document(text).blocks)
}
