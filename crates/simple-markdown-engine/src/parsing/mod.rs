pub mod blocks;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};
pub use lines::split_lines;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

/// Parses a whole buffer. Total: every input produces a (possibly empty) block list.
pub fn parse_document(text: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    let lines = split_lines(text);
    for line in &lines {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    let blocks = builder.finish();
    log::trace!("parsed {} lines into {} blocks", lines.len(), blocks.len());

    ParsedDoc { blocks }
}

/// Convenience: parse and keep only the blocks.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    parse_document(text).blocks
}
