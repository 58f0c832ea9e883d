use super::{
    classify::LineClass,
    types::{Block, BlockKind},
};

/// Phase 2 of block parsing: turns classified lines into blocks.
///
/// Each line contributes independently. The three sources of output (rule
/// matches, the marker-char list item, the empty-line paragraph) are checked
/// separately and can all fire for the same line.
pub struct BlockBuilder {
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self { out: vec![] }
    }

    pub fn push(&mut self, c: &LineClass) {
        if c.passes_guard() {
            for m in &c.matches {
                self.push_rule_match(m.kind, &m.substituted, c.has_punctuation);
            }
        }

        if c.has_marker_char {
            self.out.push(Block::text(BlockKind::ListItem, c.text.as_str()));
        }

        if c.is_empty {
            self.out.push(Block::text(BlockKind::Paragraph, ""));
        }
    }

    pub fn finish(self) -> Vec<Block> {
        self.out
    }

    fn push_rule_match(&mut self, kind: BlockKind, substituted: &str, has_punctuation: bool) {
        let block = match kind {
            // Punctuated paragraphs keep their slot but lose their text.
            BlockKind::Paragraph if has_punctuation => Block::text(kind, ""),
            _ => Block::text(kind, substituted),
        };
        self.out.push(block);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::MarkdownLineClassifier;
    use pretty_assertions::assert_eq;

    fn build(line: &str) -> Vec<Block> {
        let mut builder = BlockBuilder::new();
        builder.push(&MarkdownLineClassifier.classify(line));
        builder.finish()
    }

    #[test]
    fn plain_text_paragraph() {
        assert_eq!(
            build("Hello world"),
            vec![Block::text(BlockKind::Paragraph, "Hello world")]
        );
    }

    #[test]
    fn punctuated_paragraph_is_emptied() {
        assert_eq!(
            build("Hello, world"),
            vec![Block::text(BlockKind::Paragraph, "")]
        );
    }

    #[test]
    fn heading_with_hyphen_becomes_list_item_only() {
        assert_eq!(
            build("# Title - subtitle"),
            vec![Block::text(BlockKind::ListItem, "# Title - subtitle")]
        );
    }

    #[test]
    fn numbered_line_fires_list_rule() {
        assert_eq!(
            build("1. First"),
            vec![
                Block::text(BlockKind::ListItem, ""),
                Block::text(BlockKind::Paragraph, ""),
            ]
        );
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert_eq!(
            build("\u{feff}Hello world"),
            vec![Block::text(BlockKind::Paragraph, "\u{feff}Hello world")]
        );
    }

    #[test]
    fn empty_line_is_blank_paragraph() {
        assert_eq!(build(""), vec![Block::text(BlockKind::Paragraph, "")]);
    }
}
