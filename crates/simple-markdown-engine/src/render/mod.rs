//! # Tree Rendering
//!
//! Turns the flat block sequence into display nodes. Hosts map each [`Tag`] onto
//! their own element (an HTML tag in the desktop UI, a styled line in the terminal).
//!
//! List items are wrapped in their own `ul` and are the only nodes whose text is
//! sanitized: every character that is not a word character or whitespace is removed,
//! markers included. Every other block keeps its children verbatim.
//!
//! Each top-level node is keyed `{tag}-{index}` (`ul-{index}-li` for list wrappers),
//! so re-rendering the same parse gives the same keys.

use std::fmt;

use serde::Serialize;

use crate::parsing::blocks::{Block, BlockKind, Child, kinds::Paragraph};

/// The display element a node renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    H1,
    H2,
    P,
    Li,
    /// Wrapper around a single list item. Never produced by the classifier.
    Ul,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::P => "p",
            Tag::Li => "li",
            Tag::Ul => "ul",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<BlockKind> for Tag {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading1 => Tag::H1,
            BlockKind::Heading2 => Tag::H2,
            BlockKind::Paragraph => Tag::P,
            BlockKind::ListItem => Tag::Li,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementNode {
    pub tag: Tag,
    /// Unique among siblings; stable for a given block sequence.
    pub key: String,
    pub children: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderNode {
    Element(ElementNode),
    Text(String),
}

impl RenderNode {
    pub fn element(tag: Tag, key: impl Into<String>, children: Vec<RenderNode>) -> Self {
        RenderNode::Element(ElementNode {
            tag,
            key: key.into(),
            children,
        })
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            RenderNode::Element(el) => Some(el.tag),
            RenderNode::Text(_) => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            RenderNode::Element(el) => Some(&el.key),
            RenderNode::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element(el) => &el.children,
            RenderNode::Text(_) => &[],
        }
    }

    /// All text below this node, concatenated in document order.
    pub fn text_content(&self) -> String {
        match self {
            RenderNode::Text(text) => text.clone(),
            RenderNode::Element(el) => el.children.iter().map(Self::text_content).collect(),
        }
    }
}

/// Strips every character that is not an ASCII word character or whitespace.
pub fn sanitize_list_text(text: &str) -> String {
    Paragraph::punctuation().replace_all(text, "").into_owned()
}

/// Renders the whole block sequence, one top-level node per block.
pub fn render_blocks(blocks: &[Block]) -> Vec<RenderNode> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| render_block(block, index))
        .collect()
}

fn render_block(block: &Block, index: usize) -> RenderNode {
    let tag = Tag::from(block.kind());
    match block.kind() {
        BlockKind::ListItem => {
            let item = RenderNode::element(
                tag,
                format!("{tag}-{index}"),
                render_children(block.content(), &format!("{tag}-{index}"), true),
            );
            RenderNode::element(Tag::Ul, format!("{}-{index}-{tag}", Tag::Ul), vec![item])
        }
        _ => {
            let key = format!("{tag}-{index}");
            let children = render_children(block.content(), &key, false);
            RenderNode::element(tag, key, children)
        }
    }
}

fn render_children(content: &[Child], parent_key: &str, sanitize: bool) -> Vec<RenderNode> {
    content
        .iter()
        .enumerate()
        .map(|(i, child)| match child {
            Child::Text(text) if sanitize => RenderNode::Text(sanitize_list_text(text)),
            Child::Text(text) => RenderNode::Text(text.clone()),
            Child::Block(inner) => render_nested(inner, &format!("{parent_key}-{i}")),
        })
        .collect()
}

/// Nested blocks render with their own kind, keyed under their parent.
fn render_nested(block: &Block, key: &str) -> RenderNode {
    let tag = Tag::from(block.kind());
    match block.kind() {
        BlockKind::ListItem => {
            let item_key = format!("{key}-{tag}");
            let item = RenderNode::element(
                tag,
                item_key.clone(),
                render_children(block.content(), &item_key, true),
            );
            RenderNode::element(Tag::Ul, key, vec![item])
        }
        _ => RenderNode::element(tag, key, render_children(block.content(), key, false)),
    }
}
