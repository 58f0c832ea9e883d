use serde::Serialize;

/// The kind of a classified block.
///
/// This is a closed set: the classifier never produces anything else. The
/// renderer's list wrapper lives in [`crate::render::Tag`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockKind {
    /// `# ` heading.
    Heading1,
    /// `## ` heading.
    Heading2,
    /// Any other text line, and blank lines.
    Paragraph,
    /// A line carrying a list marker (or any `-`/`*`).
    ListItem,
}

impl BlockKind {
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Heading1 => "Heading1",
            BlockKind::Heading2 => "Heading2",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::ListItem => "ListItem",
        }
    }
}

/// One entry of a block's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Child {
    Text(String),
    Block(Block),
}

impl Child {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(text) => Some(text),
            Child::Block(_) => None,
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<Block> for Child {
    fn from(block: Block) -> Self {
        Child::Block(block)
    }
}

/// A classified unit of input text.
///
/// Fields are private so a block cannot change kind or content once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    kind: BlockKind,
    content: Vec<Child>,
}

impl Block {
    pub fn new(kind: BlockKind, content: Vec<Child>) -> Self {
        Self { kind, content }
    }

    /// A block holding a single text child, which is all the classifier emits.
    pub fn text(kind: BlockKind, text: impl Into<String>) -> Self {
        Self::new(kind, vec![Child::Text(text.into())])
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn content(&self) -> &[Child] {
        &self.content
    }

    /// The first text child, if the block has one.
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(Child::as_text)
    }
}
