use regex::Regex;

use super::{
    kinds::{Heading, ListItem, Paragraph},
    types::BlockKind,
};

/// A pattern rule keyed by the block kind it produces.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: BlockKind,
    pub pattern: &'static Regex,
    /// `regex` replacement syntax, applied to every match in the line.
    pub replacement: &'static str,
}

impl Rule {
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    pub fn substitute(&self, line: &str) -> String {
        self.pattern
            .replace_all(line, self.replacement)
            .into_owned()
    }
}

/// The rule table, in evaluation order.
///
/// Order matters: one line can match several rules and the resulting blocks
/// are emitted in this order.
pub fn ordered_rules() -> [Rule; 4] {
    [
        Rule {
            kind: BlockKind::ListItem,
            pattern: ListItem::pattern(),
            replacement: ListItem::REPLACEMENT,
        },
        Rule {
            kind: BlockKind::Paragraph,
            pattern: Paragraph::pattern(),
            replacement: Paragraph::REPLACEMENT,
        },
        Rule {
            kind: BlockKind::Heading1,
            pattern: Heading::h1_pattern(),
            replacement: Heading::REPLACEMENT,
        },
        Rule {
            kind: BlockKind::Heading2,
            pattern: Heading::h2_pattern(),
            replacement: Heading::REPLACEMENT,
        },
    ]
}
