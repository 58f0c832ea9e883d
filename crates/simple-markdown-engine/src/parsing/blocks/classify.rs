use super::{
    kinds::{ListItem, Paragraph},
    rules::ordered_rules,
    types::BlockKind,
};

/// A rule that matched a line, with the rule's substitution already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub kind: BlockKind,
    pub substituted: String,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The raw line, without its terminator.
    pub text: String,
    /// Rules whose pattern matched, in rule order.
    pub matches: Vec<RuleMatch>,
    /// The line contains `-` or `*` somewhere.
    pub has_marker_char: bool,
    /// The line contains a non-word, non-whitespace character.
    pub has_punctuation: bool,
    /// The line is exactly empty (whitespace does not count).
    pub is_empty: bool,
}

impl LineClass {
    /// Rule matches are only allowed to produce blocks when this holds.
    pub fn passes_guard(&self) -> bool {
        !self.has_marker_char
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, line: &str) -> LineClass {
        let matches = ordered_rules()
            .iter()
            .filter(|rule| rule.matches(line))
            .map(|rule| RuleMatch {
                kind: rule.kind,
                substituted: rule.substitute(line),
            })
            .collect();

        LineClass {
            text: line.to_string(),
            matches,
            has_marker_char: ListItem::has_marker_char(line),
            has_punctuation: Paragraph::has_punctuation(line),
            is_empty: line.is_empty(),
        }
    }
}
