use std::sync::OnceLock;

use regex::Regex;

/// List item block type.
///
/// The marker pattern accepts `1.`-style numbers and the `*`, `+`, `-`
/// bullets, each followed by a space. A list item also swallows following
/// lines that do not start a marker of their own; lines are split before
/// classification, so that continuation never has anything to consume.
pub struct ListItem;

impl ListItem {
    pub const MARKER_CHARS: [char; 2] = ['-', '*'];
    pub const REPLACEMENT: &'static str = "";

    pub fn pattern() -> &'static Regex {
        static LIST_ITEM: OnceLock<Regex> = OnceLock::new();
        LIST_ITEM.get_or_init(|| {
            Regex::new(r"(?m)^(?:[0-9]+\.|[*+-]) [^\r\n]*").expect("Invalid list item regex")
        })
    }

    /// Substring test used both as the rule guard and as the list item trigger.
    ///
    /// Matches anywhere in the line, not only at a marker position.
    pub fn has_marker_char(line: &str) -> bool {
        line.contains(Self::MARKER_CHARS)
    }
}
