use std::sync::OnceLock;

use regex::Regex;

/// Heading block types (levels 1 and 2 only).
///
/// Each level owns its marker pattern. The capture group is the heading text,
/// so substituting `$1` strips the marker.
pub struct Heading;

impl Heading {
    pub const REPLACEMENT: &'static str = "$1";

    pub fn h1_pattern() -> &'static Regex {
        static H1: OnceLock<Regex> = OnceLock::new();
        H1.get_or_init(|| Regex::new(r"(?m)^# (.*$)").expect("Invalid heading 1 regex"))
    }

    pub fn h2_pattern() -> &'static Regex {
        static H2: OnceLock<Regex> = OnceLock::new();
        H2.get_or_init(|| Regex::new(r"(?m)^## (.*$)").expect("Invalid heading 2 regex"))
    }
}
