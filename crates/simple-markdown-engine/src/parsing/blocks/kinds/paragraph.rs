use std::sync::OnceLock;

use regex::Regex;

/// Paragraph block type.
///
/// Paragraphs are the catch-all leaf: any non-empty line matches. Lines that
/// contain punctuation are kept as an empty paragraph rather than their text.
pub struct Paragraph;

impl Paragraph {
    pub const REPLACEMENT: &'static str = "$1";

    pub fn pattern() -> &'static Regex {
        static PARAGRAPH: OnceLock<Regex> = OnceLock::new();
        PARAGRAPH.get_or_init(|| Regex::new(r"([^\n]+\n?)").expect("Invalid paragraph regex"))
    }

    /// Any character that is neither an ASCII word character nor whitespace.
    ///
    /// The whitespace set includes U+FEFF and excludes U+0085, so it is spelled
    /// out rather than using the regex crate's Unicode `\s`.
    pub const PUNCTUATION_CLASS: &'static str = concat!(
        r"[^0-9A-Za-z_",
        r"\t\n\x0B\x0C\r \x{a0}\x{1680}\x{2000}-\x{200a}",
        r"\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}\x{feff}]",
    );

    pub fn punctuation() -> &'static Regex {
        static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
        PUNCTUATION
            .get_or_init(|| Regex::new(Self::PUNCTUATION_CLASS).expect("Invalid punctuation regex"))
    }

    pub fn has_punctuation(line: &str) -> bool {
        Self::punctuation().is_match(line)
    }
}
