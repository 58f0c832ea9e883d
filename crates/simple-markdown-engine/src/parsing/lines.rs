use std::sync::OnceLock;

use regex::Regex;

fn line_break() -> &'static Regex {
    static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
    LINE_BREAK.get_or_init(|| Regex::new(r"\r?\n|\r").expect("Invalid line break regex"))
}

/// Splits text on `\r\n`, `\r` or `\n`, keeping empty lines.
///
/// Never returns an empty vector: `""` is one empty line, and a trailing
/// terminator produces a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    line_break().split(text).collect()
}
