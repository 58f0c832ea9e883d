// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Todo\n\n## Section\n\nParagraph with some content\n\n- Bullet point\n    - Indented item\n1. Numbered item\n+ Plus item\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_keystroke_sequence(document: &str) -> Vec<String> {
    // Every prefix of the document, as the host would see it while typing.
    document
        .char_indices()
        .map(|(i, c)| document[..i + c.len_utf8()].to_string())
        .collect()
}
