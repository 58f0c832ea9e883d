//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, BlockKind},
    parse_blocks, parse_document, snapshot, split_lines,
};

// Fixture-based snapshot tests

#[test]
fn fixture_headings() {
    assert_fixture("headings");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_paragraphs() {
    assert_fixture("paragraphs");
}

#[test]
fn fixture_sample_document() {
    assert_fixture("sample_document");
}

#[test]
fn fixture_mixed_line_endings() {
    assert_fixture("mixed_line_endings");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse_document(&md);
    snapshot::invariants(split_lines(&md).len(), &doc.blocks);

    let snap = snapshot::normalize(&doc.blocks);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_debug_snapshot!(name, snap);
    });
}

// Single-line behaviour

/// An empty buffer is one empty line, which is a blank paragraph.
#[test]
fn empty_document() {
    assert_eq!(
        parse_blocks(""),
        vec![Block::text(BlockKind::Paragraph, "")]
    );
}

#[test]
fn heading_one_yields_single_heading() {
    let blocks = parse_blocks("# Title");
    let headings: Vec<_> = blocks
        .iter()
        .filter(|b| b.kind() == BlockKind::Heading1)
        .collect();
    assert_eq!(headings, vec![&Block::text(BlockKind::Heading1, "Title")]);
}

/// The `#` marker is punctuation, so the paragraph rule contributes an empty paragraph first.
#[test]
fn heading_is_preceded_by_emptied_paragraph() {
    assert_eq!(
        parse_blocks("# Title"),
        vec![
            Block::text(BlockKind::Paragraph, ""),
            Block::text(BlockKind::Heading1, "Title"),
        ]
    );
}

#[test]
fn heading_two_yields_single_heading() {
    let blocks = parse_blocks("## Title");
    assert_eq!(
        blocks
            .iter()
            .filter(|b| matches!(b.kind(), BlockKind::Heading1 | BlockKind::Heading2))
            .collect::<Vec<_>>(),
        vec![&Block::text(BlockKind::Heading2, "Title")]
    );
}

#[test]
fn bullet_is_kept_verbatim() {
    assert_eq!(
        parse_blocks("- item"),
        vec![Block::text(BlockKind::ListItem, "- item")]
    );
}

#[test]
fn hyphen_anywhere_suppresses_heading() {
    let blocks = parse_blocks("# Title - subtitle");
    assert_eq!(
        blocks,
        vec![Block::text(BlockKind::ListItem, "# Title - subtitle")]
    );
}

#[test]
fn asterisk_inside_paragraph_becomes_list_item() {
    assert_eq!(
        parse_blocks("2 * 3 is six"),
        vec![Block::text(BlockKind::ListItem, "2 * 3 is six")]
    );
}

#[test]
fn guard_only_blocks_rule_output() {
    let blocks = parse_blocks("a\n-\nb");
    assert_eq!(
        blocks,
        vec![
            Block::text(BlockKind::Paragraph, "a"),
            Block::text(BlockKind::ListItem, "-"),
            Block::text(BlockKind::Paragraph, "b"),
        ]
    );
}

#[test]
fn line_order_is_preserved() {
    let blocks = parse_blocks("one\ntwo\nthree");
    let texts: Vec<_> = blocks.iter().filter_map(Block::first_text).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn reparsing_is_deterministic() {
    let md = "# Todo\n- a\n\nplain";
    assert_eq!(parse_document(md), parse_document(md));
}
