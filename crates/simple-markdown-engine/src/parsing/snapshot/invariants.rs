use crate::parsing::blocks::{Block, Child};

/// The most blocks one line can contribute: rule blocks, a list item, a blank paragraph.
pub const MAX_BLOCKS_PER_LINE: usize = 3;

/// Validates classifier output invariants.
///
/// Asserts that:
/// - There are at most `MAX_BLOCKS_PER_LINE` blocks per source line
/// - Every block has exactly one child
/// - That child is text, never a nested block
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(line_count: usize, blocks: &[Block]) {
    assert!(
        blocks.len() <= MAX_BLOCKS_PER_LINE * line_count,
        "too many blocks: {} for {} lines",
        blocks.len(),
        line_count
    );
    for (i, b) in blocks.iter().enumerate() {
        assert_eq!(
            b.content().len(),
            1,
            "block {i} ({:?}) should have exactly one child: {:?}",
            b.kind(),
            b.content()
        );
        assert!(
            matches!(b.content()[0], Child::Text(_)),
            "block {i} ({:?}) has a nested block child",
            b.kind()
        );
    }
}
