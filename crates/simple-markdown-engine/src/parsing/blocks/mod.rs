//! # Block Parsing
//!
//! Two-phase, line-at-a-time block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (which rules matched, guard status, punctuation, emptiness)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` turns each `LineClass` into
//!    zero or more `Block`s
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`, `Child`)
//! - **`kinds`**: Block-specific types owning their patterns (Heading, ListItem, Paragraph)
//! - **`rules`**: The ordered rule table keyed by `BlockKind`
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` applies the guard and the independent checks
//!
//! ## Key Invariants
//!
//! - No state crosses line boundaries
//! - A line containing `-` or `*` never produces a rule block, only a verbatim list item
//! - A line yields at most three blocks

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod rules;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier, RuleMatch};
pub use rules::{Rule, ordered_rules};
pub use types::{Block, BlockKind, Child};
