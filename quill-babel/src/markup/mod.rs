//! The body markup: a small, line-oriented subset of Markdown.
//!
//! Each line is classified on its own, in this order:
//!
//! | Line starts with     | Block                       |
//! |----------------------|-----------------------------|
//! | `### `               | Heading, level 3            |
//! | `## `                | Heading, level 2            |
//! | `- `                 | ListItem                    |
//! | (empty / whitespace) | Blank                       |
//! | anything else        | Paragraph, line kept as is  |
//!
//! There is no nesting, no multi-line block and no inline markup. Text that looks
//! malformed is simply a paragraph.
//!
//! Stages:
//!
//! - [`tokenizer`]: body text → blocks
//! - [`anchors`]: blocks → anchored headings
//! - [`toc`]: anchored headings → optional table of contents

pub mod anchors;
pub mod toc;
pub mod tokenizer;

pub use anchors::{anchor_for, assign_anchors};
pub use toc::{build_toc, Toc, TocEntry};
pub use tokenizer::tokenize;
