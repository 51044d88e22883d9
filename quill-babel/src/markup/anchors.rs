//! Anchor ids for headings.
//!
//! Both the table of contents and the rendered body take their anchors from here, so
//! a TOC link and its heading can never disagree.

use crate::ir::blocks::{AnchoredHeading, Block};

/// Anchor for a heading text: lowercased, each whitespace run replaced by `-`.
///
/// Punctuation is kept as is.
pub fn anchor_for(text: &str) -> String {
    let mut anchor = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                anchor.push('-');
            }
            in_whitespace = true;
        } else {
            anchor.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }

    anchor
}

/// Pair every heading in `blocks` with its anchor, in source order.
///
/// Duplicate heading texts produce duplicate anchors.
pub fn assign_anchors(blocks: &[Block]) -> Vec<AnchoredHeading> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading { level, text } => Some(AnchoredHeading {
                level: *level,
                text: text.clone(),
                anchor: anchor_for(text),
            }),
            _ => None,
        })
        .collect()
}
