//! Blocks → presentational body nodes.
//!
//! Every block becomes exactly one node, in order. Heading nodes take their anchor
//! from the already assigned headings instead of deriving one again, so the body and
//! the TOC share a single source of anchors.

use crate::ir::blocks::{AnchoredHeading, Block};
use crate::ir::nodes::BodyNode;
use crate::markup::{assign_anchors, tokenize};

/// Text shown while the body is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Start writing your content...";

/// Render already tokenized blocks.
///
/// `headings` must be the result of [`assign_anchors`] over the same `blocks`; the
/// n-th heading block takes the n-th anchor. An empty block list renders as a single
/// placeholder node.
pub fn render_blocks(
    blocks: &[Block],
    headings: &[AnchoredHeading],
    placeholder: &str,
) -> Vec<BodyNode> {
    if blocks.is_empty() {
        return vec![BodyNode::Placeholder {
            text: placeholder.to_string(),
        }];
    }

    let mut anchors = headings.iter().map(|heading| heading.anchor.as_str());

    blocks
        .iter()
        .map(|block| match block {
            Block::Heading { level, text } => BodyNode::Heading {
                level: *level,
                text: text.clone(),
                anchor: anchors
                    .next()
                    .map(str::to_string)
                    .unwrap_or_else(|| crate::markup::anchor_for(text)),
            },
            Block::ListItem { text } => BodyNode::ListItem { text: text.clone() },
            Block::Paragraph { text } => BodyNode::Paragraph { text: text.clone() },
            Block::Blank => BodyNode::LineBreak,
        })
        .collect()
}

/// Tokenize and render a body in one go, with the default placeholder.
pub fn render(source: &str) -> Vec<BodyNode> {
    let blocks = tokenize(source);
    let headings = assign_anchors(&blocks);
    render_blocks(&blocks, &headings, DEFAULT_PLACEHOLDER)
}
