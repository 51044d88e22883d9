//! Treeviz formatter for the rendered body
//!
//! One line per body node, in source order, so line `n` of the output (after the
//! header) is line `n` of the body text:
//!
//! ```text
//! ⧉ Document (4 blocks, 1 headings)
//! ├─ § Setup (#setup)
//! ├─ ¶ Install the toolchain first.
//! ├─ ⎯
//! └─ • rustup
//! ```
//!
//! Labels are truncated to 30 characters.

use super::icons::get_icon;
use crate::draft::BlogDraft;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::BodyNode;
use crate::markup::{assign_anchors, tokenize};
use crate::render::{render_blocks, DEFAULT_PLACEHOLDER};
use std::collections::HashMap;

const MAX_LABEL_CHARS: usize = 30;

fn label(node: &BodyNode) -> String {
    let text = match node {
        BodyNode::Heading { text, anchor, .. } => format!("{text} (#{anchor})"),
        other => other.text().to_string(),
    };
    truncate(&text)
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_LABEL_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(MAX_LABEL_CHARS - 1).collect();
    short.push('…');
    short
}

pub fn to_treeviz_str(body: &str) -> String {
    to_treeviz_str_with_params(body, &HashMap::new())
}

/// Convert a body text to a treeviz string with optional parameters
///
/// # Parameters
///
/// - `"show-linum"`: prefix each node with its body line number
/// - `"placeholder"`: text of the node shown for an empty body
pub fn to_treeviz_str_with_params(body: &str, params: &HashMap<String, String>) -> String {
    let show_linum = params
        .get("show-linum")
        .map(|v| v != "false")
        .unwrap_or(false);

    let placeholder = params
        .get("placeholder")
        .map(String::as_str)
        .unwrap_or(DEFAULT_PLACEHOLDER);

    let blocks = tokenize(body);
    let headings = assign_anchors(&blocks);
    let nodes = render_blocks(&blocks, &headings, placeholder);

    let mut output = format!(
        "{} Document ({} blocks, {} headings)\n",
        get_icon("Document"),
        blocks.len(),
        headings.len()
    );

    let count = nodes.len();
    for (i, node) in nodes.iter().enumerate() {
        let connector = if i == count - 1 { "└─" } else { "├─" };
        let linum_prefix = if show_linum {
            format!("{:02} ", i + 1)
        } else {
            String::new()
        };
        let label = label(node);
        let icon = get_icon(node.node_type());
        if label.is_empty() {
            output.push_str(&format!("{linum_prefix}{connector} {icon}\n"));
        } else {
            output.push_str(&format!("{linum_prefix}{connector} {icon} {label}\n"));
        }
    }

    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree of the rendered body with Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, draft: &BlogDraft) -> Result<String, FormatError> {
        Ok(to_treeviz_str(&draft.content))
    }

    fn serialize_with_options(
        &self,
        draft: &BlogDraft,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_params(&draft.content, options))
    }
}
