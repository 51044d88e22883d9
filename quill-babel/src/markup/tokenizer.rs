//! Body text → [`Block`] sequence.

use crate::ir::blocks::{Block, HeadingLevel};

/// Classify every line of `source`.
///
/// Lines are split on `\n` only, so the result has exactly one block per line,
/// including a trailing blank block when the text ends with a newline. Empty input
/// yields no blocks at all.
pub fn tokenize(source: &str) -> Vec<Block> {
    if source.is_empty() {
        return Vec::new();
    }

    let blocks: Vec<Block> = source.split('\n').map(classify_line).collect();
    tracing::trace!(lines = blocks.len(), "tokenized body");
    blocks
}

fn classify_line(line: &str) -> Block {
    if let Some(text) = line.strip_prefix("### ") {
        Block::heading(HeadingLevel::H3, text)
    } else if let Some(text) = line.strip_prefix("## ") {
        Block::heading(HeadingLevel::H2, text)
    } else if let Some(text) = line.strip_prefix("- ") {
        Block::list_item(text)
    } else if line.trim().is_empty() {
        Block::Blank
    } else {
        Block::paragraph(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_body() {
        assert_eq!(
            tokenize("## A\n- b\n\nC"),
            vec![
                Block::heading(HeadingLevel::H2, "A"),
                Block::list_item("b"),
                Block::Blank,
                Block::paragraph("C"),
            ]
        );
    }

    #[test]
    fn test_empty_input_has_no_blocks() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_level_three_wins_over_level_two() {
        assert_eq!(
            tokenize("### Deep"),
            vec![Block::heading(HeadingLevel::H3, "Deep")]
        );
    }

    #[test]
    fn test_prefix_needs_trailing_space() {
        assert_eq!(
            tokenize("##Tight\n-dash\n#### Four"),
            vec![
                Block::paragraph("##Tight"),
                Block::paragraph("-dash"),
                Block::paragraph("#### Four"),
            ]
        );
    }

    #[test]
    fn test_heading_text_is_not_trimmed() {
        assert_eq!(
            tokenize("##  Spaced "),
            vec![Block::heading(HeadingLevel::H2, " Spaced ")]
        );
        assert_eq!(tokenize("## "), vec![Block::heading(HeadingLevel::H2, "")]);
    }

    #[test]
    fn test_whitespace_lines_are_blank_and_not_collapsed() {
        assert_eq!(
            tokenize("a\n   \n\t\n\nb"),
            vec![
                Block::paragraph("a"),
                Block::Blank,
                Block::Blank,
                Block::Blank,
                Block::paragraph("b"),
            ]
        );
    }

    #[test]
    fn test_trailing_newline_adds_blank() {
        assert_eq!(
            tokenize("text\n"),
            vec![Block::paragraph("text"), Block::Blank]
        );
    }

    #[test]
    fn test_paragraph_is_verbatim() {
        assert_eq!(
            tokenize("  indented *not bold*\r"),
            vec![Block::paragraph("  indented *not bold*\r")]
        );
    }
}
