//! Line-level blocks produced by the markup tokenizer.

use serde::Serialize;
use std::fmt;

/// Heading depth. Only `##` and `###` headings exist in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// HTML tag name for this level.
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// One classified line of body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    ListItem { text: String },
    Paragraph { text: String },
    Blank,
}

impl Block {
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn list_item(text: impl Into<String>) -> Self {
        Block::ListItem { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Name used by the textual dump formats.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::ListItem { .. } => "ListItem",
            Block::Paragraph { .. } => "Paragraph",
            Block::Blank => "Blank",
        }
    }
}

/// A heading block paired with its in-page anchor.
///
/// Anchors are not deduplicated: two headings with the same text share an anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchoredHeading {
    pub level: HeadingLevel,
    pub text: String,
    pub anchor: String,
}
