//! Core data structures for the presentational tree.
//!
//! These are what a display layer paints. They carry final display text, with all
//! fallbacks already applied, so a renderer never has to consult the draft again.

use crate::ir::blocks::HeadingLevel;
use crate::markup::toc::Toc;
use serde::Serialize;

/// One node of the rendered article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BodyNode {
    /// A heading tagged with the same anchor the table of contents links to.
    Heading {
        level: HeadingLevel,
        text: String,
        anchor: String,
    },
    ListItem {
        text: String,
    },
    Paragraph {
        text: String,
    },
    LineBreak,
    /// Shown in place of the body while it is still empty.
    Placeholder {
        text: String,
    },
}

impl BodyNode {
    pub fn node_type(&self) -> &'static str {
        match self {
            BodyNode::Heading { .. } => "Heading",
            BodyNode::ListItem { .. } => "ListItem",
            BodyNode::Paragraph { .. } => "Paragraph",
            BodyNode::LineBreak => "LineBreak",
            BodyNode::Placeholder { .. } => "Placeholder",
        }
    }

    /// Display text, empty for line breaks.
    pub fn text(&self) -> &str {
        match self {
            BodyNode::Heading { text, .. }
            | BodyNode::ListItem { text }
            | BodyNode::Paragraph { text }
            | BodyNode::Placeholder { text } => text,
            BodyNode::LineBreak => "",
        }
    }
}

/// The whole article as it should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticlePreview {
    pub cover_image: Option<Image>,
    pub category: String,
    pub tags: Vec<String>,
    pub title: String,
    pub intro_title: Option<String>,
    pub author: Author,
    pub published_date: String,
    pub read_time: String,
    pub stats: Stats,
    pub summary: Option<String>,
    /// Absent when the body has no headings; never an empty outline.
    pub toc: Option<Toc>,
    pub body: Vec<BodyNode>,
    pub newsletter: Option<String>,
    pub recent_blogs: Option<String>,
    pub trending_news: Option<String>,
    pub cta: Option<CallToAction>,
}

/// Represents an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub avatar: Avatar,
}

/// Author picture, or a one-letter stand-in when no image is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Avatar {
    Image(Image),
    Initial { letter: String },
}

/// Engagement counters, shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub views: String,
    pub likes: String,
}

/// Closing call-to-action. At least one part is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
}
