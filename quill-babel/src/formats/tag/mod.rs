//! XML-like tag serialization of the article preview
//!
//! Dumps the presentational tree the preview pane paints.
//!
//! ## Format
//!
//! - Node → tag name (kebab-case)
//! - Display text → text content
//! - Children → nested tags, two spaces per level
//! - Absent optional sections are left out
//!
//! ## Example
//!
//! ```text
//! <article>Your Blog Title
//!   <category>Uncategorized</category>
//!   <author>Author Name
//!     <avatar-initial>A</avatar-initial>
//!   </author>
//!   ...
//!   <body>
//!     <heading level="2" anchor="intro">Intro</heading>
//!     <line-break></line-break>
//!   </body>
//! </article>
//! ```

use crate::draft::BlogDraft;
use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{ArticlePreview, Avatar, BodyNode};
use crate::preview::{build_preview, build_preview_with_options, PreviewOptions};
use std::collections::HashMap;

struct TagWriter {
    output: String,
}

impl TagWriter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn leaf(&mut self, depth: usize, tag: &str, attrs: &[(&str, &str)], text: &str) {
        let indent = "  ".repeat(depth);
        self.output.push_str(&format!(
            "{indent}<{tag}{}>{}</{tag}>\n",
            render_attrs(attrs),
            escape_xml(text)
        ));
    }

    fn optional(&mut self, depth: usize, tag: &str, text: Option<&String>) {
        if let Some(text) = text {
            self.leaf(depth, tag, &[], text);
        }
    }

    fn open(&mut self, depth: usize, tag: &str, text: &str) {
        let indent = "  ".repeat(depth);
        self.output
            .push_str(&format!("{indent}<{tag}>{}\n", escape_xml(text)));
    }

    fn close(&mut self, depth: usize, tag: &str) {
        let indent = "  ".repeat(depth);
        self.output.push_str(&format!("{indent}</{tag}>\n"));
    }
}

fn render_attrs(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!(" {key}=\"{}\"", escape_xml(value)))
        .collect()
}

/// Serialize body nodes at the given depth.
fn write_body(writer: &mut TagWriter, depth: usize, body: &[BodyNode]) {
    for node in body {
        match node {
            BodyNode::Heading {
                level,
                text,
                anchor,
            } => {
                let level = level.to_string();
                writer.leaf(
                    depth,
                    "heading",
                    &[("level", level.as_str()), ("anchor", anchor.as_str())],
                    text,
                );
            }
            BodyNode::ListItem { text } => writer.leaf(depth, "list-item", &[], text),
            BodyNode::Paragraph { text } => writer.leaf(depth, "paragraph", &[], text),
            BodyNode::LineBreak => writer.leaf(depth, "line-break", &[], ""),
            BodyNode::Placeholder { text } => writer.leaf(depth, "placeholder", &[], text),
        }
    }
}

/// Serialize a whole article preview to tag format
pub fn serialize_preview(preview: &ArticlePreview) -> String {
    let mut w = TagWriter::new();

    w.open(0, "article", &preview.title);

    if let Some(image) = &preview.cover_image {
        w.leaf(1, "cover-image", &[("alt", image.alt.as_str())], &image.src);
    }
    w.leaf(1, "category", &[], &preview.category);
    for tag in &preview.tags {
        w.leaf(1, "tag", &[], tag);
    }
    w.optional(1, "intro-title", preview.intro_title.as_ref());

    w.open(1, "author", &preview.author.name);
    match &preview.author.avatar {
        Avatar::Image(image) => {
            w.leaf(2, "avatar-image", &[("alt", image.alt.as_str())], &image.src)
        }
        Avatar::Initial { letter } => w.leaf(2, "avatar-initial", &[], letter),
    }
    w.close(1, "author");

    w.leaf(1, "published-date", &[], &preview.published_date);
    w.leaf(1, "read-time", &[], &preview.read_time);
    w.leaf(1, "views", &[], &preview.stats.views);
    w.leaf(1, "likes", &[], &preview.stats.likes);
    w.optional(1, "summary", preview.summary.as_ref());

    if let Some(toc) = &preview.toc {
        w.open(1, "toc", "");
        for entry in toc.entries() {
            let indented = if entry.indented { "true" } else { "false" };
            let href = entry.href();
            w.leaf(
                2,
                "toc-entry",
                &[("href", href.as_str()), ("indented", indented)],
                &entry.text,
            );
        }
        w.close(1, "toc");
    }

    w.open(1, "body", "");
    write_body(&mut w, 2, &preview.body);
    w.close(1, "body");

    w.optional(1, "newsletter", preview.newsletter.as_ref());
    w.optional(1, "recent-blogs", preview.recent_blogs.as_ref());
    w.optional(1, "trending-news", preview.trending_news.as_ref());

    if let Some(cta) = &preview.cta {
        w.open(1, "cta", "");
        w.optional(2, "cta-title", cta.title.as_ref());
        w.optional(2, "cta-description", cta.description.as_ref());
        w.optional(2, "cta-button", cta.button_text.as_ref());
        w.close(1, "cta");
    }

    w.close(0, "article");
    w.output
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for XML-like tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like dump of the article preview"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tag", "xml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, draft: &BlogDraft) -> Result<String, FormatError> {
        Ok(serialize_preview(&build_preview(draft)))
    }

    fn serialize_with_options(
        &self,
        draft: &BlogDraft,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let preview_options = PreviewOptions::default().with_params(options);
        Ok(serialize_preview(&build_preview_with_options(
            draft,
            &preview_options,
        )))
    }
}
