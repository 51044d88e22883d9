//! HTML format implementation
//!
//! Renders the article preview as a self-contained HTML5 page.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` pair to build a DOM and serialize it,
//! so escaping and tag balancing are handled by a browser-grade implementation
//! rather than string concatenation.
//!
//! # Element Mapping Table
//!
//! | Preview part     | HTML                                                        |
//! |------------------|-------------------------------------------------------------|
//! | Article          | `<article class="blog-preview">`                            |
//! | Cover image      | `<div class="cover-image-container"><img class="cover-image">` |
//! | Category / tags  | `<div class="badge badge-secondary">` / `badge-outline`     |
//! | Title            | `<h1 class="article-title">`                                |
//! | Summary          | `<div class="summary-box">`                                 |
//! | TOC              | `<nav class="toc-box">` + `<ul class="toc-list">`, `li.indented` for level 3 |
//! | Heading          | `<h2 id="anchor">` / `<h3 id="anchor">`                     |
//! | ListItem         | `<li>`                                                      |
//! | Paragraph        | `<p>`                                                       |
//! | Blank line       | `<br>`                                                      |
//! | Empty body       | `<p class="placeholder-text">`                              |
//! | Newsletter / CTA | `<div class="newsletter-cta">` / `<div class="cta-section">` |
//!
//! Heading `id`s are the anchors the TOC links to.
//!
//! # CSS and Theming
//!
//! The page embeds `css/baseline.css` plus one theme file from `css/themes/`.
//! Custom CSS passed through the `custom-css` option is appended last.
//!
//! # Metadata
//!
//! `<title>`, `<meta name="description">` and `<meta name="keywords">` follow the
//! export precedence rules (meta fields first), so the page head matches the
//! exported record.

mod serializer;

pub use serializer::{serialize_to_html, serialize_to_html_with_options, HtmlOptions};

use crate::draft::BlogDraft;
use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;

/// Format implementation for HTML
pub struct HtmlFormat {
    /// CSS theme to use for export
    theme: HtmlTheme,
}

/// Available CSS themes for HTML export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlTheme {
    /// Serif typography override (fonts only, layout comes from baseline)
    Serif,
    /// Baseline modern theme (no-op; relies on baseline.css)
    #[default]
    Modern,
}

impl HtmlTheme {
    /// Resolve a theme by its configuration name.
    ///
    /// Unknown names fall back to [`HtmlTheme::Modern`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "serif" => HtmlTheme::Serif,
            _ => HtmlTheme::Modern,
        }
    }
}

impl Default for HtmlFormat {
    fn default() -> Self {
        Self::new(HtmlTheme::Modern)
    }
}

impl HtmlFormat {
    /// Create a new HTML format with the specified theme
    pub fn new(theme: HtmlTheme) -> Self {
        Self { theme }
    }
}

/// The CSS every exported page starts from.
pub fn get_default_css() -> &'static str {
    serializer::BASELINE_CSS
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 preview page with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, draft: &BlogDraft) -> Result<String, FormatError> {
        serialize_to_html(draft, self.theme)
    }

    fn serialize_with_options(
        &self,
        draft: &BlogDraft,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let theme = options
            .get("theme")
            .map(|name| HtmlTheme::from_name(name))
            .unwrap_or(self.theme);

        let mut html_options = HtmlOptions::new(theme);
        if let Some(css) = options.get("custom-css") {
            html_options = html_options.with_custom_css(css.clone());
        }
        html_options.preview = html_options.preview.with_params(options);

        serialize_to_html_with_options(draft, html_options)
    }
}
