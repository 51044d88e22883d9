//! Draft → [`ArticlePreview`].
//!
//! Assembles everything the preview pane shows. Optional sections are `None` when
//! their source field is empty, so a display layer only has to check presence.
//!
//! The body is tokenized once and anchors are assigned once; the TOC and the body
//! nodes are both built from that single pass.

use crate::draft::BlogDraft;
use crate::ir::nodes::{ArticlePreview, Author, Avatar, CallToAction, Image, Stats};
use crate::markup::{assign_anchors, build_toc, tokenize};
use crate::render::{render_blocks, DEFAULT_PLACEHOLDER};
use std::collections::HashMap;

/// Fallback texts used when a field is left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    pub placeholder: String,
    pub untitled: String,
    pub uncategorized: String,
    pub anonymous_author: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            untitled: "Your Blog Title".to_string(),
            uncategorized: "Uncategorized".to_string(),
            anonymous_author: "Author Name".to_string(),
        }
    }
}

impl PreviewOptions {
    /// Override fallback texts from a format option map, ignoring unrelated keys.
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Self {
        if let Some(value) = params.get("placeholder") {
            self.placeholder = value.clone();
        }
        if let Some(value) = params.get("untitled") {
            self.untitled = value.clone();
        }
        if let Some(value) = params.get("uncategorized") {
            self.uncategorized = value.clone();
        }
        if let Some(value) = params.get("anonymous-author") {
            self.anonymous_author = value.clone();
        }
        self
    }
}

/// Build the preview with the default fallback texts.
pub fn build_preview(draft: &BlogDraft) -> ArticlePreview {
    build_preview_with_options(draft, &PreviewOptions::default())
}

pub fn build_preview_with_options(draft: &BlogDraft, options: &PreviewOptions) -> ArticlePreview {
    let blocks = tokenize(&draft.content);
    let headings = assign_anchors(&blocks);
    let toc = build_toc(&headings);
    let body = render_blocks(&blocks, &headings, &options.placeholder);

    tracing::debug!(
        blocks = blocks.len(),
        headings = headings.len(),
        "built article preview"
    );

    let cover_image = draft.images().into_iter().next().map(|src| Image {
        src,
        alt: draft.title.clone(),
    });

    ArticlePreview {
        cover_image,
        category: or_fallback(&draft.category, &options.uncategorized),
        tags: draft.tag_list(),
        title: or_fallback(&draft.title, &options.untitled),
        intro_title: present(&draft.intro_title),
        author: author(draft, options),
        published_date: draft.published_date.clone(),
        read_time: format!("{} min read", draft.read_time),
        stats: Stats {
            views: draft.views.clone(),
            likes: draft.likes.clone(),
        },
        summary: present(&draft.summary),
        toc,
        body,
        newsletter: present(&draft.newsletter_cta),
        recent_blogs: present(&draft.recent_blogs),
        trending_news: present(&draft.trending_news),
        cta: call_to_action(draft),
    }
}

fn author(draft: &BlogDraft, options: &PreviewOptions) -> Author {
    let avatar = if draft.author_image.is_empty() {
        let letter = draft
            .author_name
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| "A".to_string());
        Avatar::Initial { letter }
    } else {
        Avatar::Image(Image {
            src: draft.author_image.clone(),
            alt: draft.author_name.clone(),
        })
    };

    Author {
        name: or_fallback(&draft.author_name, &options.anonymous_author),
        avatar,
    }
}

fn call_to_action(draft: &BlogDraft) -> Option<CallToAction> {
    let cta = CallToAction {
        title: present(&draft.cta_title),
        description: present(&draft.cta_description),
        button_text: present(&draft.cta_button_text),
    };

    if cta.title.is_none() && cta.description.is_none() && cta.button_text.is_none() {
        None
    } else {
        Some(cta)
    }
}

fn present(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
