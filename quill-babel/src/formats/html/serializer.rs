//! HTML serialization (draft → HTML export)
//!
//! Pipeline: BlogDraft → ArticlePreview → RcDom → HTML string

use crate::draft::BlogDraft;
use crate::error::FormatError;
use crate::export::export_record;
use crate::formats::html::HtmlTheme;
use crate::ir::nodes::{ArticlePreview, Avatar, BodyNode, CallToAction};
use crate::markup::toc::Toc;
use crate::preview::{build_preview_with_options, PreviewOptions};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

pub(crate) const BASELINE_CSS: &str = include_str!("../../../css/baseline.css");
const THEME_MODERN_CSS: &str = include_str!("../../../css/themes/theme-modern.css");
const THEME_SERIF_CSS: &str = include_str!("../../../css/themes/theme-serif.css");

/// Options for HTML serialization
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// CSS theme to use
    pub theme: HtmlTheme,
    /// Optional custom CSS to append after the baseline and theme CSS
    pub custom_css: Option<String>,
    /// Fallback texts for empty fields
    pub preview: PreviewOptions,
}

impl HtmlOptions {
    pub fn new(theme: HtmlTheme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Serialize a draft to HTML with the given theme
pub fn serialize_to_html(draft: &BlogDraft, theme: HtmlTheme) -> Result<String, FormatError> {
    serialize_to_html_with_options(draft, HtmlOptions::new(theme))
}

/// Serialize a draft to HTML with full options
pub fn serialize_to_html_with_options(
    draft: &BlogDraft,
    options: HtmlOptions,
) -> Result<String, FormatError> {
    let preview = build_preview_with_options(draft, &options.preview);
    let head = HeadMeta::from_draft(draft, &preview);

    let dom = build_html_dom(&preview);
    let html_string = serialize_dom(&dom)?;

    wrap_in_document(&html_string, &head, &options)
}

/// Values for the `<head>` of the page.
struct HeadMeta {
    title: String,
    description: String,
    keywords: String,
}

impl HeadMeta {
    fn from_draft(draft: &BlogDraft, preview: &ArticlePreview) -> Self {
        let record = export_record(draft);
        let title = if record.title.is_empty() {
            preview.title.clone()
        } else {
            record.title
        };
        Self {
            title,
            description: record.description,
            keywords: record.keywords,
        }
    }
}

/// Build an HTML DOM tree from the article preview
fn build_html_dom(preview: &ArticlePreview) -> RcDom {
    let dom = RcDom::default();

    let container = create_element("div", vec![("class", "quill-document")]);
    append(&dom.document, &container);

    let article = create_element("article", vec![("class", "blog-preview")]);
    append(&container, &article);
    let card = create_element("div", vec![("class", "preview-card")]);
    append(&article, &card);

    if let Some(image) = &preview.cover_image {
        let wrapper = create_element("div", vec![("class", "cover-image-container")]);
        append(
            &wrapper,
            &create_element(
                "img",
                vec![
                    ("src", image.src.as_str()),
                    ("alt", image.alt.as_str()),
                    ("class", "cover-image"),
                ],
            ),
        );
        append(&card, &wrapper);
    }

    let content = create_element("div", vec![("class", "article-content")]);
    append(&card, &content);

    append(&content, &build_header(preview));

    let body = create_element("section", vec![("class", "article-body")]);
    for node in &preview.body {
        append(&body, &body_node_element(node));
    }
    append(&content, &body);

    append(&content, &build_footer(preview));

    dom
}

fn build_header(preview: &ArticlePreview) -> Handle {
    let header = create_element("header", vec![("class", "article-header")]);

    let badges = create_element("div", vec![("class", "badge-container")]);
    append(
        &badges,
        &text_element("div", vec![("class", "badge badge-secondary")], &preview.category),
    );
    for tag in &preview.tags {
        append(
            &badges,
            &text_element("div", vec![("class", "badge badge-outline")], tag),
        );
    }
    append(&header, &badges);

    append(
        &header,
        &text_element("h1", vec![("class", "article-title")], &preview.title),
    );

    if let Some(intro) = &preview.intro_title {
        append(
            &header,
            &text_element("p", vec![("class", "intro-title")], intro),
        );
    }

    append(&header, &build_author_meta(preview));
    append(&header, &create_element("div", vec![("class", "separator")]));

    if let Some(summary) = &preview.summary {
        let summary_box = create_element("div", vec![("class", "summary-box")]);
        append(
            &summary_box,
            &text_element("h2", vec![("class", "summary-title")], "Summary"),
        );
        append(
            &summary_box,
            &text_element("p", vec![("class", "summary-text")], summary),
        );
        append(&header, &summary_box);
    }

    if let Some(toc) = &preview.toc {
        append(&header, &build_toc_box(toc));
    }

    header
}

fn build_author_meta(preview: &ArticlePreview) -> Handle {
    let meta = create_element("div", vec![("class", "author-meta")]);
    let info = create_element("div", vec![("class", "author-info")]);

    let avatar = create_element("div", vec![("class", "avatar")]);
    match &preview.author.avatar {
        Avatar::Image(image) => append(
            &avatar,
            &create_element(
                "img",
                vec![
                    ("src", image.src.as_str()),
                    ("alt", image.alt.as_str()),
                    ("class", "avatar-image"),
                ],
            ),
        ),
        Avatar::Initial { letter } => append(
            &avatar,
            &text_element("span", vec![("class", "avatar-fallback")], letter),
        ),
    }
    append(&info, &avatar);

    let names = create_element("div", vec![]);
    append(
        &names,
        &text_element("p", vec![("class", "author-name")], &preview.author.name),
    );
    let details = create_element("div", vec![("class", "author-details")]);
    append(
        &details,
        &text_element(
            "span",
            vec![("class", "detail-item")],
            &preview.published_date,
        ),
    );
    append(
        &details,
        &text_element("span", vec![("class", "detail-item")], &preview.read_time),
    );
    append(&names, &details);
    append(&info, &names);
    append(&meta, &info);

    let stats = create_element("div", vec![("class", "engagement-stats")]);
    append(
        &stats,
        &text_element(
            "span",
            vec![("class", "stat-item"), ("title", "Views")],
            &preview.stats.views,
        ),
    );
    append(
        &stats,
        &text_element(
            "span",
            vec![("class", "stat-item"), ("title", "Likes")],
            &preview.stats.likes,
        ),
    );
    append(&meta, &stats);

    meta
}

fn build_toc_box(toc: &Toc) -> Handle {
    let toc_box = create_element("nav", vec![("class", "toc-box")]);
    append(
        &toc_box,
        &text_element("h2", vec![("class", "toc-title")], "Table of Contents"),
    );

    let list = create_element("ul", vec![("class", "toc-list")]);
    for entry in toc.entries() {
        let attrs = if entry.indented {
            vec![("class", "indented")]
        } else {
            vec![]
        };
        let item = create_element("li", attrs);
        let href = entry.href();
        append(
            &item,
            &text_element(
                "a",
                vec![("href", href.as_str()), ("class", "toc-link")],
                &entry.text,
            ),
        );
        append(&list, &item);
    }
    append(&toc_box, &list);

    toc_box
}

fn body_node_element(node: &BodyNode) -> Handle {
    match node {
        BodyNode::Heading {
            level,
            text,
            anchor,
        } => text_element(level.tag(), vec![("id", anchor.as_str())], text),
        BodyNode::ListItem { text } => text_element("li", vec![], text),
        BodyNode::Paragraph { text } => text_element("p", vec![], text),
        BodyNode::LineBreak => create_element("br", vec![]),
        BodyNode::Placeholder { text } => {
            text_element("p", vec![("class", "placeholder-text")], text)
        }
    }
}

fn build_footer(preview: &ArticlePreview) -> Handle {
    let footer = create_element("footer", vec![("class", "article-footer")]);

    if let Some(newsletter) = &preview.newsletter {
        let cta = create_element("div", vec![("class", "newsletter-cta")]);
        append(
            &cta,
            &text_element("h3", vec![("class", "newsletter-title")], "Stay Updated"),
        );
        append(
            &cta,
            &text_element("p", vec![("class", "newsletter-text")], newsletter),
        );
        append(
            &cta,
            &text_element(
                "button",
                vec![("class", "button button-secondary button-lg")],
                "Subscribe Now",
            ),
        );
        append(&footer, &cta);
    }

    append(&footer, &create_element("div", vec![("class", "separator")]));

    if let Some(recent) = &preview.recent_blogs {
        append(&footer, &side_section("Recent Blogs", recent));
    }
    if let Some(trending) = &preview.trending_news {
        append(&footer, &side_section("Trending News", trending));
    }
    if let Some(cta) = &preview.cta {
        append(&footer, &cta_section(cta));
    }

    footer
}

fn side_section(title: &str, text: &str) -> Handle {
    let section = create_element("div", vec![]);
    append(
        &section,
        &text_element("h3", vec![("class", "section-title")], title),
    );
    let content = create_element("div", vec![("class", "content-box")]);
    append(
        &content,
        &text_element("p", vec![("class", "content-text")], text),
    );
    append(&section, &content);
    section
}

fn cta_section(cta: &CallToAction) -> Handle {
    let section = create_element("div", vec![("class", "cta-section")]);
    if let Some(title) = &cta.title {
        append(
            &section,
            &text_element("h3", vec![("class", "cta-title")], title),
        );
    }
    if let Some(description) = &cta.description {
        append(
            &section,
            &text_element("p", vec![("class", "cta-description")], description),
        );
    }
    if let Some(button) = &cta.button_text {
        append(
            &section,
            &text_element(
                "button",
                vec![("class", "button button-secondary button-lg")],
                button,
            ),
        );
    }
    section
}

fn append(parent: &Handle, child: &Handle) {
    parent.children.borrow_mut().push(child.clone());
}

fn text_element(tag: &str, attrs: Vec<(&str, &str)>, text: &str) -> Handle {
    let element = create_element(tag, attrs);
    append(&element, &create_text(text));
    element
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the DOM to an HTML string
fn serialize_dom(dom: &RcDom) -> Result<String, FormatError> {
    let mut output = Vec::new();

    let doc_container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| FormatError::SerializationError("Empty document".to_string()))?
        .clone();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in doc_container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            FormatError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

/// Wrap the body in a complete HTML document with embedded CSS
fn wrap_in_document(
    body_html: &str,
    head: &HeadMeta,
    options: &HtmlOptions,
) -> Result<String, FormatError> {
    let theme_css = match options.theme {
        HtmlTheme::Serif => THEME_SERIF_CSS,
        HtmlTheme::Modern => THEME_MODERN_CSS,
    };
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    let escaped_title = html_escape(&head.title);
    let mut meta_tags = String::new();
    if !head.description.is_empty() {
        meta_tags.push_str(&format!(
            "  <meta name=\"description\" content=\"{}\">\n",
            html_escape(&head.description)
        ));
    }
    if !head.keywords.is_empty() {
        meta_tags.push_str(&format!(
            "  <meta name=\"keywords\" content=\"{}\">\n",
            html_escape(&head.keywords)
        ));
    }

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="quill-babel">
{meta_tags}  <title>{escaped_title}</title>
  <style>
{BASELINE_CSS}
{theme_css}
{custom_css}
  </style>
</head>
<body>
<div class="quill-document">
{body_html}
</div>
</body>
</html>"#
    );

    Ok(html)
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
