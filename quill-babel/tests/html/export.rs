//! Export tests for the HTML format (draft → HTML page)
//!
//! These tests check the structure of the generated page rather than its exact bytes.

use crate::common::ownership_guide;
use quill_babel::format::Format;
use quill_babel::formats::html::{HtmlFormat, HtmlTheme};
use quill_babel::{BlogDraft, FormatRegistry};
use regex::Regex;
use std::collections::HashMap;

fn to_html(draft: &BlogDraft, theme: HtmlTheme) -> String {
    HtmlFormat::new(theme).serialize(draft).unwrap()
}

fn without_styles(html: &str) -> String {
    let style = Regex::new("(?is)<style[^>]*?>.*?</style>").expect("valid regex");
    style.replace_all(html, "<style></style>").into_owned()
}

#[test]
fn test_page_shell() {
    let html = to_html(&ownership_guide(), HtmlTheme::Modern);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<div class=\"quill-document\">"));
    assert!(html.contains("<article class=\"blog-preview\">"));
    assert!(html.contains("<title>Rust Ownership Explained</title>"));
    assert!(html.contains("<meta name=\"keywords\" content=\"rust, ownership, borrowing\">"));
}

#[test]
fn test_every_toc_link_has_a_target() {
    let html = without_styles(&to_html(&ownership_guide(), HtmlTheme::Modern));

    let links = Regex::new(r##"href="#([^"]+)""##).unwrap();
    let targets: Vec<String> = links
        .captures_iter(&html)
        .map(|caps| caps[1].to_string())
        .collect();
    assert_eq!(
        targets,
        vec!["why-ownership", "borrowing-rules", "common-pitfalls"]
    );

    for target in targets {
        assert!(
            html.contains(&format!("id=\"{target}\"")),
            "missing heading for #{target}"
        );
    }
}

#[test]
fn test_body_elements_in_order() {
    let html = without_styles(&to_html(&ownership_guide(), HtmlTheme::Modern));
    let body_start = html.find("<section class=\"article-body\">").unwrap();
    let body_end = html[body_start..].find("</section>").unwrap() + body_start;
    let body = &html[body_start..body_end];

    assert_eq!(
        body,
        "<section class=\"article-body\">\
         <h2 id=\"why-ownership\">Why Ownership</h2>\
         <p>Every value has a single owner.</p>\
         <br>\
         <h2 id=\"borrowing-rules\">Borrowing Rules</h2>\
         <li>One mutable reference</li>\
         <li>Or any number of shared references</li>\
         <h3 id=\"common-pitfalls\">Common  Pitfalls</h3>\
         <p>Fighting the borrow checker is normal at first.</p>\
         <br>"
    );
}

#[test]
fn test_optional_sections() {
    let html = without_styles(&to_html(&ownership_guide(), HtmlTheme::Modern));

    assert!(html.contains("Recent Blogs"));
    assert!(!html.contains("Trending News"));
    assert!(html.contains("<p class=\"newsletter-text\">Get new Rust posts weekly.</p>"));
    assert!(!html.contains("cta-title"));
    assert!(html.contains(">Read More</button>"));
    assert!(html.contains("<span class=\"avatar-fallback\">J</span>"));
}

#[test]
fn test_theme_option_through_registry() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("theme".to_string(), "serif".to_string());
    options.insert("custom-css".to_string(), ".x { color: red; }".to_string());

    let html = registry
        .serialize_with_options(&ownership_guide(), "html", &options)
        .unwrap();
    assert!(html.contains("Georgia"));
    assert!(html.contains(".x { color: red; }"));
}

#[test]
fn test_options_rejected_by_plain_formats() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("theme".to_string(), "serif".to_string());

    assert!(registry
        .serialize_with_options(&ownership_guide(), "json", &options)
        .is_err());
}

#[test]
fn test_preview_fallback_options() {
    let mut options = HashMap::new();
    options.insert("untitled".to_string(), "Draft".to_string());
    options.insert("anonymous-author".to_string(), "Staff".to_string());

    let html = HtmlFormat::default()
        .serialize_with_options(&BlogDraft::default(), &options)
        .unwrap();
    assert!(html.contains("<title>Draft</title>"));
    assert!(html.contains("<h1 class=\"article-title\">Draft</h1>"));
    assert!(html.contains("<p class=\"author-name\">Staff</p>"));
}
