//! End-to-end tests over a full draft: tokenize, anchors, TOC, body and preview.

use crate::common::ownership_guide;
use insta::assert_snapshot;
use quill_babel::formats::treeviz::to_treeviz_str;
use quill_babel::ir::blocks::{Block, HeadingLevel};
use quill_babel::ir::nodes::{Avatar, BodyNode};
use quill_babel::{
    assign_anchors, build_preview, build_toc, derive_slug, tokenize, with_field, DraftField,
};

#[test]
fn test_fixture_tokenizes_one_block_per_line() {
    let draft = ownership_guide();
    let blocks = tokenize(&draft.content);

    assert_eq!(blocks.len(), draft.content.split('\n').count());
    assert_eq!(
        blocks[0],
        Block::Heading {
            level: HeadingLevel::H2,
            text: "Why Ownership".to_string()
        }
    );
    assert_eq!(blocks.last(), Some(&Block::Blank));
}

#[test]
fn test_fixture_toc_matches_body_anchors() {
    let draft = ownership_guide();
    let blocks = tokenize(&draft.content);
    let headings = assign_anchors(&blocks);
    let toc = build_toc(&headings).expect("fixture has headings");

    let hrefs: Vec<String> = toc.entries().iter().map(|entry| entry.href()).collect();
    assert_eq!(
        hrefs,
        vec!["#why-ownership", "#borrowing-rules", "#common-pitfalls"]
    );
    let indented: Vec<bool> = toc.entries().iter().map(|entry| entry.indented).collect();
    assert_eq!(indented, vec![false, false, true]);

    let preview = build_preview(&draft);
    let body_anchors: Vec<&str> = preview
        .body
        .iter()
        .filter_map(|node| match node {
            BodyNode::Heading { anchor, .. } => Some(anchor.as_str()),
            _ => None,
        })
        .collect();
    let toc_anchors: Vec<&str> = toc
        .entries()
        .iter()
        .map(|entry| entry.anchor.as_str())
        .collect();
    assert_eq!(body_anchors, toc_anchors);
}

#[test]
fn test_fixture_preview() {
    let preview = build_preview(&ownership_guide());

    assert_eq!(preview.title, "Understanding Ownership in Rust");
    assert_eq!(preview.tags, vec!["rust", "memory", "ownership"]);
    assert_eq!(
        preview.cover_image.as_ref().map(|image| image.src.as_str()),
        Some("https://img.example.com/cover.png")
    );
    assert_eq!(
        preview.author.avatar,
        Avatar::Initial {
            letter: "J".to_string()
        }
    );
    assert_eq!(preview.read_time, "7 min read");
    assert_eq!(preview.body.len(), 9);
    assert!(preview.trending_news.is_none());
    assert_eq!(preview.recent_blogs.as_deref(), Some("Async Rust in Practice"));

    let cta = preview.cta.expect("button text set");
    assert!(cta.title.is_none());
    assert_eq!(cta.button_text.as_deref(), Some("Read More"));
}

#[test]
fn test_fixture_slug_generation() {
    let draft = ownership_guide();
    assert!(draft.slug.is_empty());

    let slug = derive_slug(&draft.title);
    let updated = with_field(&draft, DraftField::Slug, slug);
    assert_eq!(updated.slug, "understanding-ownership-in-rust");
    assert_eq!(updated.title, draft.title);
}

#[test]
fn test_fixture_treeviz() {
    let output = to_treeviz_str(&ownership_guide().content);
    assert_snapshot!(output.trim_end(), @r"
    ⧉ Document (9 blocks, 3 headings)
    ├─ § Why Ownership (#why-ownership)
    ├─ ¶ Every value has a single owne…
    ├─ ⎯
    ├─ § Borrowing Rules (#borrowing-r…
    ├─ • One mutable reference
    ├─ • Or any number of shared refer…
    ├─ § Common  Pitfalls (#common-pit…
    ├─ ¶ Fighting the borrow checker i…
    └─ ⎯
    ");
}
