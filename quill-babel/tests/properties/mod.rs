//! Property tests for the pipeline invariants.

use proptest::prelude::*;
use quill_babel::ir::blocks::Block;
use quill_babel::ir::nodes::BodyNode;
use quill_babel::format::Format;
use quill_babel::formats::{HtmlFormat, TagFormat};
use quill_babel::{
    anchor_for, assign_anchors, build_preview, build_toc, derive_slug, render, tokenize,
    with_field, BlogDraft, DraftField,
};
use regex::Regex;

/// Body text built from markup-looking lines, so headings and list items show up often.
fn body_strategy() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        "[A-Za-z ]{0,12}".prop_map(|t| format!("## {t}")),
        "[A-Za-z ]{0,12}".prop_map(|t| format!("### {t}")),
        "[A-Za-z ]{0,12}".prop_map(|t| format!("- {t}")),
        "[ \t]{0,3}",
        "[^\n]{0,20}",
    ];
    prop::collection::vec(line, 0..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn slug_is_url_safe(title in "\\PC{0,40}") {
        let slug_shape = Regex::new("^([a-z0-9]+(-[a-z0-9]+)*)?$").unwrap();
        let slug = derive_slug(&title);
        prop_assert!(slug_shape.is_match(&slug), "bad slug {:?} from {:?}", slug, title);
    }

    #[test]
    fn slug_is_idempotent(title in "\\PC{0,40}") {
        let once = derive_slug(&title);
        prop_assert_eq!(derive_slug(&once), once);
    }

    #[test]
    fn one_block_per_line(body in body_strategy()) {
        let blocks = tokenize(&body);
        if body.is_empty() {
            prop_assert!(blocks.is_empty());
        } else {
            prop_assert_eq!(blocks.len(), body.split('\n').count());
        }
    }

    #[test]
    fn toc_has_one_entry_per_heading(body in body_strategy()) {
        let blocks = tokenize(&body);
        let heading_count = blocks
            .iter()
            .filter(|block| matches!(block, Block::Heading { .. }))
            .count();
        let headings = assign_anchors(&blocks);
        prop_assert_eq!(headings.len(), heading_count);

        match build_toc(&headings) {
            None => prop_assert_eq!(heading_count, 0),
            Some(toc) => prop_assert_eq!(toc.len(), heading_count),
        }
    }

    #[test]
    fn rendered_heading_anchors_follow_toc(body in body_strategy()) {
        let blocks = tokenize(&body);
        let headings = assign_anchors(&blocks);
        let toc_anchors: Vec<String> = build_toc(&headings)
            .map(|toc| toc.entries().iter().map(|entry| entry.anchor.clone()).collect())
            .unwrap_or_default();

        let body_anchors: Vec<String> = render(&body)
            .into_iter()
            .filter_map(|node| match node {
                BodyNode::Heading { anchor, .. } => Some(anchor),
                _ => None,
            })
            .collect();
        prop_assert_eq!(body_anchors, toc_anchors);
    }

    #[test]
    fn render_is_deterministic(body in body_strategy()) {
        prop_assert_eq!(render(&body), render(&body));
    }

    #[test]
    fn preview_is_deterministic(body in body_strategy(), title in "\\PC{0,20}") {
        let draft = with_field(&BlogDraft::starter("2024-01-01"), DraftField::Content, body);
        let draft = with_field(&draft, DraftField::Title, title);

        prop_assert_eq!(build_preview(&draft), build_preview(&draft));
        prop_assert_eq!(
            TagFormat.serialize(&draft).unwrap(),
            TagFormat.serialize(&draft).unwrap()
        );
        prop_assert_eq!(
            HtmlFormat::default().serialize(&draft).unwrap(),
            HtmlFormat::default().serialize(&draft).unwrap()
        );
    }

    #[test]
    fn anchors_have_no_whitespace(text in "\\PC{0,30}") {
        let anchor = anchor_for(&text);
        prop_assert!(!anchor.chars().any(char::is_whitespace));
    }

    #[test]
    fn with_field_touches_only_its_field(index in 0usize..25, value in "[a-z]{0,8}") {
        let field = DraftField::ALL[index];
        let draft = BlogDraft::starter("2024-01-01");
        let next = with_field(&draft, field, value.clone());

        for other in DraftField::ALL {
            if other == field {
                prop_assert_eq!(next.get(other), value.as_str());
            } else {
                prop_assert_eq!(next.get(other), draft.get(other));
            }
        }
    }
}
