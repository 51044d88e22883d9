//! Export metadata over a full draft.

use crate::common::ownership_guide;
use insta::assert_snapshot;
use quill_babel::{export_json, with_field, DraftField, ExportVariant, FormatRegistry};

#[test]
fn test_full_export() {
    let json = export_json(&ownership_guide(), ExportVariant::Full).unwrap();
    assert_snapshot!(json, @r#"
    {
      "title": "Rust Ownership Explained",
      "description": "A short tour of ownership, borrowing and lifetimes.",
      "keywords": "rust, ownership, borrowing",
      "tags": "rust, memory, , ownership",
      "slug": "",
      "author": "Jordan Lee",
      "category": "Programming",
      "publishedDate": "2024-03-01",
      "updatedDate": "2024-03-05",
      "readTime": "7"
    }
    "#);
}

#[test]
fn test_quick_export() {
    let draft = with_field(
        &ownership_guide(),
        DraftField::MetaDescription,
        "Ownership in five minutes",
    );
    let json = export_json(&draft, ExportVariant::Quick).unwrap();
    assert_snapshot!(json, @r#"
    {
      "title": "Rust Ownership Explained",
      "description": "Ownership in five minutes",
      "keywords": "rust, ownership, borrowing",
      "tags": "rust, memory, , ownership",
      "slug": "",
      "category": "Programming"
    }
    "#);
}

#[test]
fn test_registry_json_matches_export() {
    let registry = FormatRegistry::default();
    let draft = ownership_guide();

    let serialized = registry.serialize(&draft, "json").unwrap();
    let expected = export_json(&draft, ExportVariant::Full).unwrap();
    assert_eq!(serialized.trim_end(), expected);

    let quick = registry.serialize(&draft, "json-quick").unwrap();
    assert!(!quick.contains("\"author\""));
}

#[test]
fn test_draft_json_round_trip_through_registry() {
    let registry = FormatRegistry::default();
    let source = std::fs::read_to_string(crate::common::fixture_path("ownership-guide.json"))
        .unwrap();
    let draft = registry.parse(&source, "json").unwrap();
    assert_eq!(draft, ownership_guide());
}

#[test]
fn test_unknown_draft_key_rejected() {
    let registry = FormatRegistry::default();
    let err = registry
        .parse(r#"{"title": "x", "subtitle": "y"}"#, "json")
        .unwrap_err();
    assert!(err.to_string().contains("Invalid draft JSON"));
}
