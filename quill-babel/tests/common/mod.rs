//! Shared fixtures for the integration tests.

use quill_babel::format::Format;
use quill_babel::formats::JsonFormat;
use quill_babel::BlogDraft;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a draft from `tests/fixtures/<name>` through the json format.
pub fn load_fixture(name: &str) -> BlogDraft {
    let path = fixture_path(name);
    let source = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("fixture {} should be readable: {e}", path.display()));
    JsonFormat
        .parse(&source)
        .unwrap_or_else(|e| panic!("fixture {} should parse: {e}", path.display()))
}

pub fn ownership_guide() -> BlogDraft {
    load_fixture("ownership-guide.json")
}
