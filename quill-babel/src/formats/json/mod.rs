//! JSON format
//!
//! Reading: a draft snapshot, keyed by the camelCase field names.
//! Writing: the export record, pretty-printed with 2-space indentation.

use crate::draft::BlogDraft;
use crate::error::FormatError;
use crate::export::{export_json, ExportVariant};
use crate::format::Format;

/// Parse a draft snapshot from JSON.
pub fn parse_draft(source: &str) -> Result<BlogDraft, FormatError> {
    serde_json::from_str(source)
        .map_err(|e| FormatError::ParseError(format!("Invalid draft JSON: {e}")))
}

/// Serialize a draft snapshot (not an export record) to JSON.
pub fn serialize_draft(draft: &BlogDraft) -> Result<String, FormatError> {
    serde_json::to_string_pretty(draft)
        .map(|json| json + "\n")
        .map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
}

/// Format implementation for the full export record
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Draft snapshot in, CMS export metadata out"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<BlogDraft, FormatError> {
        parse_draft(source)
    }

    fn serialize(&self, draft: &BlogDraft) -> Result<String, FormatError> {
        export_json(draft, ExportVariant::Full).map(|json| json + "\n")
    }
}

/// Format implementation for the quick-copy export record
pub struct QuickJsonFormat;

impl Format for QuickJsonFormat {
    fn name(&self) -> &str {
        "json-quick"
    }

    fn description(&self) -> &str {
        "Quick-copy metadata (title, description, keywords, tags, slug, category)"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, draft: &BlogDraft) -> Result<String, FormatError> {
        export_json(draft, ExportVariant::Quick).map(|json| json + "\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reports_bad_json() {
        let err = JsonFormat.parse("{ not json").unwrap_err();
        assert!(matches!(err, FormatError::ParseError(_)));
    }

    #[test]
    fn test_draft_snapshot_round_trip() {
        let draft = BlogDraft::starter("2024-02-29");
        let text = serialize_draft(&draft).unwrap();
        assert!(text.contains("\"ctaButtonText\": \"Get Started\""));
        assert_eq!(parse_draft(&text).unwrap(), draft);
    }

    #[test]
    fn test_serialize_is_export_record() {
        let draft = BlogDraft {
            title: "Hello".to_string(),
            author_name: "Kai".to_string(),
            ..BlogDraft::default()
        };
        let full = JsonFormat.serialize(&draft).unwrap();
        assert!(full.contains("\"author\": \"Kai\""));
        assert!(full.ends_with("}\n"));

        let quick = QuickJsonFormat.serialize(&draft).unwrap();
        assert!(!quick.contains("author"));
        assert!(quick.contains("\"title\": \"Hello\""));
    }
}
