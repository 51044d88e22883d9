//! Draft → export metadata.
//!
//! Two records are produced from a draft:
//!
//! - [`ExportRecord`]: the full CMS metadata shown on the export panel.
//! - [`QuickExportRecord`]: the narrower set used by the quick-copy action.
//!
//! Both share the same precedence rules:
//!
//! | Key           | Source                                           |
//! |---------------|--------------------------------------------------|
//! | `title`       | `metaTitle` if non-empty, else `title`           |
//! | `description` | `metaDescription` if non-empty, else `summary`   |
//! | everything else | the matching draft field, verbatim             |
//!
//! Field order in the structs is the key order of the serialized output.
//! Writing the text somewhere (clipboard, file, stdout) is up to the caller.

use crate::draft::BlogDraft;
use crate::error::FormatError;
use serde::Serialize;

/// Full export metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub tags: String,
    pub slug: String,
    pub author: String,
    pub category: String,
    pub published_date: String,
    pub updated_date: String,
    pub read_time: String,
}

/// Metadata for the quick-copy action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickExportRecord {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub tags: String,
    pub slug: String,
    pub category: String,
}

/// Which record an export should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportVariant {
    #[default]
    Full,
    Quick,
}

pub fn export_record(draft: &BlogDraft) -> ExportRecord {
    ExportRecord {
        title: export_title(draft).to_string(),
        description: export_description(draft).to_string(),
        keywords: draft.keywords.clone(),
        tags: draft.tags.clone(),
        slug: draft.slug.clone(),
        author: draft.author_name.clone(),
        category: draft.category.clone(),
        published_date: draft.published_date.clone(),
        updated_date: draft.updated_date.clone(),
        read_time: draft.read_time.clone(),
    }
}

pub fn quick_export_record(draft: &BlogDraft) -> QuickExportRecord {
    QuickExportRecord {
        title: export_title(draft).to_string(),
        description: export_description(draft).to_string(),
        keywords: draft.keywords.clone(),
        tags: draft.tags.clone(),
        slug: draft.slug.clone(),
        category: draft.category.clone(),
    }
}

/// Serialize the chosen record as 2-space indented JSON.
pub fn export_json(draft: &BlogDraft, variant: ExportVariant) -> Result<String, FormatError> {
    let json = match variant {
        ExportVariant::Full => serde_json::to_string_pretty(&export_record(draft)),
        ExportVariant::Quick => serde_json::to_string_pretty(&quick_export_record(draft)),
    };
    json.map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
}

fn export_title(draft: &BlogDraft) -> &str {
    if draft.meta_title.is_empty() {
        &draft.title
    } else {
        &draft.meta_title
    }
}

fn export_description(draft: &BlogDraft) -> &str {
    if draft.meta_description.is_empty() {
        &draft.summary
    } else {
        &draft.meta_description
    }
}
