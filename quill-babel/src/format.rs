//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! A format is a named textual view of a [`BlogDraft`]: an export record, a preview
//! page, a debug dump. Some formats can also read a draft back.

use crate::draft::BlogDraft;
use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for draft formats
///
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, draft: &BlogDraft) -> Result<String, FormatError> {
///         Ok(draft.title.clone())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → draft)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (draft → text)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a draft
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<BlogDraft, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a draft into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _draft: &BlogDraft) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize a draft, optionally using extra parameters.
    ///
    /// The default implementation delegates to [`Format::serialize`] and rejects any
    /// parameters. Formats with knobs override it.
    fn serialize_with_options(
        &self,
        draft: &BlogDraft,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(draft)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
