//! Format registry for format discovery and selection
//!
//! Formats are registered and retrieved by name.

use crate::draft::BlogDraft;
use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;

/// Registry of draft formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let draft = registry.parse(source, "json")?;
/// let html = registry.serialize(&draft, "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Only formats that can parse are considered, since detection is used to pick the
    /// reader for an input file.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        let mut candidates: Vec<&str> = self
            .formats
            .values()
            .filter(|format| format.supports_parsing())
            .filter(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name())
            .collect();
        candidates.sort();
        candidates.first().map(|name| name.to_string())
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<BlogDraft, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a draft using the specified format
    pub fn serialize(&self, draft: &BlogDraft, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(draft, format, &HashMap::new())
    }

    /// Serialize a draft using the specified format and options
    pub fn serialize_with_options(
        &self,
        draft: &BlogDraft,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' does not support serialization"
            )));
        }
        tracing::debug!(format, options = options.len(), "serializing draft");
        fmt.serialize_with_options(draft, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::json::QuickJsonFormat);
        registry.register(crate::formats::html::HtmlFormat::default());
        registry.register(crate::formats::tag::TagFormat);
        registry.register(crate::formats::treeviz::TreevizFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
