//! Shared configuration loader for the quill toolchain.
//!
//! `defaults/quill.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`QuillConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use quill_babel::{BlogDraft, ExportVariant, PreviewOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/quill.default.toml");

/// Top-level configuration consumed by quill applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuillConfig {
    pub draft: DraftConfig,
    pub preview: PreviewConfig,
    pub export: ExportConfig,
    pub inspect: InspectConfig,
    pub convert: ConvertConfig,
}

/// Starter values for a new draft.
#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    pub category: String,
    pub read_time: String,
    pub views: String,
    pub likes: String,
    pub density_target: String,
    pub newsletter_cta: String,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
}

impl DraftConfig {
    /// Build the starter draft, stamping both dates with `today`.
    pub fn starter(&self, today: &str) -> BlogDraft {
        BlogDraft {
            category: self.category.clone(),
            read_time: self.read_time.clone(),
            views: self.views.clone(),
            likes: self.likes.clone(),
            density_target: self.density_target.clone(),
            published_date: today.to_string(),
            updated_date: today.to_string(),
            newsletter_cta: self.newsletter_cta.clone(),
            cta_title: self.cta_title.clone(),
            cta_description: self.cta_description.clone(),
            cta_button_text: self.cta_button_text.clone(),
            ..BlogDraft::default()
        }
    }
}

/// Fallback texts for the preview.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub placeholder: String,
    pub untitled: String,
    pub uncategorized: String,
    pub anonymous_author: String,
}

impl From<&PreviewConfig> for PreviewOptions {
    fn from(config: &PreviewConfig) -> Self {
        PreviewOptions {
            placeholder: config.placeholder.clone(),
            untitled: config.untitled.clone(),
            uncategorized: config.uncategorized.clone(),
            anonymous_author: config.anonymous_author.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub variant: ExportVariantConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ExportVariantConfig {
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "quick")]
    Quick,
}

impl From<ExportVariantConfig> for ExportVariant {
    fn from(config: ExportVariantConfig) -> Self {
        match config {
            ExportVariantConfig::Full => ExportVariant::Full,
            ExportVariantConfig::Quick => ExportVariant::Quick,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub default_transform: String,
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub theme: String,
    #[serde(default)]
    pub custom_css: Option<String>,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<QuillConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<QuillConfig, ConfigError> {
    Loader::new().build()
}
