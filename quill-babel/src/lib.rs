//! Content pipeline for quill blog drafts
//!
//!     This crate turns a blog draft (a flat record of text fields) into everything the editor
//!     shows and exports: a URL slug, a tokenized body, heading anchors, a table of contents, a
//!     fully assembled article preview and the CMS metadata record.
//!
//!     This is a pure lib, that is, it powers quill-cli but is shell agnostic: no code here
//!     should suppose a shell environment, be it std printing, env vars or the filesystem.
//!     Every operation is a total function of its inputs; drafts are values and updates produce
//!     new drafts.
//!
//! Architecture
//!
//!     The pipeline is strictly one way:
//!
//!         BlogDraft.content ──tokenize──▶ [Block] ──assign_anchors──▶ [AnchoredHeading]
//!                                            │                              │
//!                                            │                              ├──build_toc──▶ Option<Toc>
//!                                            └───────────render_blocks──────┴────────────▶ [BodyNode]
//!
//!     The anchors are computed once and shared by the TOC and the rendered headings, so a TOC
//!     link always points at a heading that carries the same id.
//!
//!     The file structure :
//!     .
//!     ├── draft.rs                # BlogDraft, DraftField, with_field
//!     ├── slug.rs                 # title → slug
//!     ├── markup                  # tokenizer, anchors, toc
//!     ├── ir                      # Block (tokenizer output) and presentational nodes
//!     ├── render.rs               # blocks → body nodes
//!     ├── preview.rs              # draft → ArticlePreview
//!     ├── export.rs               # draft → export metadata
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     └── formats
//!         └── <format>/mod.rs
//!
//! Formats
//!
//!     Output shapes are implemented with the Format trait, so the CLI can pick one by name:
//!     - json: the draft itself on input, the full export record on output
//!     - json-quick: the quick-copy export record
//!     - html: a standalone preview page with embedded CSS
//!     - tag: XML-like dump of the preview tree
//!     - treeviz: compact tree of the rendered body
//!
//! Library Choices
//!
//!     serde/serde_json for the draft and export records, html5ever for building and serializing
//!     the HTML DOM, tracing for diagnostics. The tokenizer is a plain line scanner: the markup is
//!     line-oriented with three prefixes, and nothing else is recognized.
//!
pub mod draft;
pub mod error;
pub mod export;
pub mod format;
pub mod formats;
pub mod ir;
pub mod markup;
pub mod preview;
pub mod registry;
pub mod render;
pub mod slug;

pub use draft::{with_field, BlogDraft, DraftField};
pub use error::FormatError;
pub use export::{export_json, export_record, quick_export_record, ExportRecord, ExportVariant};
pub use format::Format;
pub use markup::{anchor_for, assign_anchors, build_toc, tokenize, Toc, TocEntry};
pub use preview::{build_preview, build_preview_with_options, PreviewOptions};
pub use registry::FormatRegistry;
pub use render::render;
pub use slug::{apply_generated_slug, derive_slug};
