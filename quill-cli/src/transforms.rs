//! CLI-specific transforms
//!
//! This module defines the pipeline stages `quill inspect` can print.
//!
//! ## Transform Pipeline
//!
//! A draft's body goes through these stages:
//!
//! 1. **Tokenization** - body text → blocks
//!    - `blocks-json`: one classified block per line
//!
//! 2. **Anchoring** - blocks → anchored headings → TOC
//!    - `anchors-json`: headings with their anchor ids
//!    - `toc-json`: the table of contents (`null` when there are no headings)
//!
//! 3. **Rendering** - everything → article preview
//!    - `body-treeviz`: tree visualization of the rendered body with Unicode icons
//!    - `preview-json`: the full presentational tree
//!
//! `slug` prints the slug the title would generate.
//!
//! ## Extra Parameters
//!
//! Transforms can accept extra parameters via `--extra-<name> [value]`:
//!
//! - `show-linum`: line numbers in `body-treeviz` (on unless set to "false")
//! - `placeholder`, `untitled`, `uncategorized`, `anonymous-author`: fallback texts
//!   for `preview-json` (`placeholder` also for `body-treeviz`)
//!
//! Example: `quill inspect draft.json body-treeviz --extra-show-linum false`

use quill_babel::formats::treeviz::to_treeviz_str_with_params;
use quill_babel::{
    assign_anchors, build_preview_with_options, build_toc, derive_slug, tokenize, BlogDraft,
    PreviewOptions,
};
use serde::Serialize;
use std::collections::HashMap;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "blocks-json",
    "anchors-json",
    "toc-json",
    "body-treeviz",
    "preview-json",
    "slug",
];

/// One-line description of a transform, for `--list-transforms`
pub fn describe_transform(transform_name: &str) -> Option<&'static str> {
    let description = match transform_name {
        "blocks-json" => "One classified block per body line",
        "anchors-json" => "Headings paired with their anchor ids",
        "toc-json" => "Table of contents (null without headings)",
        "body-treeviz" => "Tree of the rendered body nodes",
        "preview-json" => "The full article preview",
        "slug" => "The slug the title would generate",
        _ => return None,
    };
    Some(description)
}

/// Execute a named transform on a draft with optional extra parameters
///
/// # Arguments
///
/// * `draft` - The draft to inspect
/// * `transform_name` - The transform to apply (e.g., "toc-json", "body-treeviz")
/// * `extra_params` - Optional parameters for the transform
/// * `preview` - Fallback texts used by `preview-json`
///
/// # Returns
///
/// The transformed output as a string, or an error message
pub fn execute_transform(
    draft: &BlogDraft,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
    preview: &PreviewOptions,
) -> Result<String, String> {
    tracing::debug!(transform = transform_name, "running inspect transform");

    match transform_name {
        "blocks-json" => to_json(&tokenize(&draft.content)),
        "anchors-json" => to_json(&assign_anchors(&tokenize(&draft.content))),
        "toc-json" => {
            let headings = assign_anchors(&tokenize(&draft.content));
            to_json(&build_toc(&headings))
        }
        "body-treeviz" => {
            // Default show-linum to true for inspect if not specified
            let mut params = extra_params.clone();
            if !params.contains_key("show-linum") {
                params.insert("show-linum".to_string(), "true".to_string());
            }
            params
                .entry("placeholder".to_string())
                .or_insert_with(|| preview.placeholder.clone());
            Ok(to_treeviz_str_with_params(&draft.content, &params))
        }
        "preview-json" => {
            let options = preview.clone().with_params(extra_params);
            to_json(&build_preview_with_options(draft, &options))
        }
        "slug" => Ok(derive_slug(&draft.title)),
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}
