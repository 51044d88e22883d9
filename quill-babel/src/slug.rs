//! URL slug derivation from a title.
//!
//! The slug is only ever produced on request (the "Generate" action). Typing a title
//! never rewrites the slug on its own.

use crate::draft::{with_field, BlogDraft, DraftField};

/// Derive a URL-safe slug from `title`.
///
/// ASCII letters are lowercased, every run of characters outside `[a-z0-9]` becomes a
/// single `-`, and hyphens at either end are dropped. The result is empty or matches
/// `^[a-z0-9]+(-[a-z0-9]+)*$`.
///
/// ```ignore
/// assert_eq!(derive_slug("Hello, World!"), "hello-world");
/// assert_eq!(derive_slug("---"), "");
/// ```
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Overwrite the draft's slug with one derived from its title.
///
/// Any manual slug edit is replaced.
pub fn apply_generated_slug(draft: &BlogDraft) -> BlogDraft {
    let slug = derive_slug(&draft.title);
    tracing::debug!(%slug, "generated slug from title");
    with_field(draft, DraftField::Slug, slug)
}
