//! Table of contents built from anchored headings.

use crate::ir::blocks::{AnchoredHeading, HeadingLevel};
use serde::Serialize;

/// One TOC line. Level-3 headings are indented under the preceding level-2 ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub text: String,
    pub anchor: String,
    pub indented: bool,
}

impl TocEntry {
    /// In-page link target, e.g. `#getting-started`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// A non-empty outline of the body's headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Toc {
    entries: Vec<TocEntry>,
}

impl Toc {
    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for an outline returned by [`build_toc`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the outline, one entry per heading, in order.
///
/// Returns `None` when there are no headings: the TOC section should then be left out
/// entirely rather than shown empty.
pub fn build_toc(headings: &[AnchoredHeading]) -> Option<Toc> {
    if headings.is_empty() {
        return None;
    }

    let entries = headings
        .iter()
        .map(|heading| TocEntry {
            text: heading.text.clone(),
            anchor: heading.anchor.clone(),
            indented: heading.level == HeadingLevel::H3,
        })
        .collect();

    Some(Toc { entries })
}
