//! Table of contents generation.
//!
//! The TOC is the middle-zone subset of the numbered headings, cut off at a
//! requested depth. Page numbers come from an external paginator and are
//! left unset until [`apply_pages`] fills them in.

use std::collections::HashMap;

use serde::Serialize;

use crate::numbering::{HeadingNumbers, MAX_NUMBERED_LEVEL};

/// Depth used when none is configured.
pub const DEFAULT_TOC_DEPTH: u8 = 3;

/// A table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    /// Heading id; consumers scroll to this.
    pub id: String,
    pub level: u8,
    pub number: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// A TOC entry with its nested sub-entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocNode {
    pub entry: TocEntry,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocNode>,
}

/// Build the flat TOC for headings up to `depth`.
///
/// `depth` is clamped into `1..=3`. Entries keep their document order.
pub fn generate_toc(headings: &HeadingNumbers, depth: u8) -> Vec<TocEntry> {
    let depth = depth.clamp(1, MAX_NUMBERED_LEVEL);
    headings
        .middle()
        .filter(|h| h.level <= depth)
        .map(|h| TocEntry {
            id: h.id.clone(),
            level: h.level,
            number: h.number.clone(),
            text: h.text.clone(),
            page: None,
        })
        .collect()
}

/// Fill in page numbers from an id → page map. Unknown ids stay unset.
pub fn apply_pages(entries: &mut [TocEntry], pages: &HashMap<String, u32>) {
    for entry in entries {
        entry.page = pages.get(&entry.id).copied();
    }
}

/// Compose a flat TOC into a hierarchy.
///
/// An entry's children are the following entries of deeper level, up to the
/// next entry of the same or a shallower level. Skipped levels nest under
/// the nearest shallower entry.
pub fn nest_toc(entries: &[TocEntry]) -> Vec<TocNode> {
    let (nodes, _) = parse_siblings(entries, 0, 0);
    nodes
}

/// Parse sibling entries. Stops when an entry with level < min_level is hit.
fn parse_siblings(entries: &[TocEntry], mut i: usize, min_level: u8) -> (Vec<TocNode>, usize) {
    let mut nodes = Vec::new();

    while i < entries.len() {
        let entry = &entries[i];
        if entry.level < min_level {
            break;
        }
        i += 1;

        // Nothing nests below the deepest representable level.
        let (children, next_i) = match entry.level.checked_add(1) {
            Some(child_level) => parse_siblings(entries, i, child_level),
            None => (Vec::new(), i),
        };
        i = next_i;

        nodes.push(TocNode {
            entry: entry.clone(),
            children,
        });
    }

    (nodes, i)
}
