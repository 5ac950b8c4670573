//! Hierarchical heading numbering.
//!
//! Three counters, one per numbered level, advance in middle-zone document
//! order. An H1 resets H2 and H3, an H2 resets H3, an H3 resets nothing.
//! Front and back headings are recorded with an empty number and never touch
//! the counters.
//!
//! Numbering follows encounter order only: the walk descends into every
//! node's children whatever its role, so headings nested in containers are
//! numbered exactly as if they were top-level.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Document, Node, Role, Zone};
use crate::util::collect_text;

/// Deepest heading level that receives a number.
pub const MAX_NUMBERED_LEVEL: u8 = 3;

/// A heading and its computed number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingNumber {
    pub id: String,
    pub level: u8,
    /// Dotted number such as `"2.1"`; empty outside the middle zone.
    pub number: String,
    pub zone: Zone,
    /// Heading text with whitespace collapsed.
    pub text: String,
}

/// Result of numbering a document's headings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadingNumbers {
    entries: Vec<HeadingNumber>,
    by_id: HashMap<String, usize>,
}

impl HeadingNumbers {
    /// All numbered-level headings in document order, every zone included.
    pub fn entries(&self) -> &[HeadingNumber] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeadingNumber> {
        self.entries.iter()
    }

    /// Middle-zone headings only.
    pub fn middle(&self) -> impl Iterator<Item = &HeadingNumber> {
        self.entries.iter().filter(|e| e.zone == Zone::Middle)
    }

    pub fn get(&self, id: &str) -> Option<&HeadingNumber> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// The number for a heading id (`""` for front/back headings).
    pub fn number_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|e| e.number.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: HeadingNumber) {
        // Id-less headings are listed but cannot be looked up. The first
        // occurrence of a duplicated id wins.
        if !entry.id.is_empty() && !self.by_id.contains_key(&entry.id) {
            self.by_id.insert(entry.id.clone(), self.entries.len());
        }
        self.entries.push(entry);
    }
}

/// Counter state for one numbering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingCounters {
    h1: u32,
    h2: u32,
    h3: u32,
}

impl HeadingCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance for a heading of `level` and return its number.
    ///
    /// Levels outside 1..=3 return `None` and leave the counters alone.
    /// Missing parents are not corrected: an H2 before any H1 is `"0.1"`.
    pub fn advance(&mut self, level: u8) -> Option<String> {
        match level {
            1 => {
                self.h1 += 1;
                self.h2 = 0;
                self.h3 = 0;
                Some(format!("{}", self.h1))
            }
            2 => {
                self.h2 += 1;
                self.h3 = 0;
                Some(format!("{}.{}", self.h1, self.h2))
            }
            3 => {
                self.h3 += 1;
                Some(format!("{}.{}.{}", self.h1, self.h2, self.h3))
            }
            _ => None,
        }
    }
}

/// Number every level 1-3 heading in the document.
pub fn number_headings(doc: &Document) -> HeadingNumbers {
    let mut counters = HeadingCounters::new();
    let mut out = HeadingNumbers::default();
    for (zone, block) in doc.blocks() {
        number_recursive(block, zone, &mut counters, &mut out);
    }
    out
}

fn number_recursive(
    node: &Node,
    zone: Zone,
    counters: &mut HeadingCounters,
    out: &mut HeadingNumbers,
) {
    if let Role::Heading(level) = node.role
        && (1..=MAX_NUMBERED_LEVEL).contains(&level)
    {
        let number = match zone {
            Zone::Middle => counters.advance(level).unwrap_or_default(),
            Zone::Front | Zone::Back => String::new(),
        };
        out.push(HeadingNumber {
            id: node.id().unwrap_or_default().to_string(),
            level,
            number,
            zone,
            text: collect_text(node),
        });
    }

    for child in &node.content {
        number_recursive(child, zone, counters, out);
    }
}
