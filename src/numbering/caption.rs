//! Figure and table caption numbering.
//!
//! Figures and tables are numbered by two independent counters in document
//! order. Only captioned nodes count: an image needs a caption or alt text,
//! a table needs a caption. Nodes that fail the test are skipped entirely,
//! neither numbered nor given a placeholder.
//!
//! Numbering is global across zones.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Document, Node, Role};
use crate::util::non_blank;

/// Which counter a caption belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionKind {
    Figure,
    Table,
}

impl CaptionKind {
    /// Display name used in labels ("Figure 2").
    pub fn label(self) -> &'static str {
        match self {
            CaptionKind::Figure => "Figure",
            CaptionKind::Table => "Table",
        }
    }
}

/// A numbered figure or table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CaptionKind,
    /// 1-based number within its kind.
    pub number: u32,
    /// Trimmed caption text.
    pub caption: String,
    /// Depth-first pre-order index of the node within the document.
    pub position: usize,
}

/// Captioned figures and tables in document order, with an id lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Captions {
    items: Vec<CaptionInfo>,
    by_id: HashMap<String, usize>,
}

impl Captions {
    /// Figures and tables interleaved in document order.
    pub fn items(&self) -> &[CaptionInfo] {
        &self.items
    }

    pub fn figures(&self) -> impl Iterator<Item = &CaptionInfo> {
        self.of_kind(CaptionKind::Figure)
    }

    pub fn tables(&self) -> impl Iterator<Item = &CaptionInfo> {
        self.of_kind(CaptionKind::Table)
    }

    pub fn of_kind(&self, kind: CaptionKind) -> impl Iterator<Item = &CaptionInfo> {
        self.items.iter().filter(move |c| c.kind == kind)
    }

    pub fn get(&self, id: &str) -> Option<&CaptionInfo> {
        self.by_id.get(id).map(|&i| &self.items[i])
    }

    pub fn number_of(&self, id: &str) -> Option<u32> {
        self.get(id).map(|c| c.number)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Caption text that qualifies a node for numbering, if any.
pub fn caption_text(node: &Node) -> Option<(CaptionKind, &str)> {
    match node.role {
        Role::Image => {
            let text = non_blank(node.attrs.caption.as_deref())
                .or_else(|| non_blank(node.attrs.alt.as_deref()))?;
            Some((CaptionKind::Figure, text))
        }
        Role::Table => {
            let text = non_blank(node.attrs.caption.as_deref())?;
            Some((CaptionKind::Table, text))
        }
        Role::Heading(_) | Role::CodeBlock | Role::PageBreak | Role::Text | Role::Container => {
            None
        }
    }
}

#[derive(Default)]
struct CaptionState {
    figures: u32,
    tables: u32,
    position: usize,
    out: Captions,
}

impl CaptionState {
    fn next_number(&mut self, kind: CaptionKind) -> u32 {
        let counter = match kind {
            CaptionKind::Figure => &mut self.figures,
            CaptionKind::Table => &mut self.tables,
        };
        *counter += 1;
        *counter
    }
}

/// Number every captioned figure and table.
pub fn number_captions(doc: &Document) -> Captions {
    let mut state = CaptionState::default();
    for (_, block) in doc.blocks() {
        number_recursive(block, &mut state);
    }
    state.out
}

fn number_recursive(node: &Node, state: &mut CaptionState) {
    let position = state.position;
    state.position += 1;

    if let Some((kind, caption)) = caption_text(node) {
        let number = state.next_number(kind);
        let id = node.id().unwrap_or_default().to_string();
        if !id.is_empty() && !state.out.by_id.contains_key(&id) {
            state.out.by_id.insert(id.clone(), state.out.items.len());
        }
        state.out.items.push(CaptionInfo {
            id,
            kind,
            number,
            caption: caption.to_string(),
            position,
        });
    }

    for child in &node.content {
        number_recursive(child, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Regions, Zone};

    #[test]
    fn test_independent_counters() {
        let doc = Document::from_blocks(vec![
            Node::image().with_id("f1").with_caption("Map"),
            Node::table([["a"]]).with_id("t1").with_caption("Totals"),
            Node::image().with_id("f2").with_alt("Photo"),
            Node::table([["b"]]).with_id("t2").with_caption("Costs"),
        ]);
        let captions = number_captions(&doc);
        let summary: Vec<_> = captions
            .items()
            .iter()
            .map(|c| (c.id.as_str(), c.kind, c.number))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("f1", CaptionKind::Figure, 1),
                ("t1", CaptionKind::Table, 1),
                ("f2", CaptionKind::Figure, 2),
                ("t2", CaptionKind::Table, 2),
            ]
        );
    }

    #[test]
    fn test_uncaptioned_nodes_are_skipped() {
        let doc = Document::from_blocks(vec![
            Node::image().with_id("bare"),
            Node::image().with_id("blank").with_caption("  ").with_alt(""),
            Node::table([["x"]]).with_id("plain"),
            Node::table([["x"]]).with_id("alt-only").with_alt("ignored for tables"),
            Node::image().with_id("fig").with_caption("Real"),
        ]);
        let captions = number_captions(&doc);
        assert_eq!(captions.len(), 1);
        assert_eq!(captions.number_of("fig"), Some(1));
        assert_eq!(captions.get("bare"), None);
        assert_eq!(captions.get("plain"), None);
        assert_eq!(captions.get("alt-only"), None);
    }

    #[test]
    fn test_caption_preferred_over_alt() {
        let doc = Document::from_blocks(vec![
            Node::image().with_id("f").with_alt("alt text").with_caption(" Caption "),
        ]);
        assert_eq!(number_captions(&doc).get("f").unwrap().caption, "Caption");
    }

    #[test]
    fn test_position_is_preorder_index() {
        let doc = Document::from_blocks(vec![
            Node::paragraph("intro"), // 0, text leaf 1
            Node::container("figure", vec![Node::image().with_id("f").with_alt("x")]), // 2, image 3
        ]);
        assert_eq!(number_captions(&doc).get("f").unwrap().position, 3);
    }

    #[test]
    fn test_numbering_is_global_across_zones() {
        let doc = Document::Split(Regions {
            front: vec![Node::image().with_id("a").with_alt("Cover")],
            middle: vec![Node::image().with_id("b").with_alt("Body")],
            back: vec![Node::image().with_id("c").with_alt("Appendix").with_zone(Zone::Back)],
        });
        let captions = number_captions(&doc);
        let numbers: Vec<u32> = captions.figures().map(|c| c.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(captions.tables().count(), 0);
    }
}
