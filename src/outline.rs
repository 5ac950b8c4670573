//! Flat navigation outline.
//!
//! Walks the document once and emits a single ordered list mixing headings
//! (levels 1-3), tables, images, significant code blocks and break markers.
//! Every item carries one running `index` shared by all kinds, plus the index
//! of the nearest preceding heading so a navigation panel can indent.
//!
//! Extraction never fails: missing text falls back to a placeholder label and
//! missing ids to a synthetic one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ids::collect_ids;
use crate::model::{Document, Node, Role, Zone};
use crate::util::{collect_text, collect_text_verbatim, non_blank, truncate_chars};

/// Label for items with no usable text.
pub const UNTITLED: &str = "Untitled";
/// Label for headings with no text.
pub const UNTITLED_SECTION: &str = "Untitled Section";

/// Kind of outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OutlineKind {
    Heading,
    Table,
    Image,
    CodeBlock,
    PageBreak,
}

impl OutlineKind {
    fn id_prefix(self) -> &'static str {
        match self {
            OutlineKind::Heading => "heading",
            OutlineKind::Table => "table",
            OutlineKind::Image => "image",
            OutlineKind::CodeBlock => "code-block",
            OutlineKind::PageBreak => "page-break",
        }
    }
}

/// One entry in the navigation outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineItem {
    /// Node id, or `"{kind}-{index}"` when the node has none.
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: OutlineKind,
    /// Heading level for headings; enclosing heading level + 1 otherwise.
    pub level: u8,
    /// Position in the outline, shared across all kinds.
    pub index: usize,
    /// Index of the nearest preceding heading item.
    pub parent_heading_index: Option<usize>,
    pub zone: Zone,
}

/// Configuration for outline extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutlineConfig {
    /// Code blocks with more lines than this are listed.
    pub code_min_lines: usize,
    /// Code blocks with more characters than this are listed.
    pub code_min_chars: usize,
    /// Table first-cell labels must be shorter than this; also caps code labels.
    pub label_max_chars: usize,
    /// Deepest heading level listed.
    pub max_heading_level: u8,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            code_min_lines: 3,
            code_min_chars: 50,
            label_max_chars: 50,
            max_heading_level: 3,
        }
    }
}

impl OutlineConfig {
    /// Whether a code block is long enough to appear in the outline.
    pub fn is_significant_code(&self, code: &str) -> bool {
        code.lines().count() > self.code_min_lines || code.chars().count() > self.code_min_chars
    }
}

/// Extract the outline with the default configuration.
pub fn extract_outline(doc: &Document) -> Vec<OutlineItem> {
    extract_outline_with_config(doc, &OutlineConfig::default())
}

/// Extract the outline.
pub fn extract_outline_with_config(doc: &Document, config: &OutlineConfig) -> Vec<OutlineItem> {
    let mut taken = HashSet::new();
    for (_, block) in doc.blocks() {
        collect_ids(block, &mut taken);
    }

    let mut state = OutlineState {
        config,
        taken,
        items: Vec::new(),
        last_heading: None,
        tables: 0,
    };
    for (zone, block) in doc.blocks() {
        collect_items(block, zone, &mut state);
    }
    state.items
}

struct OutlineState<'a> {
    config: &'a OutlineConfig,
    /// Stored ids plus synthetic ids handed out so far.
    taken: HashSet<String>,
    items: Vec<OutlineItem>,
    /// (index, level) of the most recent heading item.
    last_heading: Option<(usize, u8)>,
    /// Tables emitted so far, for "Table N" labels.
    tables: usize,
}

impl OutlineState<'_> {
    fn emit(&mut self, node: &Node, kind: OutlineKind, text: String, zone: Zone) {
        let index = self.items.len();
        let parent_heading_index = self.last_heading.map(|(i, _)| i);
        let level = match node.role {
            Role::Heading(level) => level,
            _ => self.last_heading.map_or(1, |(_, l)| l.saturating_add(1)),
        };
        let id = match node.id() {
            Some(id) => id.to_string(),
            None => self.synthetic_id(kind, index),
        };

        self.items.push(OutlineItem {
            id,
            text,
            kind,
            level,
            index,
            parent_heading_index,
            zone,
        });

        if kind == OutlineKind::Heading {
            self.last_heading = Some((index, level));
        }
    }

    /// `{kind}-{index}`, suffixed until it clashes with no other id.
    fn synthetic_id(&mut self, kind: OutlineKind, index: usize) -> String {
        let base = format!("{}-{}", kind.id_prefix(), index);
        let mut candidate = base.clone();
        let mut suffix = 1;
        while !self.taken.insert(candidate.clone()) {
            suffix += 1;
            candidate = format!("{base}-{suffix}");
        }
        candidate
    }
}

fn collect_items(node: &Node, zone: Zone, state: &mut OutlineState<'_>) {
    match node.role {
        Role::Heading(level) => {
            if (1..=state.config.max_heading_level).contains(&level) {
                let text = non_empty_or(collect_text(node), UNTITLED_SECTION);
                state.emit(node, OutlineKind::Heading, text, zone);
            }
        }
        Role::Table => {
            state.tables += 1;
            let text = table_label(node, state.config.label_max_chars)
                .unwrap_or_else(|| format!("Table {}", state.tables));
            state.emit(node, OutlineKind::Table, text, zone);
        }
        Role::Image => {
            let text = non_blank(node.attrs.caption.as_deref())
                .or_else(|| non_blank(node.attrs.alt.as_deref()))
                .unwrap_or(UNTITLED)
                .to_string();
            state.emit(node, OutlineKind::Image, text, zone);
        }
        Role::CodeBlock => {
            let code = collect_text_verbatim(node);
            if state.config.is_significant_code(&code) {
                let text = code
                    .lines()
                    .map(str::trim)
                    .find(|line| !line.is_empty())
                    .map(|line| truncate_chars(line, state.config.label_max_chars))
                    .unwrap_or_else(|| UNTITLED.to_string());
                state.emit(node, OutlineKind::CodeBlock, text, zone);
            }
        }
        Role::PageBreak => {
            let text = match node.tag.as_str() {
                "horizontalRule" => "Horizontal Rule",
                _ => "Page Break",
            };
            state.emit(node, OutlineKind::PageBreak, text.to_string(), zone);
        }
        Role::Text | Role::Container => {}
    }

    for child in &node.content {
        collect_items(child, zone, state);
    }
}

/// Text of the first cell of the first row, if short enough to be a label.
fn table_label(table: &Node, max_chars: usize) -> Option<String> {
    let cell = table.content.first()?.content.first()?;
    let text = collect_text(cell);
    (!text.is_empty() && text.chars().count() < max_chars).then_some(text)
}

fn non_empty_or(text: String, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(items: &[OutlineItem]) -> Vec<OutlineKind> {
        items.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_mixed_items_share_one_index() {
        let doc = Document::from_blocks(vec![
            Node::heading(1, "Intro").with_id("h1"),
            Node::image().with_id("f1").with_alt("Diagram"),
            Node::table([["Name", "Value"]]).with_id("t1"),
            Node::page_break(),
            Node::heading(2, "Details").with_id("h2"),
        ]);
        let items = extract_outline(&doc);
        assert_eq!(
            kinds(&items),
            vec![
                OutlineKind::Heading,
                OutlineKind::Image,
                OutlineKind::Table,
                OutlineKind::PageBreak,
                OutlineKind::Heading,
            ]
        );
        let indices: Vec<usize> = items.iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_parent_heading_index() {
        let doc = Document::from_blocks(vec![
            Node::image().with_alt("Cover"),
            Node::heading(1, "One"),
            Node::image().with_alt("In one"),
            Node::heading(2, "One.one"),
            Node::table([["x"]]),
        ]);
        let items = extract_outline(&doc);
        let parents: Vec<Option<usize>> = items.iter().map(|i| i.parent_heading_index).collect();
        assert_eq!(parents, vec![None, None, Some(1), Some(1), Some(3)]);
        let levels: Vec<u8> = items.iter().map(|i| i.level).collect();
        assert_eq!(levels, vec![1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_deep_headings_are_left_out() {
        let doc = Document::from_blocks(vec![
            Node::heading(3, "Three"),
            Node::heading(4, "Four"),
            Node::heading(6, "Six"),
        ]);
        let items = extract_outline(&doc);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Three");
    }

    #[test]
    fn test_code_block_significance() {
        let short = Node::code_block(Some("sh"), "ls -la");
        let many_lines = Node::code_block(None, "a\nb\nc\nd");
        let three_lines = Node::code_block(None, "a\nb\nc");
        let long_line = Node::code_block(None, "x".repeat(51));
        let exactly_fifty = Node::code_block(None, "y".repeat(50));
        let doc = Document::from_blocks(vec![short, many_lines, three_lines, long_line, exactly_fifty]);
        let items = extract_outline(&doc);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "a");
        assert_eq!(items[1].text, format!("{}…", "x".repeat(49)));
    }

    #[test]
    fn test_table_labels() {
        let long = "z".repeat(50);
        let doc = Document::from_blocks(vec![
            Node::table([["Quarter", "Revenue"]]),
            Node::table([[long.as_str()]]),
            Node::table(Vec::<Vec<&str>>::new()),
            Node::table([[""]]),
        ]);
        let labels: Vec<String> = extract_outline(&doc).into_iter().map(|i| i.text).collect();
        assert_eq!(labels, vec!["Quarter", "Table 2", "Table 3", "Table 4"]);
    }

    #[test]
    fn test_placeholders() {
        let doc = Document::from_blocks(vec![
            Node::new(Role::Heading(1)),
            Node::image(),
            Node::code_block(None, "\n\n\n\n"),
            Node::horizontal_rule(),
        ]);
        let labels: Vec<String> = extract_outline(&doc).into_iter().map(|i| i.text).collect();
        assert_eq!(
            labels,
            vec![UNTITLED_SECTION, UNTITLED, UNTITLED, "Horizontal Rule"]
        );
    }

    #[test]
    fn test_synthetic_ids_for_unassigned_nodes() {
        let doc = Document::from_blocks(vec![
            Node::heading(1, "Kept").with_id("kept"),
            Node::page_break(),
            Node::code_block(None, "1\n2\n3\n4\n5"),
        ]);
        let ids: Vec<String> = extract_outline(&doc).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["kept", "page-break-1", "code-block-2"]);
    }

    #[test]
    fn test_synthetic_ids_avoid_stored_ids() {
        let doc = Document::from_blocks(vec![
            Node::table([["a"]]).with_id("table-1"),
            Node::table([["b"]]),
            Node::page_break().with_id("page-break-2"),
            Node::page_break(),
        ]);
        let ids: Vec<String> = extract_outline(&doc).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["table-1", "table-1-2", "page-break-2", "page-break-3"]);
    }

    #[test]
    fn test_config_thresholds() {
        let config = OutlineConfig {
            code_min_lines: 0,
            max_heading_level: 1,
            ..OutlineConfig::default()
        };
        let doc = Document::from_blocks(vec![
            Node::heading(2, "Skipped"),
            Node::code_block(None, "x"),
        ]);
        let items = extract_outline_with_config(&doc, &config);
        assert_eq!(kinds(&items), vec![OutlineKind::CodeBlock]);
    }
}
