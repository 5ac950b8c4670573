//! Content tree node types and roles.

use serde_json::{Map, Value};

use super::document::Zone;

/// Structural role of a node.
///
/// The caller's `type` string is folded into this closed set when a tree is
/// loaded. Anything the engines do not interpret becomes [`Role::Container`],
/// which is transparent: its children are still walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Headings with a level (1-6 in practice, only 1-3 are numbered).
    Heading(u8),
    /// Table. Caption in [`Attrs::caption`], rows and cells as children.
    Table,
    /// Image or figure. Caption and alt text in [`Attrs`].
    Image,
    /// Code block. Language in [`Attrs::language`].
    CodeBlock,
    /// Page break or horizontal rule.
    PageBreak,
    /// Leaf text content.
    Text,
    /// Paragraphs, lists, rows, cells, blockquotes and every unknown type.
    #[default]
    Container,
}

impl Role {
    /// Map a raw node type to a role.
    ///
    /// `level` is only consulted for headings; a missing level means 1.
    pub fn from_tag(tag: &str, level: Option<u8>) -> Self {
        match tag {
            "heading" => Role::Heading(level.unwrap_or(1)),
            "table" => Role::Table,
            "image" => Role::Image,
            "codeBlock" => Role::CodeBlock,
            "pageBreak" | "horizontalRule" => Role::PageBreak,
            "text" => Role::Text,
            _ => Role::Container,
        }
    }

    /// The type string used when a node is built in code.
    pub fn default_tag(self) -> &'static str {
        match self {
            Role::Heading(_) => "heading",
            Role::Table => "table",
            Role::Image => "image",
            Role::CodeBlock => "codeBlock",
            Role::PageBreak => "pageBreak",
            Role::Text => "text",
            Role::Container => "paragraph",
        }
    }
}

/// Attributes the engines read. Everything else is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attrs {
    /// Stable identifier.
    pub id: Option<String>,
    /// Caption for figures and tables.
    pub caption: Option<String>,
    /// Alternative text for images.
    pub alt: Option<String>,
    /// Code block language.
    pub language: Option<String>,
    /// Explicit zone for a top-level block.
    pub zone: Option<Zone>,
    /// Uninterpreted attributes, preserved for round-tripping.
    pub extra: Map<String, Value>,
}

/// A node in the content tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// Structural role.
    pub role: Role,
    /// Raw type string from the input.
    pub tag: String,
    pub attrs: Attrs,
    /// Text content (only for text nodes).
    pub text: Option<String>,
    /// Child nodes in document order.
    pub content: Vec<Node>,
    /// Top-level fields besides type/attrs/text/content (e.g. `marks`).
    pub other: Map<String, Value>,
}

impl Node {
    /// Create an empty node with the role's default tag.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            tag: role.default_tag().to_string(),
            ..Default::default()
        }
    }

    /// Create a text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(Role::Text)
        }
    }

    /// Create a heading holding a single text leaf.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(Role::Heading(level)).with_child(Self::text(text))
    }

    /// Create a paragraph holding a single text leaf.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(Role::Container).with_child(Self::text(text))
    }

    /// Create a transparent container with an arbitrary tag.
    pub fn container(tag: impl Into<String>, content: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            content,
            ..Self::new(Role::Container)
        }
    }

    /// Create a table from rows of cell text (`tableRow` > `tableCell` > paragraph).
    pub fn table<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|cells| {
                let cells = cells
                    .into_iter()
                    .map(|cell| Self::container("tableCell", vec![Self::paragraph(cell)]))
                    .collect();
                Self::container("tableRow", cells)
            })
            .collect();
        Self {
            content: rows,
            ..Self::new(Role::Table)
        }
    }

    /// Create an image node.
    pub fn image() -> Self {
        Self::new(Role::Image)
    }

    /// Create a code block holding `code` as a single text leaf.
    pub fn code_block(language: Option<&str>, code: impl Into<String>) -> Self {
        let mut node = Self::new(Role::CodeBlock).with_child(Self::text(code));
        node.attrs.language = language.map(String::from);
        node
    }

    /// Create a page break marker.
    pub fn page_break() -> Self {
        Self::new(Role::PageBreak)
    }

    /// Create a horizontal rule marker.
    pub fn horizontal_rule() -> Self {
        Self {
            tag: "horizontalRule".to_string(),
            ..Self::new(Role::PageBreak)
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.attrs.id = Some(id.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.attrs.caption = Some(caption.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.attrs.alt = Some(alt.into());
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.attrs.zone = Some(zone);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.content.push(child);
        self
    }

    /// The node's identifier, ignoring blank values.
    pub fn id(&self) -> Option<&str> {
        self.attrs
            .id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    /// Heading level, if this is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self.role {
            Role::Heading(level) => Some(level),
            _ => None,
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.content.iter().map(Node::subtree_len).sum::<usize>()
    }
}
