//! Documents and zone classification.
//!
//! A document is either a single unstructured tree, or an explicit split
//! into front, middle and back matter. Every node inherits the zone of the
//! top-level block that contains it.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::node::{Node, Role};
use crate::error::Result;

/// Front, middle or back matter.
///
/// Only middle-zone headings receive numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Front,
    #[default]
    Middle,
    Back,
}

impl Zone {
    /// Parse a zone name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "front" => Some(Zone::Front),
            "middle" => Some(Zone::Middle),
            "back" => Some(Zone::Back),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Front => "front",
            Zone::Middle => "middle",
            Zone::Back => "back",
        }
    }
}

/// Explicit three-way split of a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Regions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub front: Vec<Node>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub middle: Vec<Node>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub back: Vec<Node>,
}

/// Input to every engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    /// A single tree. A container root contributes its children as the
    /// top-level blocks; any other root is itself the only block.
    Tree(Node),
    /// Explicit front/middle/back regions.
    Split(Regions),
}

impl Default for Document {
    fn default() -> Self {
        Document::from_blocks(Vec::new())
    }
}

impl Document {
    /// Wrap top-level blocks in a `doc` root.
    pub fn from_blocks(blocks: Vec<Node>) -> Self {
        Document::Tree(Node::container("doc", blocks))
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document from a reader yielding JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize back to JSON in the input shape.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Top-level blocks with their zones, in document order.
    ///
    /// For a split document the front region comes first, then middle, then
    /// back. For a single tree each block takes the zone named in its own
    /// `zone` attribute, defaulting to middle. Zone attributes on deeper
    /// nodes are ignored.
    pub fn blocks(&self) -> Vec<(Zone, &Node)> {
        match self {
            Document::Tree(root) => tree_blocks(root)
                .iter()
                .map(|node| (node.attrs.zone.unwrap_or_default(), node))
                .collect(),
            Document::Split(regions) => {
                let front = regions.front.iter().map(|n| (Zone::Front, n));
                let middle = regions.middle.iter().map(|n| (Zone::Middle, n));
                let back = regions.back.iter().map(|n| (Zone::Back, n));
                front.chain(middle).chain(back).collect()
            }
        }
    }

    /// Mutable top-level blocks in document order.
    pub fn blocks_mut(&mut self) -> Vec<&mut Node> {
        match self {
            Document::Tree(root) => {
                if root.role == Role::Container {
                    root.content.iter_mut().collect()
                } else {
                    vec![root]
                }
            }
            Document::Split(regions) => regions
                .front
                .iter_mut()
                .chain(regions.middle.iter_mut())
                .chain(regions.back.iter_mut())
                .collect(),
        }
    }
}

fn tree_blocks(root: &Node) -> &[Node] {
    if root.role == Role::Container {
        &root.content
    } else {
        std::slice::from_ref(root)
    }
}
